use std::sync::Arc;

use lonn_api::config::AppConfig;
use lonn_api::http;
use lonn_api::loader::{self, LoadOptions, TracingObserver};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "starting lonn-api");

    let options = LoadOptions {
        baseline_filter: config.baseline_filter,
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    // Load failures are fatal: no partial service.
    let table = match loader::load_table(&config.data_dir, &options) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(error = %e, "failed to load dataset");
            std::process::exit(1);
        }
    };
    tracing::info!(rows = table.row_count(), "dataset loaded");

    http::build_server(table, &config.bind_addr)?.await
}
