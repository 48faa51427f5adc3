//! HTTP boundary: the `/lonn/` endpoint.
//!
//! A thin transport layer around [`crate::query`]: it extracts filter
//! criteria from the query string, runs filter + aggregate against the shared
//! read-only table and serializes the result. Cross-origin access is open to
//! any origin; the CORS middleware also answers preflight requests.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;

use crate::query::{aggregate, apply, WageQuery};
use crate::types::WageTable;

/// Shared, read-only application state.
///
/// The table is built once at startup and handed to every worker by
/// reference; queries never mutate it, so no locking is needed.
pub struct AppState {
    /// The loaded wage dataset.
    pub table: WageTable,
}

#[get("/lonn/")]
async fn get_lonn(
    data: web::Data<AppState>,
    params: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let query = match WageQuery::from_pairs(params.as_slice()) {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(error = %e, "rejected query parameters");
            return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
        }
    };

    tracing::debug!(?query, "serving wage query");
    let filtered = apply(&data.table, &query);
    HttpResponse::Ok().json(aggregate(&filtered, query.mode()))
}

/// Register the service's routes on an actix `App`.
///
/// Shared between [`build_server`] and the integration tests so both exercise
/// the same assembly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_lonn);
}

/// Build the HTTP server around a loaded table.
pub fn build_server(table: WageTable, bind_addr: &str) -> std::io::Result<Server> {
    let state = web::Data::new(AppState { table });

    let server = HttpServer::new(move || {
        // Any origin may read this public dataset.
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
