//! Runtime configuration, read once from the process environment.

use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the `*.csv` input files.
    pub data_dir: PathBuf,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Restrict the loaded table to the fixed baseline subset at startup
    /// instead of exposing the full breadth to query-time criteria.
    pub baseline_filter: bool,
}

impl AppConfig {
    /// Read configuration from environment variables, with defaults:
    ///
    /// - `LONN_DATA_DIR` (default `data`)
    /// - `LONN_BIND` (default `127.0.0.1:8000`)
    /// - `LONN_BASELINE_FILTER` (default off; `1`/`true` enables)
    pub fn from_env() -> Self {
        let data_dir = std::env::var("LONN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        let bind_addr =
            std::env::var("LONN_BIND").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let baseline_filter = std::env::var("LONN_BASELINE_FILTER")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            data_dir,
            bind_addr,
            baseline_filter,
        }
    }
}
