//! Dataset loading.
//!
//! [`load_table`] enumerates every `*.csv` file under a directory, parses
//! each into fixed-shape records and concatenates them into one
//! [`crate::types::WageTable`]. Row order is file enumeration order (the glob
//! walks paths in sorted order), then intra-file order.
//!
//! Loading runs once at process startup. Any failure (missing directory, no
//! input files, a malformed file) is fatal; the service never starts on a
//! partial table. Per-file outcomes are reported to an optional
//! [`LoadObserver`].

pub mod csv;
pub mod observability;

use std::path::Path;
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::types::{WageRecord, WageTable};

pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver,
};

/// Employment-type value kept by the baseline filter.
pub const HELTIDSANSATTE: &str = "Heltidsansatte";
/// Measured quantity kept by the baseline filter.
pub const MAANEDSLONN_KR: &str = "Månedslønn (kr)";
/// Measurement method kept by the baseline filter.
pub const GJENNOMSNITT: &str = "Gjennomsnitt";
/// The three recognized gender values.
pub const RECOGNIZED_KJONN: [&str; 3] = ["Menn", "Kvinner", "Begge kjønn"];

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// Restrict the loaded table to the fixed baseline subset
    /// (full-time employees, monthly wage in kroner, recognized gender
    /// values, mean measurement). The default leaves the full breadth in and
    /// lets callers constrain these dimensions per query instead.
    pub baseline_filter: bool,
    /// Optional observer for per-file load outcomes.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl std::fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("baseline_filter", &self.baseline_filter)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            baseline_filter: false,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Returns `true` if `record` belongs to the fixed baseline subset.
pub fn is_baseline_row(record: &WageRecord) -> bool {
    record.avtalt_vanlig == HELTIDSANSATTE
        && record.contents_code == MAANEDSLONN_KR
        && record.maale_metode == GJENNOMSNITT
        && RECOGNIZED_KJONN.contains(&record.kjonn.as_str())
}

/// Load every `*.csv` file under `dir` into one [`WageTable`].
///
/// When an observer is configured, each file reports:
///
/// - `on_success` with its row count
/// - `on_failure` with a computed severity on failure
/// - `on_alert` on failure when the severity is >= `options.alert_at_or_above`
///
/// The first file that fails aborts the whole load.
pub fn load_table(dir: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<WageTable> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::DataDirMissing(dir.to_path_buf()));
    }

    let pattern = dir.join("*.csv").to_string_lossy().into_owned();

    let mut table = WageTable::default();
    let mut files_seen = 0usize;
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        files_seen += 1;

        let ctx = LoadContext { path: path.clone() };
        match csv::load_csv_from_path(&path) {
            Ok(file_table) => {
                if let Some(obs) = options.observer.as_ref() {
                    obs.on_success(
                        &ctx,
                        LoadStats {
                            rows: file_table.row_count(),
                        },
                    );
                }
                table.extend_from(file_table);
            }
            Err(e) => {
                if let Some(obs) = options.observer.as_ref() {
                    let sev = severity_for_error(&e);
                    obs.on_failure(&ctx, sev, &e);
                    if sev >= options.alert_at_or_above {
                        obs.on_alert(&ctx, sev, &e);
                    }
                }
                return Err(e);
            }
        }
    }

    if files_seen == 0 {
        return Err(LoadError::NoInputFiles(dir.to_path_buf()));
    }

    if options.baseline_filter {
        table = table.filter_rows(is_baseline_row);
    }

    Ok(table)
}

fn severity_for_error(e: &LoadError) -> LoadSeverity {
    match e {
        LoadError::Glob(_) => LoadSeverity::Critical,
        LoadError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        LoadError::Pattern(_) | LoadError::DataDirMissing(_) | LoadError::NoInputFiles(_) => {
            LoadSeverity::Critical
        }
        LoadError::SchemaMismatch { .. } | LoadError::ParseError { .. } => LoadSeverity::Error,
    }
}
