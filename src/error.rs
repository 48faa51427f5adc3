use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the dataset loader.
///
/// Any of these is fatal at startup: the service refuses to start rather than
/// serve a partial table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// CSV reader error, including I/O failures opening or reading a file.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The `*.csv` glob pattern could not be built from the data directory.
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A path matched by the glob could not be read.
    #[error("glob error: {0}")]
    Glob(#[from] glob::GlobError),

    /// The configured data directory does not exist or is not a directory.
    #[error("data directory not found: {0}")]
    DataDirMissing(PathBuf),

    /// The data directory contains no `*.csv` files.
    #[error("no csv files found in data directory: {0}")]
    NoInputFiles(PathBuf),

    /// The input does not conform to the expected column set.
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A cell could not be parsed into the required field type.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
