//! `lonn-api` is a read-only query service over SSB wage statistics.
//!
//! At startup every `*.csv` file under a configured directory is parsed into
//! one immutable in-memory [`types::WageTable`]. Each request then filters
//! that table by optional criteria (occupation, gender, sector, year(s),
//! measurement metadata) and returns either the raw matching rows or the mean
//! wage per year.
//!
//! ## Query semantics
//!
//! - String criteria match case-insensitively; `sektor` also ignores
//!   surrounding whitespace. Equality is exact, never substring.
//! - `tid` accepts one or more years; a row matches if its year is in the set.
//! - Set criteria compose with AND; with no criteria set, the full table is
//!   listed verbatim.
//! - With at least one criterion set, rows are grouped by year and each
//!   group's mean is computed over defined values only, rounded to one
//!   decimal. A group with no defined value reports `null`; a filter matching
//!   nothing yields a structured `{"error": ...}` object.
//!
//! ## Quick example: run a query in memory
//!
//! ```rust
//! use lonn_api::query::{aggregate, apply, WageQuery};
//! use lonn_api::types::WageTable;
//!
//! let table = WageTable::default();
//! let query = WageQuery::from_pairs(&[("yrke", "Sykepleier")]).unwrap();
//! let filtered = apply(&table, &query);
//! let response = aggregate(&filtered, query.mode());
//! // An empty table matches nothing: the response is the structured miss.
//! assert_eq!(
//!     serde_json::to_value(&response).unwrap()["error"],
//!     lonn_api::query::NO_DATA_MESSAGE
//! );
//! ```
//!
//! ## Modules
//!
//! - [`loader`]: CSV discovery and parsing into the startup table
//! - [`types`]: the fixed-shape record and table
//! - [`query`]: the filter-and-aggregate engine
//! - [`http`]: the `/lonn/` endpoint and server assembly
//! - [`config`]: environment-based runtime settings
//! - [`error`]: error types used across loading

pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod query;
pub mod types;

pub use error::{LoadError, LoadResult};
