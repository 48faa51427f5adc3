//! The filter-and-aggregate query engine.
//!
//! A query runs in two steps over the immutable startup table:
//!
//! 1. [`filter::apply`] narrows the table to rows matching every set
//!    criterion of a [`WageQuery`].
//! 2. [`aggregate::aggregate`] turns the filtered table into a
//!    [`WageResponse`] according to the query's [`QueryMode`].
//!
//! ## Example
//!
//! ```rust
//! use lonn_api::query::{aggregate, apply, WageQuery, WageResponse, YearMean};
//! use lonn_api::types::{WageRecord, WageTable};
//!
//! let table = WageTable::new(vec![
//!     WageRecord {
//!         yrke: "Sykepleier".to_string(),
//!         kjonn: "Kvinner".to_string(),
//!         tid: 2021,
//!         sektor: "Kommune og fylkeskommune".to_string(),
//!         avtalt_vanlig: "Heltidsansatte".to_string(),
//!         contents_code: "Månedslønn (kr)".to_string(),
//!         maale_metode: "Gjennomsnitt".to_string(),
//!         value: Some(45000.0),
//!     },
//!     WageRecord {
//!         yrke: "Sykepleier".to_string(),
//!         kjonn: "Kvinner".to_string(),
//!         tid: 2021,
//!         sektor: "Statsforvaltningen".to_string(),
//!         avtalt_vanlig: "Heltidsansatte".to_string(),
//!         contents_code: "Månedslønn (kr)".to_string(),
//!         maale_metode: "Gjennomsnitt".to_string(),
//!         value: Some(47000.0),
//!     },
//! ]);
//!
//! let query = WageQuery {
//!     yrke: Some("sykepleier".to_string()),
//!     kjonn: Some("Kvinner".to_string()),
//!     tid: Some(vec![2021]),
//!     ..Default::default()
//! };
//!
//! let filtered = apply(&table, &query);
//! let response = aggregate(&filtered, query.mode());
//! assert_eq!(
//!     response,
//!     WageResponse::Grouped(vec![YearMean { tid: 2021, value: Some(46000.0) }])
//! );
//! ```

pub mod aggregate;
pub mod criteria;
pub mod filter;

pub use aggregate::{aggregate, WageResponse, YearMean, NO_DATA_MESSAGE};
pub use criteria::{QueryMode, QueryParseError, WageQuery};
pub use filter::apply;
