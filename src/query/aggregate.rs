//! Aggregation over a filtered [`crate::types::WageTable`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{WageRecord, WageTable};

use super::criteria::QueryMode;

/// Structured error payload returned when a filter matches nothing.
pub const NO_DATA_MESSAGE: &str = "Ingen data funnet for valgt filter.";

/// Mean wage for one year of the filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearMean {
    /// Observation year.
    #[serde(rename = "Tid")]
    pub tid: i32,
    /// Mean of the defined values in this year's group, rounded to one
    /// decimal; `None` when the group has no defined value.
    pub value: Option<f64>,
}

/// Response produced by one query.
///
/// Serializes untagged: a listing is an array of row objects, a grouped
/// aggregate is an array of `{Tid, value}` objects, and a miss is an
/// `{"error": ...}` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WageResponse {
    /// Every filtered row verbatim (listing mode).
    Rows(Vec<WageRecord>),
    /// One mean per distinct year, ascending (aggregate mode).
    Grouped(Vec<YearMean>),
    /// No row matched the criteria.
    NotFound {
        /// Human-readable message.
        error: String,
    },
}

/// Aggregate a filtered table into a response.
///
/// - [`QueryMode::Listing`]: every row verbatim; missing values stay `None`.
/// - [`QueryMode::Aggregate`]: rows grouped by year; each group's mean is
///   computed over rows with a defined value only. A missing value is
///   excluded from both numerator and denominator, and a group with no
///   defined value at all reports `None` instead of a number. Means are
///   rounded to one decimal, half away from zero. Groups are emitted in
///   ascending year order. An empty filtered table yields
///   [`WageResponse::NotFound`].
pub fn aggregate(filtered: &WageTable, mode: QueryMode) -> WageResponse {
    match mode {
        QueryMode::Listing => WageResponse::Rows(filtered.rows.clone()),
        QueryMode::Aggregate => {
            if filtered.is_empty() {
                return WageResponse::NotFound {
                    error: NO_DATA_MESSAGE.to_string(),
                };
            }

            // BTreeMap keys give the ascending-year output order.
            let mut groups: BTreeMap<i32, (f64, u32)> = BTreeMap::new();
            for row in &filtered.rows {
                let entry = groups.entry(row.tid).or_insert((0.0, 0));
                if let Some(v) = row.value {
                    entry.0 += v;
                    entry.1 += 1;
                }
            }

            let means = groups
                .into_iter()
                .map(|(tid, (sum, count))| YearMean {
                    tid,
                    value: (count > 0).then(|| round1(sum / f64::from(count))),
                })
                .collect();
            WageResponse::Grouped(means)
        }
    }
}

/// Round to one decimal place, half away from zero.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
