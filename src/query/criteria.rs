//! Filter criteria for one query.

use thiserror::Error;

/// Error produced while turning raw query parameters into a [`WageQuery`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryParseError {
    /// `tid` must be an integer year.
    #[error("invalid value for 'tid': '{raw}' is not an integer year")]
    InvalidTid { raw: String },
}

/// Which response shape a query gets.
///
/// The mode is decided once, from whether any criterion is set, and consumed
/// by the aggregator; it is never re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// No criterion set: return every row verbatim.
    Listing,
    /// At least one criterion set: return the mean value per year.
    Aggregate,
}

/// Optional filter criteria supplied by a caller for one query.
///
/// Every field is independent; unset fields impose no constraint and set
/// fields compose with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WageQuery {
    /// Occupation, matched case-insensitively.
    pub yrke: Option<String>,
    /// Gender, matched case-insensitively.
    pub kjonn: Option<String>,
    /// Year(s); a row matches if its year is in the set.
    pub tid: Option<Vec<i32>>,
    /// Sector, matched case-insensitively with surrounding whitespace ignored.
    pub sektor: Option<String>,
    /// Employment-type classifier, matched case-insensitively.
    pub avtalt_vanlig: Option<String>,
    /// Measurement method, matched case-insensitively.
    pub maale_metode: Option<String>,
    /// Measured quantity label (`ContentsCode`), matched case-insensitively.
    pub innhold: Option<String>,
}

impl WageQuery {
    /// Returns `true` if at least one criterion is set.
    pub fn has_any_criterion(&self) -> bool {
        self.yrke.is_some()
            || self.kjonn.is_some()
            || self.tid.is_some()
            || self.sektor.is_some()
            || self.avtalt_vanlig.is_some()
            || self.maale_metode.is_some()
            || self.innhold.is_some()
    }

    /// The response mode this query selects.
    pub fn mode(&self) -> QueryMode {
        if self.has_any_criterion() {
            QueryMode::Aggregate
        } else {
            QueryMode::Listing
        }
    }

    /// Build a query from raw `(key, value)` parameter pairs.
    ///
    /// - `tid` may repeat; all values are collected into the year set.
    /// - Empty values are treated as unset.
    /// - Unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Result<Self, QueryParseError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        let mut years: Vec<i32> = Vec::new();

        for (key, value) in pairs {
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "yrke" => query.yrke = Some(value.to_owned()),
                "kjonn" => query.kjonn = Some(value.to_owned()),
                "sektor" => query.sektor = Some(value.to_owned()),
                "avtaltvanlig" => query.avtalt_vanlig = Some(value.to_owned()),
                "maale_metode" => query.maale_metode = Some(value.to_owned()),
                "innhold" => query.innhold = Some(value.to_owned()),
                "tid" => {
                    let year = value
                        .trim()
                        .parse::<i32>()
                        .map_err(|_| QueryParseError::InvalidTid {
                            raw: value.to_owned(),
                        })?;
                    years.push(year);
                }
                _ => {}
            }
        }

        if !years.is_empty() {
            query.tid = Some(years);
        }
        Ok(query)
    }
}
