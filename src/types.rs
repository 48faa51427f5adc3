//! Core data model types.
//!
//! This crate loads SSB wage statistics CSVs into an in-memory [`WageTable`]
//! of fixed-shape [`WageRecord`]s. The table is built once at startup and is
//! never mutated while the service runs; query handlers share it read-only.

use serde::Serialize;

/// One observation in the wage dataset.
///
/// Field names on the wire (JSON and CSV headers) follow the source dataset's
/// column names. A missing monthly wage is `None` and serializes as JSON
/// `null`; it is never coerced to `0.0` or a non-finite marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WageRecord {
    /// Occupation, e.g. "Sykepleier".
    #[serde(rename = "Yrke")]
    pub yrke: String,
    /// Gender: "Menn", "Kvinner" or "Begge kjønn".
    #[serde(rename = "Kjonn")]
    pub kjonn: String,
    /// Observation year.
    #[serde(rename = "Tid")]
    pub tid: i32,
    /// Sector, e.g. "Sum alle sektorer" or "Kommune og fylkeskommune".
    #[serde(rename = "Sektor")]
    pub sektor: String,
    /// Employment-type classifier, e.g. "Heltidsansatte".
    #[serde(rename = "AvtaltVanlig")]
    pub avtalt_vanlig: String,
    /// Measured quantity label, e.g. "Månedslønn (kr)".
    #[serde(rename = "ContentsCode")]
    pub contents_code: String,
    /// Measurement method, e.g. "Gjennomsnitt".
    #[serde(rename = "MaaleMetode")]
    pub maale_metode: String,
    /// Measured value; `None` when the source cell is empty.
    pub value: Option<f64>,
}

/// In-memory wage dataset.
///
/// Rows keep the order they were loaded in: file enumeration order first,
/// intra-file order second. Duplicate rows across source files are preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WageTable {
    /// Ordered row storage.
    pub rows: Vec<WageRecord>,
}

impl WageTable {
    /// Create a table from rows.
    pub fn new(rows: Vec<WageRecord>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table preserves the original relative row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&WageRecord) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Append all rows from `other`, preserving their order.
    pub fn extend_from(&mut self, other: WageTable) {
        self.rows.extend(other.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::{WageRecord, WageTable};

    fn record(yrke: &str, tid: i32, value: Option<f64>) -> WageRecord {
        WageRecord {
            yrke: yrke.to_string(),
            kjonn: "Kvinner".to_string(),
            tid,
            sektor: "Kommune og fylkeskommune".to_string(),
            avtalt_vanlig: "Heltidsansatte".to_string(),
            contents_code: "Månedslønn (kr)".to_string(),
            maale_metode: "Gjennomsnitt".to_string(),
            value,
        }
    }

    #[test]
    fn filter_rows_preserves_order_and_original() {
        let table = WageTable::new(vec![
            record("Sykepleier", 2020, Some(44000.0)),
            record("Lærer", 2020, Some(46000.0)),
            record("Sykepleier", 2021, None),
        ]);

        let out = table.filter_rows(|r| r.yrke == "Sykepleier");
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0].tid, 2020);
        assert_eq!(out.rows[1].tid, 2021);
        // Original unchanged
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn missing_value_serializes_as_null() {
        let json = serde_json::to_value(record("Sykepleier", 2021, None)).unwrap();
        assert!(json["value"].is_null());
        assert_eq!(json["Yrke"], "Sykepleier");
        assert_eq!(json["Tid"], 2021);
    }

    #[test]
    fn extend_from_concatenates_in_order() {
        let mut table = WageTable::new(vec![record("A", 2020, Some(1.0))]);
        table.extend_from(WageTable::new(vec![record("B", 2021, Some(2.0))]));
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].yrke, "B");
    }
}
