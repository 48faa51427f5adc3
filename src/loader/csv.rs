//! CSV parsing for a single wage statistics file.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{WageRecord, WageTable};

/// Column headers the loader requires in every input file.
const COL_YRKE: &str = "Yrke";
const COL_KJONN: &str = "Kjonn";
const COL_TID: &str = "Tid";
const COL_SEKTOR: &str = "Sektor";
const COL_AVTALT_VANLIG: &str = "AvtaltVanlig";
const COL_CONTENTS_CODE: &str = "ContentsCode";
const COL_MAALE_METODE: &str = "MaaleMetode";
const COL_VALUE: &str = "value";

/// Resolved positions of the required columns in one file's header row.
///
/// Column order in the file is free; columns are located by header name.
struct ColumnIndexes {
    yrke: usize,
    kjonn: usize,
    tid: usize,
    sektor: usize,
    avtalt_vanlig: usize,
    contents_code: usize,
    maale_metode: usize,
    value: usize,
}

impl ColumnIndexes {
    fn resolve(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &str| -> LoadResult<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                LoadError::SchemaMismatch {
                    message: format!(
                        "missing required column '{name}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>()
                    ),
                }
            })
        };

        Ok(Self {
            yrke: find(COL_YRKE)?,
            kjonn: find(COL_KJONN)?,
            tid: find(COL_TID)?,
            sektor: find(COL_SEKTOR)?,
            avtalt_vanlig: find(COL_AVTALT_VANLIG)?,
            contents_code: find(COL_CONTENTS_CODE)?,
            maale_metode: find(COL_MAALE_METODE)?,
            value: find(COL_VALUE)?,
        })
    }
}

/// Parse one CSV file into a [`WageTable`].
///
/// Rules:
///
/// - The CSV must have a header row.
/// - Headers must contain all required columns (order can differ).
/// - `Tid` must parse as an integer year; an unparseable year is an error.
/// - An empty `value` cell becomes `None`; anything else must parse as a number.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> LoadResult<WageTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Parse CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<WageTable> {
    let headers = rdr.headers()?.clone();
    let cols = ColumnIndexes::resolve(&headers)?;

    let mut rows: Vec<WageRecord> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        rows.push(WageRecord {
            yrke: cell(cols.yrke).to_owned(),
            kjonn: cell(cols.kjonn).to_owned(),
            tid: parse_year(user_row, cell(cols.tid))?,
            sektor: cell(cols.sektor).to_owned(),
            avtalt_vanlig: cell(cols.avtalt_vanlig).to_owned(),
            contents_code: cell(cols.contents_code).to_owned(),
            maale_metode: cell(cols.maale_metode).to_owned(),
            value: parse_value(user_row, cell(cols.value))?,
        });
    }

    Ok(WageTable::new(rows))
}

fn parse_year(row: usize, raw: &str) -> LoadResult<i32> {
    raw.parse::<i32>().map_err(|e| LoadError::ParseError {
        row,
        column: COL_TID.to_owned(),
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

fn parse_value(row: usize, raw: &str) -> LoadResult<Option<f64>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|e| LoadError::ParseError {
            row,
            column: COL_VALUE.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
