//! Row filtering for [`crate::types::WageTable`].

use crate::types::WageTable;

use super::criteria::WageQuery;

/// Returns a new [`WageTable`] containing only rows matching every set
/// criterion in `query`.
///
/// Per-field rules:
///
/// - String fields compare case-insensitively after Unicode lowercasing;
///   equality is exact, never substring.
/// - `sektor` additionally ignores leading/trailing whitespace on both sides.
/// - `tid` matches rows whose year is in the given set.
///
/// Predicates are independent and compose with AND; an empty query returns
/// the whole table. Original relative row order is preserved.
pub fn apply(table: &WageTable, query: &WageQuery) -> WageTable {
    // Normalize caller input once, not per row.
    let yrke = query.yrke.as_deref().map(str::to_lowercase);
    let kjonn = query.kjonn.as_deref().map(str::to_lowercase);
    let sektor = query.sektor.as_deref().map(|s| s.trim().to_lowercase());
    let avtalt_vanlig = query.avtalt_vanlig.as_deref().map(str::to_lowercase);
    let maale_metode = query.maale_metode.as_deref().map(str::to_lowercase);
    let innhold = query.innhold.as_deref().map(str::to_lowercase);

    table.filter_rows(|row| {
        matches_ci(&yrke, &row.yrke)
            && matches_ci(&kjonn, &row.kjonn)
            && matches_ci_trimmed(&sektor, &row.sektor)
            && matches_ci(&avtalt_vanlig, &row.avtalt_vanlig)
            && matches_ci(&maale_metode, &row.maale_metode)
            && matches_ci(&innhold, &row.contents_code)
            && query.tid.as_ref().is_none_or(|years| years.contains(&row.tid))
    })
}

fn matches_ci(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_ref()
        .is_none_or(|w| *w == actual.to_lowercase())
}

fn matches_ci_trimmed(wanted: &Option<String>, actual: &str) -> bool {
    wanted
        .as_ref()
        .is_none_or(|w| *w == actual.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::query::criteria::WageQuery;
    use crate::types::{WageRecord, WageTable};

    fn record(yrke: &str, kjonn: &str, tid: i32, sektor: &str) -> WageRecord {
        WageRecord {
            yrke: yrke.to_string(),
            kjonn: kjonn.to_string(),
            tid,
            sektor: sektor.to_string(),
            avtalt_vanlig: "Heltidsansatte".to_string(),
            contents_code: "Månedslønn (kr)".to_string(),
            maale_metode: "Gjennomsnitt".to_string(),
            value: Some(45000.0),
        }
    }

    fn sample_table() -> WageTable {
        WageTable::new(vec![
            record("Sykepleier", "Kvinner", 2020, "Kommune og fylkeskommune"),
            record("Sykepleier", "Menn", 2021, "Statsforvaltningen"),
            record("Lærer", "Begge kjønn", 2021, "Kommune og fylkeskommune"),
            record("Sykepleier", "Kvinner", 2022, "Kommune og fylkeskommune"),
        ])
    }

    #[test]
    fn empty_query_returns_whole_table_in_order() {
        let table = sample_table();
        let out = apply(&table, &WageQuery::default());
        assert_eq!(out, table);
    }

    #[test]
    fn string_matching_is_case_insensitive() {
        let table = sample_table();
        let upper = apply(
            &table,
            &WageQuery {
                kjonn: Some("MENN".to_string()),
                ..Default::default()
            },
        );
        let lower = apply(
            &table,
            &WageQuery {
                kjonn: Some("menn".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(upper, lower);
        assert_eq!(upper.row_count(), 1);
        assert_eq!(upper.rows[0].tid, 2021);
    }

    #[test]
    fn sektor_tolerates_surrounding_whitespace() {
        let table = sample_table();
        let out = apply(
            &table,
            &WageQuery {
                sektor: Some("  statsforvaltningen ".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0].kjonn, "Menn");
    }

    #[test]
    fn matching_is_exact_not_substring() {
        let table = sample_table();
        let out = apply(
            &table,
            &WageQuery {
                yrke: Some("Syke".to_string()),
                ..Default::default()
            },
        );
        assert!(out.is_empty());
    }

    #[test]
    fn year_set_matches_membership() {
        let table = sample_table();
        let out = apply(
            &table,
            &WageQuery {
                tid: Some(vec![2020, 2022]),
                ..Default::default()
            },
        );
        assert_eq!(out.row_count(), 2);
        assert!(out.rows.iter().all(|r| r.tid == 2020 || r.tid == 2022));
    }

    #[test]
    fn criteria_compose_with_and() {
        let table = sample_table();
        let out = apply(
            &table,
            &WageQuery {
                yrke: Some("sykepleier".to_string()),
                kjonn: Some("Kvinner".to_string()),
                tid: Some(vec![2022]),
                ..Default::default()
            },
        );
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0].tid, 2022);
    }

    #[test]
    fn innhold_matches_contents_code() {
        let table = sample_table();
        let out = apply(
            &table,
            &WageQuery {
                innhold: Some("månedslønn (kr)".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(out.row_count(), 4);
    }
}
