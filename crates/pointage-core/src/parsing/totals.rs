use rust_decimal::Decimal;

use crate::layout::schema::ColumnLayout;
use crate::parsing::table::NormalizedTable;
use crate::parsing::time::{clean_time_text, parse_time};

/// A selected row, before the company name is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalRow {
    pub label: String,
    pub value: Option<String>,
    pub time_text: Option<String>,
    pub decimal_hours: Decimal,
}

/// Keep the rows whose label column contains the layout keyword.
///
/// All tables of one document are stacked first, in production order, so
/// the result follows page order then row order. Missing value or time
/// columns yield absent cells.
pub fn filter_totals(tables: &[NormalizedTable], layout: &ColumnLayout) -> Vec<TotalRow> {
    let all = NormalizedTable::concat(tables);
    if all.width() == 0 {
        return Vec::new();
    }

    let keyword = layout.keyword.to_lowercase();

    (0..all.len())
        .filter_map(|row| {
            let label = all.cell(row, layout.label_column)?;
            if !label.to_lowercase().contains(&keyword) {
                return None;
            }

            let time_text = all.cell(row, layout.time_column).map(clean_time_text);
            let time = parse_time(time_text.as_deref());
            if time.is_defaulted() {
                tracing::debug!(label, time = ?time_text, reason = ?time, "time defaulted to zero");
            }

            Some(TotalRow {
                label: label.to_string(),
                value: all.cell(row, layout.value_column).map(str::to_string),
                time_text,
                decimal_hours: time.hours(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::RawTable;
    use crate::parsing::table::{normalize, DEFAULT_MIN_COLUMNS};
    use rust_decimal_macros::dec;

    fn table(rows: &[Vec<&str>]) -> NormalizedTable {
        normalize(&RawTable::from_text_rows(rows), DEFAULT_MIN_COLUMNS).unwrap()
    }

    #[test]
    fn test_keeps_total_rows_case_insensitively() {
        let t = table(&[
            vec!["Lundi", "10", "", "", "", "7h00"],
            vec!["Total", "100", "", "", "", "8h30"],
            vec!["TOTAL GEN", "200", "", "", "", "4:15"],
            vec!["sous-total", "5", "", "", "", "0h45"],
        ]);
        let rows = filter_totals(&[t], &ColumnLayout::standard());

        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Total", "TOTAL GEN", "sous-total"]);
        assert_eq!(rows[0].value.as_deref(), Some("100"));
        assert_eq!(rows[0].time_text.as_deref(), Some("8:30"));
        assert_eq!(rows[0].decimal_hours, dec!(8.5));
        assert_eq!(rows[1].decimal_hours, dec!(4.25));
        assert_eq!(rows[2].decimal_hours, dec!(0.75));
    }

    #[test]
    fn test_absent_label_never_matches() {
        let raw = RawTable::new(vec![
            vec![None, Some("Total".into())],
            vec![Some("Total".into()), None],
        ]);
        let t = normalize(&raw, DEFAULT_MIN_COLUMNS).unwrap();
        let rows = filter_totals(&[t], &ColumnLayout::standard());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, None);
    }

    #[test]
    fn test_missing_time_column_is_absent_and_zero() {
        let t = table(&[vec!["Total", "100", "8h30"]]);
        let rows = filter_totals(&[t], &ColumnLayout::standard());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].time_text, None);
        assert_eq!(rows[0].decimal_hours, Decimal::ZERO);
    }

    #[test]
    fn test_concatenates_tables_in_order() {
        let a = table(&[vec!["Total A", "1", "", "", "", "1:00"]]);
        let b = table(&[vec!["Total B", "2", "", "", "", "2:00", "extra"]]);
        let rows = filter_totals(&[a, b], &ColumnLayout::standard());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "Total A");
        assert_eq!(rows[1].label, "Total B");
    }

    #[test]
    fn test_no_tables_yields_nothing() {
        assert!(filter_totals(&[], &ColumnLayout::standard()).is_empty());
    }

    #[test]
    fn test_custom_layout_positions() {
        let layout = ColumnLayout {
            name: "compact".into(),
            description: None,
            label_column: 1,
            value_column: 2,
            time_column: 3,
            min_columns: 3,
            keyword: "total".into(),
        };
        let t = normalize(
            &RawTable::from_text_rows(&[vec!["Total", "100", " 8h30 "]]),
            layout.min_columns,
        )
        .unwrap();
        let rows = filter_totals(&[t], &layout);
        assert_eq!(rows[0].time_text.as_deref(), Some("8:30"));
        assert_eq!(rows[0].decimal_hours, dec!(8.5));
    }

    #[test]
    fn test_unparseable_time_keeps_text() {
        let t = table(&[vec!["Total", "100", "", "", "", "n/a"]]);
        let rows = filter_totals(&[t], &ColumnLayout::standard());
        assert_eq!(rows[0].time_text.as_deref(), Some("n/a"));
        assert_eq!(rows[0].decimal_hours, Decimal::ZERO);
    }
}
