use std::fmt;
use std::path::Path;
use std::str::FromStr;

use csv::WriterBuilder;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;
use serde::{Deserialize, Serialize};

use crate::error::PointageError;
use crate::model::{ExtractedRow, OUTPUT_COLUMNS};

/// Name of the single worksheet in xlsx output.
pub const SHEET_NAME: &str = "Synthèse";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    Xlsx,
}

impl OutputFormat {
    /// `.json` and `.xlsx` files get their own format, anything else CSV.
    pub fn from_path(path: &Path) -> OutputFormat {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => OutputFormat::Xlsx,
            _ => OutputFormat::Csv,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PointageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "xlsx" => Ok(OutputFormat::Xlsx),
            other => Err(PointageError::InvalidOption(format!(
                "unknown output format '{other}' (expected csv, json or xlsx)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Xlsx => write!(f, "xlsx"),
        }
    }
}

/// Write rows to `path` in the given format.
pub fn write_rows(
    path: &Path,
    rows: &[ExtractedRow],
    format: OutputFormat,
) -> Result<(), PointageError> {
    match format {
        OutputFormat::Csv => write_csv(path, rows, b','),
        OutputFormat::Json => write_json(path, rows),
        OutputFormat::Xlsx => write_xlsx(path, rows),
    }
}

/// Write rows as a single CSV sheet with the French column headers.
pub fn write_csv(path: &Path, rows: &[ExtractedRow], delimiter: u8) -> Result<(), PointageError> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render rows as CSV into a string.
pub fn write_csv_to_string(rows: &[ExtractedRow], delimiter: u8) -> Result<String, PointageError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::<u8>::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let bytes = writer
        .into_inner()
        .map_err(|error| PointageError::Io(error.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|error| PointageError::InvalidOption(format!("invalid utf-8 csv output: {error}")))
}

pub fn write_json(path: &Path, rows: &[ExtractedRow]) -> Result<(), PointageError> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write rows as a workbook with one sheet named [`SHEET_NAME`].
///
/// Absent cells stay empty and decimal hours are stored as numbers.
pub fn write_xlsx(path: &Path, rows: &[ExtractedRow]) -> Result<(), PointageError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, header) in OUTPUT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, row.company.as_str())?;
        sheet.write_string(r, 1, row.label.as_str())?;
        if let Some(value) = &row.value {
            sheet.write_string(r, 2, value.as_str())?;
        }
        if let Some(time) = &row.time_text {
            sheet.write_string(r, 3, time.as_str())?;
        }
        sheet.write_number(r, 4, row.decimal_hours.to_f64().unwrap_or_default())?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};
    use rust_decimal_macros::dec;

    fn rows() -> Vec<ExtractedRow> {
        vec![
            ExtractedRow {
                company: "A".into(),
                label: "Total".into(),
                value: Some("100".into()),
                time_text: Some("8:30".into()),
                decimal_hours: dec!(8.5),
            },
            ExtractedRow {
                company: "B".into(),
                label: "Total, semaine".into(),
                value: None,
                time_text: None,
                decimal_hours: dec!(0),
            },
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = write_csv_to_string(&rows(), b',').unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(OUTPUT_COLUMNS.join(",").as_str()));
        assert_eq!(lines.next(), Some("A,Total,100,8:30,8.5"));
        assert_eq!(lines.next(), Some("B,\"Total, semaine\",,,0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_rows(&path, &rows(), OutputFormat::from_path(&path)).unwrap();

        let back: Vec<ExtractedRow> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, rows());
    }

    #[test]
    fn test_write_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synthese.csv");
        write_rows(&path, &rows(), OutputFormat::from_path(&path)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Societe,Libellé,Valeur"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("xlsx".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
        assert!("ods".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::from_path(Path::new("x.JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("x.XLSX")), OutputFormat::Xlsx);
        assert_eq!(OutputFormat::from_path(Path::new("x.txt")), OutputFormat::Csv);
    }

    #[test]
    fn test_write_xlsx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("synthese.xlsx");
        write_rows(&path, &rows(), OutputFormat::from_path(&path)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        assert_eq!(range.get((0, 0)), Some(&Data::String("Societe".into())));
        assert_eq!(range.get((0, 4)), Some(&Data::String("Heures_decimales".into())));
        assert_eq!(range.get((1, 3)), Some(&Data::String("8:30".into())));
        assert_eq!(range.get((1, 4)), Some(&Data::Float(8.5)));
        assert_eq!(range.get((2, 2)), Some(&Data::Empty));
        assert_eq!(range.get((2, 4)), Some(&Data::Float(0.0)));
    }
}
