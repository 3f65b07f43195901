use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::PointageError;
use crate::extraction::{read_document, PageTables, RawTable, TableExtractor};

/// Reads spreadsheet exports: every worksheet is a page holding one table.
pub struct XlsxExtractor;

impl XlsxExtractor {
    pub fn new() -> Self {
        XlsxExtractor
    }

    /// Extract tables from in-memory xlsx bytes.
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<Vec<PageTables>, PointageError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| PointageError::Spreadsheet(format!("failed to open xlsx: {e}")))?;

        let pages = workbook
            .sheet_names()
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let page_number = i + 1;
                match workbook.worksheet_range(&name) {
                    Ok(range) => PageTables::ok(page_number, range_to_tables(&range)),
                    Err(e) => PageTables::failed(
                        page_number,
                        PointageError::PageExtraction {
                            page: page_number,
                            reason: format!("sheet '{name}': {e}"),
                        },
                    ),
                }
            })
            .collect();

        Ok(pages)
    }
}

impl Default for XlsxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for XlsxExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<PageTables>, PointageError> {
        let bytes = read_document(path)?;
        self.extract_from_bytes(&bytes)
            .map_err(|e| PointageError::DocumentOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn extensions(&self) -> &[&str] {
        &["xlsx"]
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

/// The used range starts at the first non-empty cell; rows are padded on the
/// left so that column 1 is always sheet column A.
fn range_to_tables(range: &Range<Data>) -> Vec<RawTable> {
    let leading = range.start().map_or(0, |(_, col)| col as usize);
    let rows: Vec<Vec<Option<String>>> = range
        .rows()
        .map(|row| {
            std::iter::repeat(None)
                .take(leading)
                .chain(row.iter().map(cell_as_string))
                .collect()
        })
        .collect();

    if rows.is_empty() {
        vec![]
    } else {
        vec![RawTable::new(rows)]
    }
}

fn cell_as_string(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::Empty => None,
        _ => Some(format!("{cell}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_as_string() {
        assert_eq!(cell_as_string(&Data::String("Total".into())), Some("Total".into()));
        assert_eq!(cell_as_string(&Data::String("   ".into())), None);
        assert_eq!(cell_as_string(&Data::Float(7.5)), Some("7.5".into()));
        assert_eq!(cell_as_string(&Data::Int(100)), Some("100".into()));
        assert_eq!(cell_as_string(&Data::Empty), None);
    }

    #[test]
    fn test_range_to_tables_keeps_gaps() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("Lundi".into()));
        range.set_value((0, 2), Data::String("7h00".into()));
        range.set_value((1, 0), Data::String("Total".into()));
        range.set_value((1, 1), Data::Int(4));
        range.set_value((1, 2), Data::String("7h00".into()));

        let tables = range_to_tables(&range);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[0][1], None);
        assert_eq!(tables[0].rows[1][1].as_deref(), Some("4"));
    }

    #[test]
    fn test_garbage_bytes_fail_to_open() {
        let result = XlsxExtractor::new().extract_from_bytes(b"not a zip archive");
        assert!(matches!(result, Err(PointageError::Spreadsheet(_))));
    }

    #[test]
    fn test_range_not_starting_at_column_a_is_padded() {
        // used range B2:D2, column A empty
        let mut range = Range::new((1, 1), (1, 3));
        range.set_value((1, 1), Data::String("Total".into()));
        range.set_value((1, 2), Data::Int(100));
        range.set_value((1, 3), Data::String("8h30".into()));

        let tables = range_to_tables(&range);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(
            tables[0].rows[0],
            vec![
                None,
                Some("Total".to_string()),
                Some("100".to_string()),
                Some("8h30".to_string()),
            ]
        );
    }
}
