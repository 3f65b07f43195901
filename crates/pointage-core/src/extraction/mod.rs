pub mod auto;
pub mod pdf;
pub mod xlsx;

use crate::error::PointageError;
use std::path::Path;

/// One table as a grid of optional text cells. Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        RawTable { rows }
    }

    /// Build a table from plain strings; empty strings become absent cells.
    pub fn from_text_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let cell = cell.as_ref();
                        if cell.is_empty() {
                            None
                        } else {
                            Some(cell.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        RawTable { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row length.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Tables found on a single page.
///
/// Page-level failures are kept here instead of failing the whole document.
#[derive(Debug)]
pub struct PageTables {
    pub page_number: usize,
    pub tables: Result<Vec<RawTable>, PointageError>,
}

impl PageTables {
    pub fn ok(page_number: usize, tables: Vec<RawTable>) -> Self {
        PageTables {
            page_number,
            tables: Ok(tables),
        }
    }

    pub fn failed(page_number: usize, error: PointageError) -> Self {
        PageTables {
            page_number,
            tables: Err(error),
        }
    }
}

/// Trait for table extraction backends.
pub trait TableExtractor: Send + Sync {
    /// Open a document and return its tables, one `PageTables` per page.
    ///
    /// An `Err` means the document itself could not be opened or read.
    fn extract_tables(&self, path: &Path) -> Result<Vec<PageTables>, PointageError>;

    /// File extensions (lowercase, without dot) this backend reads.
    fn extensions(&self) -> &[&str];

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    fn supports(&self, path: &Path) -> bool {
        has_extension(path, self.extensions())
    }
}

/// Case-insensitive extension check.
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| {
            extensions
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

pub(crate) fn read_document(path: &Path) -> Result<Vec<u8>, PointageError> {
    std::fs::read(path).map_err(|e| PointageError::DocumentOpen {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_rows_marks_empty_cells_absent() {
        let table = RawTable::from_text_rows(&[vec!["Total", "", "8:00"], vec!["x"]]);
        assert_eq!(table.rows[0][1], None);
        assert_eq!(table.rows[0][2].as_deref(), Some("8:00"));
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn extension_check_ignores_case() {
        assert!(has_extension(Path::new("ACME.PDF"), &["pdf"]));
        assert!(has_extension(Path::new("dir/acme.pdf"), &["xlsx", "pdf"]));
        assert!(!has_extension(Path::new("acme.pdf.bak"), &["pdf"]));
        assert!(!has_extension(Path::new("README"), &["pdf"]));
    }
}
