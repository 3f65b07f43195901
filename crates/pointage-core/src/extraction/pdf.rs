use std::path::Path;

use ::pdfplumber::{Pdf, TableSettings};

use crate::error::PointageError;
use crate::extraction::{read_document, PageTables, RawTable, TableExtractor};

/// Table extraction backend built on pdfplumber's table finder.
///
/// Every page is loaded on its own, so a page that fails to interpret only
/// loses its own tables.
pub struct PdfExtractor {
    settings: TableSettings,
}

impl PdfExtractor {
    pub fn new() -> Self {
        Self::with_settings(TableSettings::default())
    }

    pub fn with_settings(settings: TableSettings) -> Self {
        PdfExtractor { settings }
    }

    /// Extract tables from in-memory PDF bytes.
    pub fn extract_from_bytes(&self, pdf_bytes: &[u8]) -> Result<Vec<PageTables>, PointageError> {
        let pdf = Pdf::open(pdf_bytes, None)
            .map_err(|e| PointageError::Extraction(format!("failed to open pdf: {e}")))?;

        let pages = (0..pdf.page_count())
            .map(|index| {
                let page_number = index + 1;
                match pdf.page(index) {
                    Ok(page) => {
                        let grids = page.extract_tables(&self.settings);
                        PageTables::ok(page_number, grids_to_tables(grids))
                    }
                    Err(e) => PageTables::failed(
                        page_number,
                        PointageError::PageExtraction {
                            page: page_number,
                            reason: e.to_string(),
                        },
                    ),
                }
            })
            .collect();

        Ok(pages)
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for PdfExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<PageTables>, PointageError> {
        let pdf_bytes = read_document(path)?;
        self.extract_from_bytes(&pdf_bytes)
            .map_err(|e| PointageError::DocumentOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn backend_name(&self) -> &str {
        "pdfplumber"
    }
}

/// Blank cells become absent and tables without rows are dropped.
fn grids_to_tables(grids: Vec<Vec<Vec<Option<String>>>>) -> Vec<RawTable> {
    grids
        .into_iter()
        .filter(|grid| !grid.is_empty())
        .map(|grid| {
            let rows = grid
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| cell.filter(|text| !text.trim().is_empty()))
                        .collect()
                })
                .collect();
            RawTable::new(rows)
        })
        .collect()
}
