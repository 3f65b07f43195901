use crate::error::PointageError;
use crate::extraction::pdf::PdfExtractor;
use crate::extraction::xlsx::XlsxExtractor;
use crate::extraction::{PageTables, TableExtractor};
use std::path::Path;

/// Picks a backend from the document's file extension.
pub struct AutoExtractor {
    backends: Vec<Box<dyn TableExtractor>>,
    extensions: Vec<&'static str>,
}

impl AutoExtractor {
    pub fn new() -> Self {
        AutoExtractor {
            backends: vec![
                Box::new(PdfExtractor::new()),
                Box::new(XlsxExtractor::new()),
            ],
            extensions: vec!["pdf", "xlsx"],
        }
    }

    fn backend_for(&self, path: &Path) -> Option<&dyn TableExtractor> {
        for backend in &self.backends {
            if backend.supports(path) {
                return Some(&**backend);
            }
        }
        None
    }
}

impl Default for AutoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TableExtractor for AutoExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<PageTables>, PointageError> {
        match self.backend_for(path) {
            Some(backend) => backend.extract_tables(path),
            None => Err(PointageError::UnsupportedDocument(path.to_path_buf())),
        }
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn backend_name(&self) -> &str {
        "auto"
    }
}
