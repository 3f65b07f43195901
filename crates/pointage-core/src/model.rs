use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Output column names, in sheet order.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    "Societe",
    "Libellé",
    "Valeur",
    "Temps_hhmm",
    "Heures_decimales",
];

/// One "Total" row extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRow {
    /// Company identifier, taken from the document file name.
    #[serde(rename = "Societe")]
    pub company: String,
    #[serde(rename = "Libellé")]
    pub label: String,
    #[serde(rename = "Valeur")]
    pub value: Option<String>,
    /// Time text after cleanup (`8h30` becomes `8:30`).
    #[serde(rename = "Temps_hhmm")]
    pub time_text: Option<String>,
    #[serde(rename = "Heures_decimales")]
    pub decimal_hours: Decimal,
}

/// A document that could not be processed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentError {
    pub path: PathBuf,
    pub message: String,
}

impl DocumentError {
    /// File name used in user-facing summaries, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.file_name(), self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Extracted,
    NothingExtracted,
}

/// Combined result of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Rows in document order, then in-document order.
    pub rows: Vec<ExtractedRow>,
    pub errors: Vec<DocumentError>,
    pub documents_processed: usize,
}

impl BatchResult {
    pub fn outcome(&self) -> BatchOutcome {
        if self.rows.is_empty() {
            BatchOutcome::NothingExtracted
        } else {
            BatchOutcome::Extracted
        }
    }

    /// The first `limit` errors, for capped previews.
    pub fn error_preview(&self, limit: usize) -> &[DocumentError] {
        &self.errors[..self.errors.len().min(limit)]
    }

    pub(crate) fn record_error(&mut self, path: &Path, message: String) {
        self.errors.push(DocumentError {
            path: path.to_path_buf(),
            message,
        });
    }
}
