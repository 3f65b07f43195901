use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PointageError {
    #[error("cannot open {path}: {reason}")]
    DocumentOpen { path: PathBuf, reason: String },

    #[error("unsupported document type: {0}")]
    UnsupportedDocument(PathBuf),

    #[error("table extraction failed: {0}")]
    Extraction(String),

    #[error("table extraction failed on page {page}: {reason}")]
    PageExtraction { page: usize, reason: String },

    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("failed to load layout from {path}: {reason}")]
    LayoutLoad { path: PathBuf, reason: String },

    #[error("invalid layout: {0}")]
    LayoutInvalid(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("cannot list documents under {path}: {reason}")]
    Discovery { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}
