use std::path::PathBuf;

use crate::export::OutputFormat;
use crate::layout::schema::ColumnLayout;

/// Everything a batch run needs, passed in explicitly by the caller.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory holding the documents.
    pub root: PathBuf,
    /// Also walk subdirectories of `root`.
    pub recursive: bool,
    /// Destination of the combined sheet.
    pub output: PathBuf,
    pub format: OutputFormat,
    pub layout: ColumnLayout,
}

impl BatchConfig {
    /// Config with the default layout and a format inferred from `output`.
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let output = output.into();
        BatchConfig {
            root: root.into(),
            recursive: false,
            format: OutputFormat::from_path(&output),
            output,
            layout: ColumnLayout::standard(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
