use serde::{Deserialize, Serialize};

use crate::parsing::table::DEFAULT_MIN_COLUMNS;

/// Where the interesting cells sit in a timesheet table.
///
/// Column numbers are 1-based, matching the `Col1..ColN` labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Column holding the row label (`Libellé`), matched against `keyword`.
    pub label_column: usize,
    /// Column copied to `Valeur`.
    pub value_column: usize,
    /// Column holding the `hh:mm` time.
    pub time_column: usize,
    /// Tables narrower than this are padded with absent cells.
    #[serde(default = "default_min_columns")]
    pub min_columns: usize,
    /// Case-insensitive substring selecting the rows to keep.
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

fn default_min_columns() -> usize {
    DEFAULT_MIN_COLUMNS
}

fn default_keyword() -> String {
    "Total".to_string()
}

impl ColumnLayout {
    /// Label in column 1, value in column 2, time in column 6.
    pub fn standard() -> Self {
        ColumnLayout {
            name: "default".into(),
            description: None,
            label_column: 1,
            value_column: 2,
            time_column: 6,
            min_columns: DEFAULT_MIN_COLUMNS,
            keyword: default_keyword(),
        }
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::standard()
    }
}
