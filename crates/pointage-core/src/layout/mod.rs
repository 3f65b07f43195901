pub mod builtin;
pub mod schema;

use crate::error::PointageError;
use schema::ColumnLayout;
use std::path::Path;

/// Load a column layout from a JSON file.
pub fn load_layout(path: &Path) -> Result<ColumnLayout, PointageError> {
    let content = std::fs::read_to_string(path).map_err(|e| PointageError::LayoutLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_layout(&content, path)
}

/// Parse a column layout from a JSON string.
pub fn parse_layout(json: &str, source: &Path) -> Result<ColumnLayout, PointageError> {
    let layout: ColumnLayout =
        serde_json::from_str(json).map_err(|e| PointageError::LayoutLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Parse a column layout from a JSON string (no file path context).
pub fn parse_layout_str(json: &str) -> Result<ColumnLayout, PointageError> {
    let layout: ColumnLayout = serde_json::from_str(json).map_err(PointageError::Json)?;
    validate_layout(&layout)?;
    Ok(layout)
}

/// Validate that a layout is well-formed.
pub fn validate_layout(layout: &ColumnLayout) -> Result<(), PointageError> {
    if layout.name.trim().is_empty() {
        return Err(PointageError::LayoutInvalid(
            "layout name must not be empty".into(),
        ));
    }

    for (field, column) in [
        ("label_column", layout.label_column),
        ("value_column", layout.value_column),
        ("time_column", layout.time_column),
    ] {
        if column == 0 {
            return Err(PointageError::LayoutInvalid(format!(
                "{} must be at least 1 (columns are numbered from Col1)",
                field
            )));
        }
    }

    if layout.min_columns == 0 {
        return Err(PointageError::LayoutInvalid(
            "min_columns must be at least 1".into(),
        ));
    }

    if layout.keyword.trim().is_empty() {
        return Err(PointageError::LayoutInvalid(
            "keyword must not be empty".into(),
        ));
    }

    Ok(())
}
