use crate::error::PointageError;
use crate::layout::parse_layout_str;
use crate::layout::schema::ColumnLayout;

const DEFAULT_JSON: &str = include_str!("../../../../layouts/default.json");
const COMPACT_JSON: &str = include_str!("../../../../layouts/compact.json");

/// Available predefined layouts.
pub const PRESETS: &[&str] = &["default", "compact"];

/// Load a predefined layout by name.
pub fn load_preset(name: &str) -> Result<ColumnLayout, PointageError> {
    match name {
        "default" => parse_layout_str(DEFAULT_JSON),
        "compact" => parse_layout_str(COMPACT_JSON),
        _ => Err(PointageError::LayoutInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
