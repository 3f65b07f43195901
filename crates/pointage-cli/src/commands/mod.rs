pub mod extract;
pub mod layouts;
pub mod parse;

use pointage_core::error::PointageError;
use pointage_core::layout::builtin;
use pointage_core::layout::schema::ColumnLayout;
use std::path::PathBuf;

/// A custom layout file wins over a preset; neither means the default layout.
pub fn resolve_layout(
    layout_file: Option<PathBuf>,
    preset: Option<String>,
) -> Result<ColumnLayout, PointageError> {
    match (layout_file, preset) {
        (Some(path), _) => pointage_core::layout::load_layout(&path),
        (None, Some(name)) => builtin::load_preset(&name),
        (None, None) => builtin::load_preset("default"),
    }
}
