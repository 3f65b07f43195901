use pointage_core::error::PointageError;
use pointage_core::extraction::auto::AutoExtractor;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::resolve_layout;
use crate::output;

pub fn run(
    input_file: PathBuf,
    layout_file: Option<PathBuf>,
    preset: Option<String>,
    format: &str,
) -> Result<ExitCode, PointageError> {
    let layout = resolve_layout(layout_file, preset)?;
    let extractor = AutoExtractor::new();
    let rows = pointage_core::process_document(&input_file, &extractor, &layout)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&rows)?),
        _ => println!("{}", output::table::format_rows(&rows)),
    }

    if rows.is_empty() {
        eprintln!(
            "No '{}' rows found in {}",
            layout.keyword,
            input_file.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}
