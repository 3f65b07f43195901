use pointage_core::config::BatchConfig;
use pointage_core::error::PointageError;
use pointage_core::export::OutputFormat;
use pointage_core::extraction::auto::AutoExtractor;
use pointage_core::model::BatchOutcome;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::commands::resolve_layout;
use crate::output;

pub fn run(
    root: PathBuf,
    output_file: PathBuf,
    recursive: bool,
    format: Option<String>,
    layout_file: Option<PathBuf>,
    preset: Option<String>,
) -> Result<ExitCode, PointageError> {
    let layout = resolve_layout(layout_file, preset)?;

    let mut config = BatchConfig::new(root, output_file)
        .recursive(recursive)
        .with_layout(layout);
    if let Some(format) = format {
        config = config.with_format(format.parse::<OutputFormat>()?);
    }

    let extractor = AutoExtractor::new();
    let report = pointage_core::run(&config, &extractor)?;

    if report.result.documents_processed == 0 {
        eprintln!("No documents found in {}", config.root.display());
        return Ok(ExitCode::from(2));
    }

    match report.result.outcome() {
        BatchOutcome::Extracted => {
            println!("{}", output::summary::format_success(&report.result, &config.output));
            Ok(ExitCode::SUCCESS)
        }
        BatchOutcome::NothingExtracted => {
            eprintln!(
                "{}",
                output::summary::format_nothing_extracted(&report.result, &config.layout.keyword)
            );
            Ok(ExitCode::from(2))
        }
    }
}
