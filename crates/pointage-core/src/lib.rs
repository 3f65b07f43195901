pub mod batch;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod export;
pub mod extraction;
pub mod layout;
pub mod model;
pub mod parsing;

use batch::run_batch;
use config::BatchConfig;
use discovery::discover_documents;
use error::PointageError;
use export::write_rows;
use extraction::TableExtractor;
use model::{BatchOutcome, BatchResult};

pub use document::{company_name, process_document};
pub use parsing::to_decimal_hours;

/// Outcome of a full run: what was found and what was written.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub result: BatchResult,
    /// Set when rows were written to the configured output.
    pub written: bool,
}

/// Main API entry point: extract totals from every document under
/// `config.root` and write them to `config.output`.
///
/// Nothing is written when no row was extracted; the caller can tell this
/// case apart through `BatchResult::outcome()`.
pub fn run(config: &BatchConfig, extractor: &dyn TableExtractor) -> Result<RunReport, PointageError> {
    let paths = discover_documents(&config.root, config.recursive, extractor.extensions())?;
    tracing::info!(
        root = %config.root.display(),
        recursive = config.recursive,
        documents = paths.len(),
        "documents found"
    );

    let result = run_batch(&paths, extractor, &config.layout);

    let written = match result.outcome() {
        BatchOutcome::Extracted => {
            write_rows(&config.output, &result.rows, config.format)?;
            tracing::info!(
                output = %config.output.display(),
                format = %config.format,
                rows = result.rows.len(),
                "output written"
            );
            true
        }
        BatchOutcome::NothingExtracted => false,
    };

    Ok(RunReport { result, written })
}
