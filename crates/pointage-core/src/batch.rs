use std::path::PathBuf;

use tracing::{info, warn};

use crate::document::process_document;
use crate::error::PointageError;
use crate::extraction::TableExtractor;
use crate::layout::schema::ColumnLayout;
use crate::model::{BatchResult, ExtractedRow};

/// Process every document in order and merge the results.
///
/// A document that fails to open is recorded in `errors` and the batch moves
/// on. Rows keep the order of `paths`, then the order inside each document,
/// whether or not the `parallel` feature is enabled.
pub fn run_batch(
    paths: &[PathBuf],
    extractor: &dyn TableExtractor,
    layout: &ColumnLayout,
) -> BatchResult {
    let outcomes = process_all(paths, extractor, layout);

    let mut result = BatchResult {
        documents_processed: paths.len(),
        ..Default::default()
    };

    for (path, outcome) in paths.iter().zip(outcomes) {
        match outcome {
            Ok(rows) => result.rows.extend(rows),
            Err(e) => {
                warn!(document = %path.display(), error = %e, "document failed");
                result.record_error(path, e.to_string());
            }
        }
    }

    info!(
        documents = result.documents_processed,
        rows = result.rows.len(),
        errors = result.errors.len(),
        "batch finished"
    );

    result
}

#[cfg(not(feature = "parallel"))]
fn process_all(
    paths: &[PathBuf],
    extractor: &dyn TableExtractor,
    layout: &ColumnLayout,
) -> Vec<Result<Vec<ExtractedRow>, PointageError>> {
    paths
        .iter()
        .map(|path| process_document(path, extractor, layout))
        .collect()
}

/// Results are collected by index, so completion order does not matter.
#[cfg(feature = "parallel")]
fn process_all(
    paths: &[PathBuf],
    extractor: &dyn TableExtractor,
    layout: &ColumnLayout,
) -> Vec<Result<Vec<ExtractedRow>, PointageError>> {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|path| process_document(path, extractor, layout))
        .collect()
}
