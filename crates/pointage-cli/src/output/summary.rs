use pointage_core::model::BatchResult;
use std::path::Path;

/// Errors listed after a successful run.
const SUCCESS_ERROR_PREVIEW: usize = 5;
/// Errors listed when nothing was extracted.
const FAILURE_ERROR_PREVIEW: usize = 10;

pub fn format_success(result: &BatchResult, output: &Path) -> String {
    let mut lines = vec![
        "Extraction complete".to_string(),
        format!("Output file: {}", output.display()),
        format!("Documents processed: {}", result.documents_processed),
        format!("Rows extracted: {}", result.rows.len()),
    ];

    if !result.errors.is_empty() {
        lines.push(format!("Documents with errors: {}", result.errors.len()));
        lines.push("Error preview:".to_string());
        lines.extend(
            result
                .error_preview(SUCCESS_ERROR_PREVIEW)
                .iter()
                .map(|e| format!("  - {e}")),
        );
    }

    lines.join("\n")
}

pub fn format_nothing_extracted(result: &BatchResult, keyword: &str) -> String {
    let mut out = format!("No '{keyword}' rows found in the documents.");

    if !result.errors.is_empty() {
        out.push_str(&format!(
            "\n\nErrors in {} document(s):\n",
            result.errors.len()
        ));
        let preview: Vec<String> = result
            .error_preview(FAILURE_ERROR_PREVIEW)
            .iter()
            .map(|e| format!("  - {e}"))
            .collect();
        out.push_str(&preview.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointage_core::model::{DocumentError, ExtractedRow};
    use std::path::PathBuf;

    fn errors(n: usize) -> Vec<DocumentError> {
        (0..n)
            .map(|i| DocumentError {
                path: PathBuf::from(format!("/in/doc{i}.pdf")),
                message: "cannot open".into(),
            })
            .collect()
    }

    #[test]
    fn success_summary_caps_error_preview() {
        let result = BatchResult {
            rows: vec![ExtractedRow {
                company: "A".into(),
                label: "Total".into(),
                value: None,
                time_text: None,
                decimal_hours: Default::default(),
            }],
            errors: errors(7),
            documents_processed: 8,
        };
        let text = format_success(&result, Path::new("out.csv"));
        assert!(text.contains("Documents processed: 8"));
        assert!(text.contains("Rows extracted: 1"));
        assert!(text.contains("Documents with errors: 7"));
        assert_eq!(text.matches("  - ").count(), 5);
        assert!(text.contains("doc0.pdf : cannot open"));
    }

    #[test]
    fn success_summary_without_errors_has_no_preview() {
        let result = BatchResult {
            documents_processed: 1,
            ..Default::default()
        };
        assert!(!format_success(&result, Path::new("out.csv")).contains("Error preview"));
    }

    #[test]
    fn nothing_extracted_lists_up_to_ten_errors() {
        let result = BatchResult {
            rows: vec![],
            errors: errors(12),
            documents_processed: 12,
        };
        let text = format_nothing_extracted(&result, "Total");
        assert!(text.starts_with("No 'Total' rows found"));
        assert!(text.contains("Errors in 12 document(s)"));
        assert_eq!(text.matches("  - ").count(), 10);
    }
}
