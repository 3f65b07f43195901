use std::path::Path;

use tracing::{debug, warn};

use crate::error::PointageError;
use crate::extraction::TableExtractor;
use crate::layout::schema::ColumnLayout;
use crate::model::ExtractedRow;
use crate::parsing::{filter_totals, normalize, NormalizedTable};

/// Company identifier: the file name without its extension, trimmed.
pub fn company_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().trim().to_string())
        .unwrap_or_default()
}

/// Extract the total rows of one document.
///
/// Only a failure to open the document is returned as an error. Pages whose
/// tables cannot be read contribute nothing, and a document without any
/// matching row yields an empty list.
pub fn process_document(
    path: &Path,
    extractor: &dyn TableExtractor,
    layout: &ColumnLayout,
) -> Result<Vec<ExtractedRow>, PointageError> {
    let company = company_name(path);
    let pages = extractor.extract_tables(path)?;

    let mut tables: Vec<NormalizedTable> = Vec::new();
    for page in pages {
        match page.tables {
            Ok(raw_tables) => {
                debug!(
                    document = %path.display(),
                    page = page.page_number,
                    tables = raw_tables.len(),
                    "page extracted"
                );
                tables.extend(
                    raw_tables
                        .iter()
                        .filter_map(|raw| normalize(raw, layout.min_columns)),
                );
            }
            Err(e) => {
                warn!(
                    document = %path.display(),
                    page = page.page_number,
                    error = %e,
                    "skipping page"
                );
            }
        }
    }

    let rows: Vec<ExtractedRow> = filter_totals(&tables, layout)
        .into_iter()
        .map(|row| ExtractedRow {
            company: company.clone(),
            label: row.label,
            value: row.value,
            time_text: row.time_text,
            decimal_hours: row.decimal_hours,
        })
        .collect();

    debug!(
        document = %path.display(),
        backend = extractor.backend_name(),
        tables = tables.len(),
        rows = rows.len(),
        "document processed"
    );

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_strips_extension() {
        assert_eq!(company_name(Path::new("/data/ACME.pdf")), "ACME");
        assert_eq!(company_name(Path::new("Dupont & Fils .pdf")), "Dupont & Fils");
        assert_eq!(company_name(Path::new("rapport.2024.pdf")), "rapport.2024");
        assert_eq!(company_name(Path::new("sans_extension")), "sans_extension");
    }
}
