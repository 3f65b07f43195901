use pointage_core::model::{ExtractedRow, OUTPUT_COLUMNS};

/// Render rows as an aligned plain-text table.
pub fn format_rows(rows: &[ExtractedRow]) -> String {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.company.clone(),
                r.label.clone(),
                r.value.clone().unwrap_or_default(),
                r.time_text.clone().unwrap_or_default(),
                r.decimal_hours.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = OUTPUT_COLUMNS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = OUTPUT_COLUMNS.to_vec();
    out.push_str(&format_line(&header, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );

    for row in &cells {
        out.push('\n');
        let refs: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&format_line(&refs, &widths));
    }

    out
}

fn format_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
