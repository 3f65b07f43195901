use pointage_core::error::PointageError;
use pointage_core::layout::builtin;
use pointage_core::layout::schema::ColumnLayout;
use std::path::Path;
use std::process::ExitCode;

pub fn list() -> Result<ExitCode, PointageError> {
    println!("Available predefined layouts:\n");
    for name in builtin::PRESETS {
        let layout = builtin::load_preset(name)?;
        println!(
            "  {:<10} label=Col{} value=Col{} time=Col{}",
            name, layout.label_column, layout.value_column, layout.time_column
        );
        if let Some(ref desc) = layout.description {
            println!("             {}", desc);
        }
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

pub fn explain(preset: &str) -> Result<ExitCode, PointageError> {
    let layout = builtin::load_preset(preset)?;
    print_explanation(&layout);
    Ok(ExitCode::SUCCESS)
}

fn print_explanation(layout: &ColumnLayout) {
    println!("{}\n", layout.name);

    if let Some(ref desc) = layout.description {
        println!("{}\n", desc);
    }

    println!(
        "Every table is padded to at least {} columns (Col1..Col{}).",
        layout.min_columns, layout.min_columns
    );
    println!(
        "A row is kept when Col{} contains \"{}\" (case-insensitive).\n",
        layout.label_column, layout.keyword
    );
    println!("Output columns:");
    println!("  Societe           document file name without extension");
    println!("  Libellé           Col{}", layout.label_column);
    println!("  Valeur            Col{}", layout.value_column);
    println!(
        "  Temps_hhmm        Col{}, trimmed, 'h' replaced by ':'",
        layout.time_column
    );
    println!("  Heures_decimales  Temps_hhmm as decimal hours (0 when unreadable)");
    println!();
}

pub fn validate(file: &Path) -> Result<ExitCode, PointageError> {
    let layout = pointage_core::layout::load_layout(file)?;

    println!("Layout '{}' is valid.", layout.name);
    println!(
        "  Columns: label=Col{} value=Col{} time=Col{}",
        layout.label_column, layout.value_column, layout.time_column
    );

    // Warnings, not errors
    let widest = layout
        .label_column
        .max(layout.value_column)
        .max(layout.time_column);
    if widest > layout.min_columns {
        println!("\nWarnings:");
        println!(
            "  - Col{} lies beyond min_columns ({}); narrower tables will yield empty cells there",
            widest, layout.min_columns
        );
    }

    Ok(ExitCode::SUCCESS)
}
