mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pointage",
    version,
    about = "Extract per-company total rows and decimal hours from timesheet PDFs"
)]
struct Cli {
    /// Log per-document and per-page details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract total rows from every document in a directory into one sheet
    Extract {
        /// Directory containing the documents (PDF or XLSX)
        root: PathBuf,

        /// Output file (.xlsx, .csv or .json)
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Also search subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Output format: xlsx, csv or json (default: inferred from the output extension)
        #[arg(short, long)]
        format: Option<String>,

        /// Custom JSON column layout file
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        layout: Option<PathBuf>,

        /// Predefined layout: default, compact
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,
    },
    /// Show the total rows of a single document
    Parse {
        /// Path to a PDF or XLSX document
        input_file: PathBuf,

        /// Custom JSON column layout file
        #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
        layout: Option<PathBuf>,

        /// Predefined layout: default, compact
        #[arg(short, long, value_name = "NAME")]
        preset: Option<String>,

        /// Display format: table (default) or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
    /// Manage and inspect column layouts
    Layouts {
        #[command(subcommand)]
        action: LayoutsAction,
    },
}

#[derive(Subcommand)]
enum LayoutsAction {
    /// List predefined layouts
    List,
    /// Explain a layout in plain language
    Explain {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Validate a custom layout file
    Validate {
        /// Path to JSON layout file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pointage=debug" } else { "pointage=warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            root,
            output,
            recursive,
            format,
            layout,
            preset,
        } => commands::extract::run(root, output, recursive, format, layout, preset),
        Commands::Parse {
            input_file,
            layout,
            preset,
            format,
        } => commands::parse::run(input_file, layout, preset, &format),
        Commands::Layouts { action } => match action {
            LayoutsAction::List => commands::layouts::list(),
            LayoutsAction::Explain { preset } => commands::layouts::explain(&preset),
            LayoutsAction::Validate { file } => commands::layouts::validate(&file),
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
