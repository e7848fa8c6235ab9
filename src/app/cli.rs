//! CLI Adapter.

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::app::commands::trace;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "tac0de-cascade")]
#[command(about = "Generate a deep-mode reasoning trace from structured prompt JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a trace JSON from input JSON
    Trace {
        /// Path to input JSON
        input_json: PathBuf,
    },
}

/// Entry point for the CLI.
pub fn run() {
    logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Trace { input_json } => run_trace(&input_json),
    };

    if let Err(e) = result {
        warn!(kind = ?e.kind(), "trace failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_trace(input_json: &Path) -> Result<(), AppError> {
    let document = trace::execute(input_json)?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    trace::write_trace(&document, &mut handle)
}
