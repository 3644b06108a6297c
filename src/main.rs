//! Clusters: MALLET driver CLI
//!
//! Imports corpora, trains topic models, and numbers corpus lines by
//! delegating the modeling work to an external MALLET installation.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, Level};

use clusters::cli::{self, Cli, Commands};
use clusters::logging::{self, LoggingError};

fn try_main() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Commands::Convert { input, run } => {
            cli::run_convert(&input, &args.mallet, run).context("convert failed")?;
        }
        Commands::Train { input, params, run } => {
            cli::run_train(&input, &args.mallet, params.into(), run).context("train failed")?;
        }
        Commands::NumberLines { file } => {
            cli::run_number_lines(&file).context("number-lines failed")?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        report_failure(&err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log the error chain, or print it to stderr when `RUST_LOG` filters out
/// error events.
fn report_failure(err: &anyhow::Error) {
    if tracing::enabled!(Level::ERROR) {
        error!("command execution failed: {err:#}");
    } else {
        eprintln!("error: {err:#}");
    }
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
