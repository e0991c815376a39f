//! Algoviz - terminal visualizer for sorting and grid pathfinding
//!
//! Runs the classic sorts and graph traversals step by step, animating each
//! intermediate state and reporting per-run statistics.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use algoviz_core::error::{ExitCode as VizExitCode, VizError};
use algoviz_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(VizExitCode::Success as u8),
        Err(e) => report(&cli, &e),
    }
}

/// Print a command error in the requested format and pick the exit code.
fn report(cli: &Cli, err: &VizError) -> ExitCode {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Argument errors keep clap's own output unless JSON was asked for on argv.
fn parse_failure(err: clap::Error) -> ExitCode {
    let informational = matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
    if informational || !argv_requests_json() {
        err.exit();
    }

    let viz_error = match err.kind() {
        ErrorKind::MissingSubcommand
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::Io
        | ErrorKind::Format => VizError::Other(err.to_string()),
        _ => VizError::UsageError(err.to_string()),
    };
    eprintln!("{}", viz_error.to_json());
    ExitCode::from(viz_error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
