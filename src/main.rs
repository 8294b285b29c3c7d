//! herakles-check-mem - version 0.1.0
//!
//! Monitoring plugin entry point. Prints exactly one status line to stdout
//! and exits with the plugin status code; diagnostics go to stderr.

mod cli;
mod config;

use clap::error::ErrorKind;
use clap::Parser;
use herakles_check_mem::{CheckOutcome, MemoryCheck};
use std::process::ExitCode;
use tracing::{debug, error, Level};

use cli::{Args, LogLevel};
use config::{resolve_config, validate_effective_config};

/// Initializes tracing logging subsystem with configured log level.
///
/// Logs are written to stderr so stdout carries only the status line.
fn setup_logging(args: &Args) {
    let log_level = match args.log_level {
        LogLevel::Off => return,
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    // A missing subscriber only costs diagnostics, the check still runs
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Failed to set tracing subscriber");
        return;
    }

    debug!("Logging initialized with level: {:?}", args.log_level);
}

/// First line of a clap error without the `error: ` prefix.
fn summarize_arg_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Prints the status line and converts the severity into the exit code.
fn report(outcome: &CheckOutcome) -> ExitCode {
    println!("{}", outcome);
    outcome.severity.into()
}

/// Main application entry point.
fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                return report(&CheckOutcome::unknown(format!(
                    "Unable to parse arguments: {}",
                    summarize_arg_error(&e)
                )))
            }
        },
    };

    setup_logging(&args);

    let config = resolve_config(&args);
    validate_effective_config(&config);

    let kernel = match config.kernel_version() {
        Ok(kernel) => kernel,
        Err(e) => {
            error!("{}", e);
            return report(&CheckOutcome::unknown(e.to_string()));
        }
    };

    let check = MemoryCheck::new(config.proc_root, kernel, config.thresholds);
    report(&check.run())
}
