//! CLI arguments for herakles-check-mem.
//!
//! This module defines the command-line interface using the clap library.
//! Argument errors are not reported by clap itself: `main` turns them into an
//! UNKNOWN status line so the monitoring harness always gets exit code 3.

use clap::{Parser, ValueEnum};
use herakles_check_mem::{DEFAULT_CRIT_PERCENT, DEFAULT_PROC_ROOT, DEFAULT_WARN_PERCENT};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "herakles-check-mem",
    about = "Monitoring plugin checking available memory on Linux hosts",
    long_about = "Monitoring plugin checking available memory on Linux hosts.\n\n\
                  Uses MemAvailable from /proc/meminfo on kernels >= 3.14. Older kernels \
                  get an estimate from MemFree, SReclaimable and file pages minus the zone \
                  low watermarks in /proc/zoneinfo.\n\n\
                  Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.",
    author = "Michael Moll <exporter@herakles.now> - Herakles",
    version
)]
pub struct Args {
    /// Free memory percentage below which the check is WARNING
    #[arg(
        short = 'w',
        long = "warn",
        default_value_t = DEFAULT_WARN_PERCENT,
        allow_negative_numbers = true
    )]
    pub warn: i64,

    /// Free memory percentage at or below which the check is CRITICAL
    #[arg(
        short = 'c',
        long = "crit",
        default_value_t = DEFAULT_CRIT_PERCENT,
        allow_negative_numbers = true
    )]
    pub crit: i64,

    /// Diagnostic log level (logs go to stderr)
    #[arg(long, value_enum, default_value = "off")]
    pub log_level: LogLevel,

    /// procfs mount point to read meminfo and zoneinfo from
    #[arg(long, default_value = DEFAULT_PROC_ROOT, hide = true)]
    pub proc_root: PathBuf,

    /// Kernel release to use instead of uname(2)
    #[arg(long, hide = true)]
    pub kernel_release: Option<String>,
}
