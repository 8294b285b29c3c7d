//! Effective configuration for a check run.
//!
//! Settings come from CLI arguments only. The kernel release is resolved
//! once here and handed to the check explicitly.

use crate::cli::Args;
use herakles_check_mem::{KernelVersion, Result, Thresholds};
use std::path::PathBuf;
use tracing::{info, warn};

/// Resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: Thresholds,
    pub proc_root: PathBuf,
    /// Overrides the release reported by uname(2).
    pub kernel_release: Option<String>,
}

/// Builds the effective configuration from CLI arguments.
pub fn resolve_config(args: &Args) -> Config {
    Config {
        thresholds: Thresholds::new(args.warn, args.crit),
        proc_root: args.proc_root.clone(),
        kernel_release: args.kernel_release.clone(),
    }
}

/// Checks the effective configuration.
///
/// Thresholds are never rejected; inverted ones are still applied literally
/// but logged.
pub fn validate_effective_config(config: &Config) {
    if config.thresholds.is_degenerate() {
        warn!(
            "Critical threshold {}% is not below warning threshold {}%; WARNING can never be reported",
            config.thresholds.crit, config.thresholds.warn
        );
    }
}

impl Config {
    /// Kernel version marker from the override or the running kernel.
    pub fn kernel_version(&self) -> Result<KernelVersion> {
        match &self.kernel_release {
            Some(release) => {
                info!("Using kernel release override: {}", release);
                Ok(KernelVersion::from_release(release))
            }
            None => KernelVersion::detect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_resolve_config() {
        let args = Args::parse_from([
            "herakles-check-mem",
            "-w",
            "50",
            "-c",
            "20",
            "--proc-root",
            "/host/proc",
            "--kernel-release",
            "3.10.0-1160.el7.x86_64",
        ]);
        let config = resolve_config(&args);
        assert_eq!(config.thresholds, Thresholds::new(50, 20));
        assert_eq!(config.proc_root, PathBuf::from("/host/proc"));
        assert_eq!(config.kernel_version().unwrap().as_str(), "3.10.0");
    }

    #[test]
    fn test_kernel_version_detected_without_override() {
        let config = resolve_config(&Args::parse_from(["herakles-check-mem"]));
        assert!(config.kernel_version().is_ok());
    }
}
