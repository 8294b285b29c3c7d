//! The memory check pipeline: read sources, estimate, classify.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::classifier::{classify, Thresholds};
use crate::error::Result;
use crate::estimator::{estimate, Availability};
use crate::kernel::KernelVersion;
use crate::meminfo::MemInfo;
use crate::status::CheckOutcome;
use crate::zoneinfo::ZoneWatermarks;

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// A single memory check run against a procfs root.
///
/// Holds no state between runs; calling [`MemoryCheck::run`] twice on the
/// same inputs gives the same outcome.
#[derive(Debug, Clone)]
pub struct MemoryCheck {
    proc_root: PathBuf,
    kernel: KernelVersion,
    thresholds: Thresholds,
}

impl MemoryCheck {
    pub fn new(
        proc_root: impl Into<PathBuf>,
        kernel: KernelVersion,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            proc_root: proc_root.into(),
            kernel,
            thresholds,
        }
    }

    pub fn proc_root(&self) -> &Path {
        &self.proc_root
    }

    pub fn kernel(&self) -> &KernelVersion {
        &self.kernel
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn meminfo_path(&self) -> PathBuf {
        self.proc_root.join("meminfo")
    }

    pub fn zoneinfo_path(&self) -> PathBuf {
        self.proc_root.join("zoneinfo")
    }

    /// Reads both sources and estimates available memory.
    pub fn availability(&self) -> Result<Availability> {
        let meminfo = MemInfo::read(&self.meminfo_path())?;
        let watermarks = ZoneWatermarks::read(&self.zoneinfo_path())?;
        estimate(&meminfo, watermarks.total_kb()?, &self.kernel)
    }

    /// Runs the check. Any failure becomes an UNKNOWN outcome.
    pub fn run(&self) -> CheckOutcome {
        debug!(
            proc_root = %self.proc_root.display(),
            kernel = %self.kernel,
            "Running memory check"
        );

        match self.availability() {
            Ok(availability) => classify(&availability, &self.thresholds),
            Err(e) => {
                error!("Memory check failed: {}", e);
                CheckOutcome::unknown(e.to_string())
            }
        }
    }
}
