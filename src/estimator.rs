//! Available memory estimation.
//!
//! Kernels >= 3.14 report `MemAvailable` directly. Older kernels get the
//! same approximation the kernel itself uses: free memory plus reclaimable
//! slab and file pages, minus the zone low watermark reservation.

use tracing::debug;

use crate::error::{CheckError, Result};
use crate::kernel::KernelVersion;
use crate::meminfo::MemInfo;

/// Which formula produced the free memory figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// Kernel-provided `MemAvailable`.
    MemAvailable,
    /// free + reclaimable slab + active/inactive file - low watermarks.
    Legacy,
}

/// Result of the estimation, all sizes in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub free_kb: i64,
    pub total_kb: i64,
    /// `floor(100 * free_kb / total_kb)`, not clamped to 0..=100.
    pub free_percent: i64,
    pub formula: Formula,
}

impl Availability {
    pub fn free_mb(&self) -> i64 {
        floor_div(self.free_kb, 1024)
    }

    pub fn total_mb(&self) -> i64 {
        floor_div(self.total_kb, 1024)
    }
}

/// Estimates free memory and the free percentage.
///
/// `zone_low_kb` is the low watermark reservation in kilobytes, see
/// [`ZoneWatermarks::total_kb`](crate::zoneinfo::ZoneWatermarks::total_kb).
/// It only affects kernels without `MemAvailable`.
pub fn estimate(
    meminfo: &MemInfo,
    zone_low_kb: i64,
    kernel: &KernelVersion,
) -> Result<Availability> {
    let total_kb = meminfo.total()?;

    let (free_kb, formula) = if kernel.has_mem_available() {
        (meminfo.available()?, Formula::MemAvailable)
    } else {
        (legacy_free_kb(meminfo, zone_low_kb)?, Formula::Legacy)
    };

    if total_kb == 0 {
        return Err(CheckError::ZeroTotal);
    }

    let free_percent = floor_div(
        free_kb.checked_mul(100).ok_or(CheckError::Overflow)?,
        total_kb,
    );

    debug!(
        kernel = %kernel,
        ?formula,
        free_kb,
        total_kb,
        free_percent,
        "Estimated available memory"
    );

    Ok(Availability {
        free_kb,
        total_kb,
        free_percent,
        formula,
    })
}

fn legacy_free_kb(meminfo: &MemInfo, zone_low_kb: i64) -> Result<i64> {
    [
        meminfo.sreclaimable()?,
        meminfo.active_file()?,
        meminfo.inactive_file()?,
    ]
    .into_iter()
    .try_fold(meminfo.free()?, i64::checked_add)
    .and_then(|sum| sum.checked_sub(zone_low_kb))
    .ok_or(CheckError::Overflow)
}

/// Integer division rounding toward negative infinity.
pub(crate) fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}
