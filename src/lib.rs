//! Herakles Memory Check Library
//!
//! Classifies host memory pressure for monitoring harnesses that speak the
//! Nagios plugin protocol. Free memory comes from `/proc/meminfo`: the
//! kernel's own `MemAvailable` on kernels >= 3.14, otherwise an estimate from
//! free, reclaimable slab and file pages minus the zone low watermarks read
//! from `/proc/zoneinfo`.
//!
//! # Usage
//!
//! ```rust
//! use herakles_check_mem::{classify, estimate, KernelVersion, MemInfo, Severity, Thresholds};
//!
//! let meminfo = MemInfo::parse("MemTotal: 8192000 kB\nMemAvailable: 2048000 kB\n")?;
//! let kernel = KernelVersion::from_release("5.4.0-42-generic");
//!
//! let availability = estimate(&meminfo, 0, &kernel)?;
//! let outcome = classify(&availability, &Thresholds::default());
//!
//! assert_eq!(outcome.severity, Severity::Critical);
//! assert_eq!(outcome.to_string(), "CRITICAL - 25% Free (2000M/8000M)");
//! # Ok::<(), herakles_check_mem::CheckError>(())
//! ```
//!
//! Against a live system use [`MemoryCheck`], which reads both files and turns
//! every failure into an UNKNOWN outcome.

pub mod check;
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod kernel;
pub mod meminfo;
pub mod status;
pub mod zoneinfo;

// Re-export main types for convenience
pub use check::{MemoryCheck, DEFAULT_PROC_ROOT};
pub use classifier::{classify, Thresholds, DEFAULT_CRIT_PERCENT, DEFAULT_WARN_PERCENT};
pub use error::{CheckError, Result};
pub use estimator::{estimate, Availability, Formula};
pub use kernel::KernelVersion;
pub use meminfo::MemInfo;
pub use status::{CheckOutcome, Severity};
pub use zoneinfo::ZoneWatermarks;
