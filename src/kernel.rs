//! Kernel release marker used to pick the estimation formula.

use std::fmt;

use nix::sys::utsname::uname;

use crate::error::{CheckError, Result};

/// First kernel release exporting `MemAvailable` in `/proc/meminfo`.
pub const MEM_AVAILABLE_SINCE: &str = "3.14";

/// Leading dotted version of the kernel release, e.g. `5.15.0` for
/// `5.15.0-91-generic`.
///
/// Comparison against [`MEM_AVAILABLE_SINCE`] is a plain string comparison,
/// so `3.9` sorts after `3.14`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelVersion(String);

impl KernelVersion {
    /// Builds the marker from a full release string.
    pub fn from_release(release: &str) -> Self {
        let prefix = release.split('-').next().unwrap_or(release);
        Self(prefix.to_string())
    }

    /// Reads the running kernel release via `uname(2)`.
    pub fn detect() -> Result<Self> {
        let uts = uname().map_err(|e| CheckError::KernelRelease(e.to_string()))?;
        Ok(Self::from_release(&uts.release().to_string_lossy()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the kernel exports its own available memory estimate.
    pub fn has_mem_available(&self) -> bool {
        self.0.as_str() >= MEM_AVAILABLE_SINCE
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_suffix_stripped() {
        let kv = KernelVersion::from_release("5.15.0-91-generic");
        assert_eq!(kv.as_str(), "5.15.0");
        assert_eq!(KernelVersion::from_release("6.1.0").as_str(), "6.1.0");
    }

    #[test]
    fn test_mem_available_selection() {
        assert!(KernelVersion::from_release("5.4").has_mem_available());
        assert!(KernelVersion::from_release("3.14").has_mem_available());
        assert!(KernelVersion::from_release("4.19.0-25-amd64").has_mem_available());
        assert!(!KernelVersion::from_release("2.6.32-754.el6.x86_64").has_mem_available());
        assert!(!KernelVersion::from_release("3.10.0-1160.el7.x86_64").has_mem_available());
    }

    #[test]
    fn test_string_ordering_quirk() {
        // String ordering, not numeric: "3.9" > "3.14"
        assert!(KernelVersion::from_release("3.9.11").has_mem_available());
    }

    #[test]
    fn test_detect_running_kernel() {
        let kv = KernelVersion::detect().unwrap();
        assert!(!kv.as_str().is_empty());
        assert!(!kv.as_str().contains('-'));
    }
}
