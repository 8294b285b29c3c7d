//! Parsing of the kernel memory accounting snapshot (`/proc/meminfo`).
//!
//! Only the fields needed for the available-memory estimate are kept.
//! Values are in kilobytes as reported by the kernel.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CheckError, Result};

pub const MEM_TOTAL: &str = "MemTotal";
pub const MEM_FREE: &str = "MemFree";
pub const MEM_AVAILABLE: &str = "MemAvailable";
pub const ACTIVE_FILE: &str = "Active(file)";
pub const INACTIVE_FILE: &str = "Inactive(file)";
pub const SRECLAIMABLE: &str = "SReclaimable";

/// Typed snapshot of the `/proc/meminfo` fields used by the estimator.
///
/// Each field stays `None` until the matching line is seen. Which fields are
/// actually required depends on the estimation formula, so presence is
/// validated by the accessors rather than by [`MemInfo::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemInfo {
    pub total_kb: Option<i64>,
    pub free_kb: Option<i64>,
    /// Only exported by kernels >= 3.14.
    pub available_kb: Option<i64>,
    pub active_file_kb: Option<i64>,
    pub inactive_file_kb: Option<i64>,
    pub sreclaimable_kb: Option<i64>,
}

impl MemInfo {
    /// Reads and parses a meminfo file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let info = Self::parse(&content)?;
        debug!(path = %path.display(), ?info, "Parsed meminfo");
        Ok(info)
    }

    /// Parses meminfo content.
    ///
    /// Line format: `<Name>:<whitespace><value>[ kB]`. The name is everything
    /// before the first colon and the value is the first token after it.
    /// Unknown fields and lines without a colon are skipped; a known field
    /// with a non-numeric value is an error.
    pub fn parse(content: &str) -> Result<Self> {
        let mut info = Self::default();

        for line in content.lines() {
            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };

            let (field, slot) = match key {
                MEM_TOTAL => (MEM_TOTAL, &mut info.total_kb),
                MEM_FREE => (MEM_FREE, &mut info.free_kb),
                MEM_AVAILABLE => (MEM_AVAILABLE, &mut info.available_kb),
                ACTIVE_FILE => (ACTIVE_FILE, &mut info.active_file_kb),
                INACTIVE_FILE => (INACTIVE_FILE, &mut info.inactive_file_kb),
                SRECLAIMABLE => (SRECLAIMABLE, &mut info.sreclaimable_kb),
                _ => continue,
            };

            *slot = Some(parse_kb_value(field, rest)?);
        }

        Ok(info)
    }

    pub fn total(&self) -> Result<i64> {
        require(MEM_TOTAL, self.total_kb)
    }

    pub fn free(&self) -> Result<i64> {
        require(MEM_FREE, self.free_kb)
    }

    pub fn available(&self) -> Result<i64> {
        require(MEM_AVAILABLE, self.available_kb)
    }

    pub fn active_file(&self) -> Result<i64> {
        require(ACTIVE_FILE, self.active_file_kb)
    }

    pub fn inactive_file(&self) -> Result<i64> {
        require(INACTIVE_FILE, self.inactive_file_kb)
    }

    pub fn sreclaimable(&self) -> Result<i64> {
        require(SRECLAIMABLE, self.sreclaimable_kb)
    }
}

fn require(field: &'static str, value: Option<i64>) -> Result<i64> {
    value.ok_or(CheckError::MissingField(field))
}

/// Parses the first whitespace-delimited token of a meminfo value.
fn parse_kb_value(field: &'static str, rest: &str) -> Result<i64> {
    let token = rest.split_whitespace().next().unwrap_or("");
    token
        .parse::<i64>()
        .map_err(|source| CheckError::InvalidValue {
            field,
            value: token.to_string(),
            source,
        })
}
