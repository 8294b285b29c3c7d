//! Low watermark summation from `/proc/zoneinfo`.
//!
//! Kernels without `MemAvailable` need the zone low watermarks to reserve
//! memory the kernel keeps back for reclaim.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CheckError, Result};

/// Kilobytes reserved per low watermark page: 3 pages of 4 kB.
pub const WATERMARK_KB_PER_PAGE: i64 = 12;

/// Sum of the "low" watermarks over all zones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneWatermarks {
    /// Sum of all low watermarks, in pages.
    pub low_pages: i64,
    /// Number of watermark lines seen.
    pub zones: usize,
}

impl ZoneWatermarks {
    /// Reads and parses a zoneinfo file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let watermarks = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            zones = watermarks.zones,
            low_pages = watermarks.low_pages,
            "Parsed zoneinfo"
        );
        Ok(watermarks)
    }

    /// Parses zoneinfo content.
    ///
    /// Any line containing `low` is a watermark line and must consist of
    /// exactly two whitespace-separated tokens, the second being the page
    /// count.
    pub fn parse(content: &str) -> Result<Self> {
        let mut watermarks = Self::default();

        for (idx, line) in content.lines().enumerate() {
            if !line.contains("low") {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let [_, value] = tokens.as_slice() else {
                return Err(CheckError::MalformedWatermark {
                    line: idx + 1,
                    content: line.trim().to_string(),
                });
            };

            let pages = value
                .parse::<i64>()
                .map_err(|source| CheckError::InvalidWatermark {
                    line: idx + 1,
                    value: value.to_string(),
                    source,
                })?;

            watermarks.low_pages = watermarks
                .low_pages
                .checked_add(pages)
                .ok_or(CheckError::Overflow)?;
            watermarks.zones += 1;
        }

        Ok(watermarks)
    }

    /// Total reservation in kilobytes.
    pub fn total_kb(&self) -> Result<i64> {
        self.low_pages
            .checked_mul(WATERMARK_KB_PER_PAGE)
            .ok_or(CheckError::Overflow)
    }
}
