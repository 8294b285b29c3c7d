//! Error types for the memory check pipeline.
//!
//! Every failure the pipeline can hit is represented here so the caller can
//! turn it into an UNKNOWN status instead of crashing.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Errors raised while reading sources or computing available memory.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Missing field '{0}' in meminfo")]
    MissingField(&'static str),

    #[error("Invalid value '{value}' for meminfo field '{field}': {source}")]
    InvalidValue {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Malformed watermark line {line} in zoneinfo: '{content}'")]
    MalformedWatermark { line: usize, content: String },

    #[error("Invalid watermark value '{value}' on zoneinfo line {line}: {source}")]
    InvalidWatermark {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Total memory is zero, cannot compute free percentage")]
    ZeroTotal,

    #[error("Arithmetic overflow while computing free memory")]
    Overflow,

    #[error("Failed to determine kernel release: {0}")]
    KernelRelease(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CheckError>;
