//! Monitoring plugin status levels and the printed status line.
//!
//! Exit codes follow the Nagios plugin convention and are the contract with
//! the calling harness: OK=0, WARNING=1, CRITICAL=2, UNKNOWN=3.

use std::fmt;
use std::process::ExitCode;

/// Severity of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    pub fn exit_code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Severity> for ExitCode {
    fn from(severity: Severity) -> Self {
        ExitCode::from(severity.exit_code())
    }
}

/// Final result of a check: severity plus the human readable message.
///
/// `Display` renders the single status line, `<LEVEL> - <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub severity: Severity,
    pub message: String,
}

impl CheckOutcome {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity, self.message)
    }
}
