//! Threshold classification of the free memory percentage.

use tracing::debug;

use crate::estimator::Availability;
use crate::status::{CheckOutcome, Severity};

pub const DEFAULT_WARN_PERCENT: i64 = 60;
pub const DEFAULT_CRIT_PERCENT: i64 = 30;

/// Message used when no rule matches the free percentage.
pub const UNKNOWN_FREE_MEMORY: &str = "Unknown free memory";

/// Warning and critical thresholds on the free memory percentage.
///
/// No ordering between the two is enforced. With `crit >= warn` the rules
/// still apply literally: CRITICAL wins up to `crit`, OK above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warn: i64,
    pub crit: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn: DEFAULT_WARN_PERCENT,
            crit: DEFAULT_CRIT_PERCENT,
        }
    }
}

impl Thresholds {
    pub fn new(warn: i64, crit: i64) -> Self {
        Self { warn, crit }
    }

    /// True when the thresholds are not ordered `crit < warn`.
    pub fn is_degenerate(&self) -> bool {
        self.crit >= self.warn
    }

    /// Maps a free percentage to a severity. First matching rule wins.
    ///
    /// The final UNKNOWN arm cannot be reached with integer percentages; it
    /// is kept so every input maps to a status.
    pub fn severity(&self, free_percent: i64) -> Severity {
        if free_percent <= self.crit {
            Severity::Critical
        } else if free_percent < self.warn && free_percent > self.crit {
            Severity::Warning
        } else if free_percent >= self.warn {
            Severity::Ok
        } else {
            Severity::Unknown
        }
    }
}

/// Classifies an availability estimate and builds the status message.
pub fn classify(availability: &Availability, thresholds: &Thresholds) -> CheckOutcome {
    let severity = thresholds.severity(availability.free_percent);
    debug!(
        free_percent = availability.free_percent,
        warn = thresholds.warn,
        crit = thresholds.crit,
        %severity,
        "Classified free memory"
    );

    match severity {
        Severity::Unknown => CheckOutcome::unknown(UNKNOWN_FREE_MEMORY),
        _ => CheckOutcome::new(severity, format_free_memory(availability)),
    }
}

/// `<percent>% Free (<free>M/<total>M)`
pub fn format_free_memory(availability: &Availability) -> String {
    format!(
        "{}% Free ({}M/{}M)",
        availability.free_percent,
        availability.free_mb(),
        availability.total_mb()
    )
}
