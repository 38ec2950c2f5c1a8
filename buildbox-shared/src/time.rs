//! Countdown decomposition.
//!
//! The remaining lifetime of a builder is shown as whole days, hours,
//! minutes and seconds. The decomposition is exact: re-summing the parts
//! reconstructs the input duration.

use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// A duration decomposed into whole days, hours, minutes and seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    /// Recombine the parts into total seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} days, {} hours, {} minutes, {} seconds",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Decompose a duration in seconds into whole days, hours, minutes and
/// seconds.
pub fn decompose(total_seconds: u64) -> TimeParts {
    TimeParts {
        days: total_seconds / SECS_PER_DAY,
        hours: (total_seconds % SECS_PER_DAY) / SECS_PER_HOUR,
        minutes: (total_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE,
        seconds: total_seconds % SECS_PER_MINUTE,
    }
}
