//! Errors raised by schedule calculations.

use thiserror::Error;

/// Errors from week and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// End date lies before the start date
    #[error("end day {end} is before start day {start}")]
    Chronology {
        /// Start epoch day
        start: i64,
        /// End epoch day
        end: i64,
    },

    /// Epoch day outside the supported calendar
    #[error("epoch day {0} is out of range")]
    OutOfRange(i64),
}
