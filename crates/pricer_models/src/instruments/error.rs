//! Error types for instrument validation.

use thiserror::Error;

/// Errors raised when constructing or projecting instruments.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidNotional { value: -100.0 };
/// assert!(format!("{}", err).contains("notional"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// A schedule with no dates.
    #[error("Schedule is empty")]
    EmptySchedule,

    /// Schedule dates not strictly increasing.
    #[error("Schedule dates must be strictly increasing at index {index}")]
    NonIncreasingSchedule {
        /// Index of the first offending date
        index: usize,
    },

    /// The first exercise date is not strictly positive.
    #[error("First exercise date must be strictly positive, got {time}")]
    FirstExerciseNotPositive {
        /// The offending exercise time in year fractions
        time: f64,
    },

    /// Exercise dates and underlying swaps differ in number.
    #[error("Expected one underlying per exercise date: {expiries} dates, {swaps} swaps")]
    LengthMismatch {
        /// Number of exercise dates
        expiries: usize,
        /// Number of underlying swaps
        swaps: usize,
    },

    /// Non-positive notional.
    #[error("Invalid notional: {value}")]
    InvalidNotional {
        /// The offending notional
        value: f64,
    },

    /// Fixed payment times and accrual fractions differ in number.
    #[error("Fixed schedule mismatch: {times} payment times, {accruals} accrual fractions")]
    ScheduleMismatch {
        /// Number of fixed payment times
        times: usize,
        /// Number of accrual fractions
        accruals: usize,
    },

    /// An underlying swap disagrees with the others on direction or currency.
    #[error("Underlying swap at index {index} differs in direction or currency")]
    InconsistentUnderlyings {
        /// Index of the offending underlying
        index: usize,
    },

    /// An underlying swap starts before its exercise date.
    #[error("Underlying swap at index {index} starts before its exercise date")]
    UnderlyingStartsBeforeExercise {
        /// Index of the offending underlying
        index: usize,
    },

    /// Projection produced no cash flows.
    #[error("Cash flow projection is empty")]
    EmptyCashFlows,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            format!("{}", InstrumentError::EmptySchedule),
            "Schedule is empty"
        );
        assert_eq!(
            format!(
                "{}",
                InstrumentError::LengthMismatch {
                    expiries: 3,
                    swaps: 2
                }
            ),
            "Expected one underlying per exercise date: 3 dates, 2 swaps"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = InstrumentError::EmptyCashFlows;
        let _: &dyn std::error::Error = &err;
    }
}
