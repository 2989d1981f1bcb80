//! Error types for market data operations.

use thiserror::Error;

/// Market data errors.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("maturity"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketDataError {
    /// A maturity outside the valid domain of the curve.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The offending maturity in year fractions
        t: f64,
    },

    /// Fewer pillars than the curve construction requires.
    #[error("Insufficient data: got {got} pillars, need at least {need}")]
    InsufficientData {
        /// Number of pillars supplied
        got: usize,
        /// Minimum number of pillars required
        need: usize,
    },

    /// Pillar abscissae are not strictly increasing.
    #[error("Pillar times must be strictly increasing at index {index}")]
    NonIncreasingPillars {
        /// Index of the first offending pillar
        index: usize,
    },
}
