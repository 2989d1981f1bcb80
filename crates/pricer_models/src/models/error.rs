//! Error types for short-rate models.

use pricer_core::types::SolverError;
use thiserror::Error;

/// Model parameter and analytics errors.
///
/// # Examples
/// ```
/// use pricer_models::models::ModelError;
///
/// let err = ModelError::InvalidVolatility { value: -0.01 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Non-positive mean reversion speed.
    #[error("Invalid mean reversion: a = {value}")]
    InvalidMeanReversion {
        /// The offending value
        value: f64,
    },

    /// Non-positive volatility.
    #[error("Invalid volatility: σ = {value}")]
    InvalidVolatility {
        /// The offending value
        value: f64,
    },

    /// Volatility breakpoints not strictly increasing and positive.
    #[error("Volatility breakpoints must be strictly increasing and positive at index {index}")]
    InvalidBreakpoints {
        /// Index of the first offending breakpoint
        index: usize,
    },

    /// Volatility pieces and breakpoints inconsistent in number.
    #[error("Expected one volatility per piece: {volatilities} volatilities, {breakpoints} breakpoints")]
    MismatchedPieces {
        /// Number of volatility values
        volatilities: usize,
        /// Number of interior breakpoints
        breakpoints: usize,
    },

    /// Cash flow and loading slices empty or of different lengths.
    #[error("Cash flow strip mismatch: {flows} flows, {alphas} alphas")]
    MismatchedCashFlows {
        /// Number of discounted cash flows
        flows: usize,
        /// Number of alpha loadings
        alphas: usize,
    },

    /// Root finding failed.
    #[error("Solver failure: {0}")]
    Solver(#[from] SolverError),
}
