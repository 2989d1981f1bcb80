//! Error types for the foundation layer.
//!
//! This module provides:
//! - [`SolverError`]: root-finding failures
//! - [`CurrencyError`]: currency parsing failures

use thiserror::Error;

/// Errors raised by the root-finding solvers.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::NoBracket { a: 1.0, b: 2.0 };
/// assert!(format!("{}", err).contains("bracket"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SolverError {
    /// The function values at the bracket endpoints have the same sign.
    #[error("No valid bracket: f(a) and f(b) have the same sign for a = {a}, b = {b}")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// The solver did not converge within the iteration budget.
    #[error("Maximum iterations exceeded: {iterations}")]
    MaxIterationsExceeded {
        /// The iteration budget that was exhausted
        iterations: usize,
    },
}

/// Errors raised when parsing currency codes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CurrencyError {
    /// The code does not name a supported currency.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The offending code
        code: String,
    },
}
