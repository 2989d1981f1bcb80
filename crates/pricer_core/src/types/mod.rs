//! Core type definitions shared across the workspace.
//!
//! This module provides:
//! - [`Currency`]: ISO 4217 currency identifiers
//! - [`CurrencyAmount`]: a monetary amount tagged with its currency
//! - [`SolverError`], [`CurrencyError`]: structured error types

pub mod amount;
pub mod currency;
pub mod error;

pub use amount::CurrencyAmount;
pub use currency::Currency;
pub use error::{CurrencyError, SolverError};
