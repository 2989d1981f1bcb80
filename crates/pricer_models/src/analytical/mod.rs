//! Analytical pricing helpers.
//!
//! This module provides:
//! - [`distributions`]: standard normal CDF, PDF and inverse CDF
//! - [`european`]: the closed-form European swaption price under a
//!   one-factor Gaussian short-rate model

pub mod distributions;
pub mod european;

pub use european::european_swaption_value;
