//! Market data abstractions.
//!
//! This module provides:
//! - [`curves`]: the [`curves::YieldCurve`] trait with flat and interpolated
//!   implementations
//! - [`error::MarketDataError`]: structured market data errors

pub mod curves;
pub mod error;

pub use curves::{FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
