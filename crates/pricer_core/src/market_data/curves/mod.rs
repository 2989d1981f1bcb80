//! Yield curve implementations.
//!
//! This module provides:
//! - [`YieldCurve`]: the discount/zero/forward abstraction consumed by the
//!   pricers
//! - [`FlatCurve`]: constant continuously-compounded rate
//! - [`InterpolatedCurve`]: pillar-based curve, log-linear in discount factors

pub mod flat;
pub mod interpolated;
pub mod traits;

pub use flat::FlatCurve;
pub use interpolated::InterpolatedCurve;
pub use traits::YieldCurve;
