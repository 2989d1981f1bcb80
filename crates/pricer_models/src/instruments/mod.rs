//! Instrument definitions.
//!
//! This module provides:
//! - [`rates`]: fixed-for-Ibor swaps, Bermudan swaptions and the
//!   cash-flow-equivalent projection
//! - [`error::InstrumentError`]: structured validation errors

pub mod error;
pub mod rates;

pub use error::InstrumentError;
pub use rates::{
    BermudanSwaption, CashFlow, CashFlowEquivalentProjector, CashFlowProjector, FixedIborSwap,
    Position, SwapDirection, SwaptionType,
};
