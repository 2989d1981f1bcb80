//! Interest rate instruments.

pub mod cashflow;
pub mod swap;
pub mod swaption;

pub use cashflow::{CashFlow, CashFlowEquivalentProjector, CashFlowProjector};
pub use swap::{FixedIborSwap, SwapDirection};
pub use swaption::{BermudanSwaption, Position, SwaptionType};
