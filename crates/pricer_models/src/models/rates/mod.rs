//! Interest rate model implementations.

pub mod hull_white;

pub use hull_white::{HullWhiteModel, HullWhiteParams};
