//! # pricer_core: Foundation layer for the swaption lattice pricer
//!
//! This crate provides the shared building blocks used by the instrument,
//! model and engine layers:
//!
//! - **Types**: currencies, monetary amounts and structured error types
//! - **Market data**: the [`market_data::curves::YieldCurve`] abstraction with
//!   flat and interpolated implementations
//! - **Math**: root-finding solvers (Brent's method with bracket expansion)
//!
//! Everything is generic over `T: num_traits::Float` so that pricing code can
//! run on `f64` or on custom scalar types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
