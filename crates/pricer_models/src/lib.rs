//! # pricer_models: Instruments and model analytics
//!
//! This crate sits between the foundation layer (`pricer_core`) and the
//! pricing engines (`pricer_pricing`). It provides:
//!
//! - **Instruments**: fixed-for-Ibor swap and Bermudan swaption descriptors,
//!   plus the cash-flow-equivalent projection that reduces a swap to a fixed
//!   annuity
//! - **Models**: the Hull-White one-factor short-rate model with
//!   piecewise-constant volatility and its bond-volatility analytics
//! - **Analytical**: normal distribution helpers and the closed-form
//!   European swaption price under Hull-White

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
