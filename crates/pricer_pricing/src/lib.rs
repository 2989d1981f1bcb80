//! # pricer_pricing: Bermudan swaption pricing engine
//!
//! Prices Bermudan-exercise swaptions under a one-factor Gaussian short-rate
//! model by backward induction over a discretised state variable. The value
//! function at each exercise date is held as a piecewise-quadratic
//! interpolant with flat tails, which lets the Gaussian transition
//! expectation between dates be evaluated in closed form from partial
//! moments of the normal distribution.
//!
//! The pipeline, front to back:
//!
//! 1. [`grid::StateGrid`] - symmetric state grid sized from the period
//!    volatilities
//! 2. [`tabulation`] - closed-form exercise values on the grid
//! 3. [`boundary`] - locate the exercise/continuation split
//! 4. [`quadratic`] - fit quadratic segments to the tabulated values
//! 5. [`moments`] - partial-moment integration of the segments
//! 6. [`induction`] - splice and propagate the value function date by date
//! 7. [`bermudan::BermudanSwaptionPricer`] - the facade tying it together
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::FlatCurve;
//! use pricer_core::types::Currency;
//! use pricer_models::instruments::rates::cashflow::CashFlowEquivalentProjector;
//! use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
//! use pricer_models::instruments::rates::swaption::{BermudanSwaption, Position};
//! use pricer_models::models::rates::hull_white::{HullWhiteModel, HullWhiteParams};
//! use pricer_pricing::bermudan::BermudanSwaptionPricer;
//!
//! let tails: Vec<_> = [1.0, 2.0]
//!     .iter()
//!     .map(|&start| {
//!         FixedIborSwap::from_tenor(
//!             1_000_000.0_f64, 0.03, start, 6.0, 1, SwapDirection::PayFixed, Currency::EUR,
//!         )
//!         .unwrap()
//!     })
//!     .collect();
//! let swaption = BermudanSwaption::new(vec![1.0, 2.0], tails, Position::Long).unwrap();
//!
//! let model = HullWhiteModel::new(HullWhiteParams::constant(0.02, 0.01).unwrap());
//! let curve = FlatCurve::new(0.03);
//!
//! let pricer = BermudanSwaptionPricer::with_defaults();
//! let pv = pricer
//!     .present_value(&swaption, &model, &curve, &CashFlowEquivalentProjector)
//!     .unwrap();
//! assert!(pv.amount() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bermudan;
pub mod boundary;
pub mod error;
pub mod grid;
pub mod induction;
pub mod moments;
pub mod quadratic;
pub mod tabulation;

pub use bermudan::BermudanSwaptionPricer;
pub use error::PricerError;
pub use grid::{LatticeConfig, StateGrid};

#[cfg(test)]
mod integration_tests;
