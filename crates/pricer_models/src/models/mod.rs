//! Short-rate models.
//!
//! This module provides:
//! - [`ShortRateAnalytics`]: the bond-volatility analytics consumed by the
//!   swaption pricers
//! - [`rates`]: model implementations ([`rates::HullWhiteModel`])
//! - [`error::ModelError`]: structured model errors

pub mod error;
pub mod rates;

pub use error::ModelError;
pub use rates::{HullWhiteModel, HullWhiteParams};

use num_traits::Float;

/// Bond-volatility analytics of a one-factor Gaussian short-rate model.
///
/// The quantities below are the inputs to both the closed-form European
/// swaption price and the Bermudan backward-induction engine:
///
/// - `alpha` is the volatility of the ratio `P(·, bond_maturity) /
///   P(·, numeraire_time)` accumulated between two observation times;
/// - `beta` is the accumulated volatility of the state factor itself;
/// - `kappa` locates the state value at which a strip of discounted cash
///   flows, loaded by their alphas, changes sign.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
pub trait ShortRateAnalytics<T: Float> {
    /// Accumulated volatility between `start_expiry` and `end_expiry` of the
    /// zero bond maturing at `bond_maturity`, rebased to the numeraire bond
    /// maturing at `numeraire_time`.
    fn alpha(&self, start_expiry: T, end_expiry: T, numeraire_time: T, bond_maturity: T) -> T;

    /// Accumulated volatility of the state factor between `start_expiry`
    /// and `end_expiry`.
    fn beta(&self, start_expiry: T, end_expiry: T) -> T;

    /// Root `x` of `Σ_l c_l · exp(-α_l²/2 - α_l·x) = 0`, the exercise
    /// indicator of the cash flow strip `c` with loadings `alpha`.
    ///
    /// # Errors
    ///
    /// [`ModelError::MismatchedCashFlows`] if the slices are empty or differ
    /// in length, [`ModelError::Solver`] if no sign change can be bracketed
    /// (a strip whose value never changes sign has no exercise boundary).
    fn kappa(&self, discounted_cash_flows: &[T], alphas: &[T]) -> Result<T, ModelError>;
}
