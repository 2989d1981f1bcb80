//! Closed-form European swaption price under a one-factor Gaussian model.

use crate::analytical::distributions::norm_cdf;
use crate::instruments::rates::swaption::SwaptionType;
use num_traits::Float;

/// Value of a European swaption from its discounted cash flow strip.
///
/// `discounted_cash_flows` holds the swap's own signed cash-flow-equivalent
/// amounts discounted to today (`c_l · P(0, t_l)`), `alphas` the bond
/// volatilities accumulated to the expiry with the numeraire at the expiry
/// (so the flow paying at expiry has `α = 0`), and `kappa` the exercise
/// boundary in the state variable
/// ([`ShortRateAnalytics::kappa`](crate::models::ShortRateAnalytics::kappa)).
///
/// The price is
///
/// ```text
/// pv = Σ_l c_l · P(0, t_l) · Φ(ω·(κ + α_l)),   ω = -1 payer, +1 receiver
/// ```
///
/// where a payer exercises above `κ` and a receiver below.
///
/// # Examples
/// ```
/// use pricer_models::analytical::european_swaption_value;
/// use pricer_models::instruments::rates::swaption::SwaptionType;
///
/// // Exchange of 1 now against 1 at a later date, α = 0.1, at-the-money.
/// let pv = european_swaption_value(&[1.0, -1.0], &[0.0, 0.1], -0.05_f64, SwaptionType::Payer);
/// assert!((pv - 0.0398776).abs() < 1e-5);
/// ```
pub fn european_swaption_value<T: Float>(
    discounted_cash_flows: &[T],
    alphas: &[T],
    kappa: T,
    swaption_type: SwaptionType,
) -> T {
    let omega = match swaption_type {
        SwaptionType::Payer => -T::one(),
        SwaptionType::Receiver => T::one(),
    };
    let mut pv = T::zero();
    for (c, alpha) in discounted_cash_flows.iter().zip(alphas.iter()) {
        pv = pv + *c * norm_cdf(omega * (kappa + *alpha));
    }
    pv
}
