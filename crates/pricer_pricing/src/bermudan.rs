//! Bermudan swaption pricing facade.

use crate::boundary::ExerciseSide;
use crate::error::PricerError;
use crate::grid::{LatticeConfig, StateGrid};
use crate::induction::{propagate, splice, ValueFunction};
use crate::tabulation::{tabulate_exercise, DatedCashFlows};
use num_traits::Float;
use pricer_core::market_data::curves::YieldCurve;
use pricer_core::types::CurrencyAmount;
use pricer_models::instruments::rates::cashflow::CashFlowProjector;
use pricer_models::instruments::rates::swaption::{BermudanSwaption, Position, SwaptionType};
use pricer_models::models::ShortRateAnalytics;

/// Backward-induction pricer for Bermudan swaptions under a one-factor
/// Gaussian short-rate model.
///
/// Every exercise date's swap is reduced to its cash-flow-equivalent strip,
/// discounted and rebased to the bond maturing at the last exercise date,
/// and tabulated in closed form on a shared state grid. The value function
/// is then rolled backwards through the exercise dates, splicing in the
/// exercise decision at each one and integrating the piecewise-quadratic
/// interpolant against the Gaussian transition kernel between dates.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_core::types::Currency;
/// use pricer_models::instruments::rates::cashflow::CashFlowEquivalentProjector;
/// use pricer_models::instruments::rates::swap::{FixedIborSwap, SwapDirection};
/// use pricer_models::instruments::rates::swaption::{BermudanSwaption, Position};
/// use pricer_models::models::rates::{HullWhiteModel, HullWhiteParams};
/// use pricer_pricing::BermudanSwaptionPricer;
///
/// let tails: Vec<_> = [1.0, 2.0]
///     .iter()
///     .map(|&start| {
///         FixedIborSwap::from_tenor(
///             1_000_000.0_f64, 0.03, start, 6.0, 1, SwapDirection::PayFixed, Currency::EUR,
///         )
///         .unwrap()
///     })
///     .collect();
/// let swaption = BermudanSwaption::new(vec![1.0, 2.0], tails, Position::Long).unwrap();
///
/// let curve = FlatCurve::new(0.03_f64);
/// let model = HullWhiteModel::new(HullWhiteParams::constant(0.02, 0.01).unwrap());
///
/// let pricer = BermudanSwaptionPricer::with_defaults();
/// let pv = pricer
///     .present_value(&swaption, &model, &curve, &CashFlowEquivalentProjector)
///     .unwrap();
/// assert!(pv.amount() > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BermudanSwaptionPricer<T: Float> {
    config: LatticeConfig<T>,
}

impl<T: Float> BermudanSwaptionPricer<T> {
    /// Construct with an explicit lattice configuration.
    pub fn new(config: LatticeConfig<T>) -> Self {
        Self { config }
    }

    /// Construct with the default lattice configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: LatticeConfig::default(),
        }
    }

    /// Return the lattice configuration.
    #[inline]
    pub fn config(&self) -> &LatticeConfig<T> {
        &self.config
    }

    /// Price a Bermudan swaption.
    ///
    /// # Errors
    ///
    /// * [`PricerError::InvalidInstrument`] - fewer than two exercise dates
    ///   (a single-date option has a closed form and needs no lattice), or a
    ///   malformed cash flow strip
    /// * [`PricerError::InvalidModel`] - degenerate period volatilities or
    ///   lattice configuration
    /// * [`PricerError::MarketData`] - the curve rejects a required maturity
    /// * [`PricerError::NumericDegeneracy`] - a straddled grid cell yields no
    ///   crossing root
    pub fn present_value<M, C, P>(
        &self,
        swaption: &BermudanSwaption<T>,
        model: &M,
        curve: &C,
        projector: &P,
    ) -> Result<CurrencyAmount<T>, PricerError>
    where
        M: ShortRateAnalytics<T>,
        C: YieldCurve<T>,
        P: CashFlowProjector<T>,
    {
        let dates = swaption.exercise_times();
        let n = dates.len();
        if n < 2 {
            return Err(PricerError::InvalidInstrument {
                reason: "need at least two exercise dates; a single-date swaption \
                         has a closed form"
                    .to_string(),
            });
        }

        let numeraire_time = swaption.last_exercise();
        let numeraire_df = curve.discount_factor(numeraire_time)?;

        // Prepare each date's strip and the per-period state volatilities.
        let mut dated: Vec<DatedCashFlows<T>> = Vec::with_capacity(n);
        let mut period_vols: Vec<T> = Vec::with_capacity(n);
        let mut beta_min = T::infinity();
        let mut beta_max = T::zero();
        let mut previous_date = T::zero();
        for (date, swap) in dates.iter().zip(swaption.underlying()) {
            let flows = projector.project(swap, curve)?;
            let state_vol = model.beta(T::zero(), *date);

            let mut discounted = Vec::with_capacity(flows.len());
            let mut alphas = Vec::with_capacity(flows.len());
            let mut loadings = Vec::with_capacity(flows.len());
            for flow in &flows {
                let df = curve.discount_factor(flow.time())?;
                let alpha = model.alpha(T::zero(), *date, numeraire_time, flow.time());
                discounted.push(flow.amount() * df / numeraire_df);
                alphas.push(alpha);
                loadings.push(alpha / state_vol);
            }
            dated.push(DatedCashFlows::new(discounted, alphas, loadings)?);

            let period_vol = model.beta(previous_date, *date);
            beta_min = beta_min.min(period_vol);
            beta_max = beta_max.max(period_vol);
            period_vols.push(period_vol);
            previous_date = *date;
        }

        let grid = StateGrid::build(beta_min, beta_max, &self.config)?;
        let side = match swaption.swaption_type() {
            SwaptionType::Payer => ExerciseSide::Above,
            SwaptionType::Receiver => ExerciseSide::Below,
        };

        // Terminal date: continuing is worth nothing.
        let zeros = vec![T::zero(); grid.extended_len()];
        let exercise = tabulate_exercise(&grid, &dated[n - 1]);
        let mut representation: ValueFunction<T> = splice(&grid, &exercise, &zeros, side)?;

        // Roll back through the earlier exercise dates.
        for k in (0..n - 1).rev() {
            let continuation = propagate(&grid, &representation, period_vols[k + 1]);
            let exercise = tabulate_exercise(&grid, &dated[k]);
            representation = splice(&grid, &exercise, &continuation, side)?;
        }

        // Final expectation back to today, read at the zero state.
        let today = propagate(&grid, &representation, period_vols[0]);
        let value = numeraire_df * today[grid.center()];
        let signed = match swaption.position() {
            Position::Long => value,
            Position::Short => -value,
        };
        Ok(CurrencyAmount::new(signed, swaption.currency()))
    }
}
