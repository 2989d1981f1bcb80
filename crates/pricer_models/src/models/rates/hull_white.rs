//! Hull-White one-factor model with piecewise-constant volatility.

use crate::models::error::ModelError;
use crate::models::ShortRateAnalytics;
use num_traits::Float;
use pricer_core::math::solvers::{expand_bracket, BrentSolver, SolverConfig};

/// Sentinel breakpoint closing the last volatility piece.
const LAST_TIME: f64 = 1000.0;

/// Convergence tolerance for the kappa root.
const KAPPA_ACCURACY: f64 = 1e-8;

/// Initial bracket half-width for the kappa root, in state standard deviations.
const KAPPA_BRACKET: f64 = 2.0;

/// Parameters of the Hull-White one-factor model.
///
/// The short rate follows `dr = a·(θ(t) - r)·dt + σ(t)·dW` with constant
/// mean reversion `a > 0` and a piecewise-constant volatility `σ(t)`:
/// `volatility[i]` applies on `[volatility_time[i], volatility_time[i+1])`,
/// where the stored times are the interior breakpoints augmented with `0` in
/// front and a distant sentinel at the back.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_models::models::rates::hull_white::HullWhiteParams;
///
/// // Constant 1% volatility, mean reversion 2%.
/// let params = HullWhiteParams::constant(0.02_f64, 0.01).unwrap();
/// assert_eq!(params.volatility(), &[0.01]);
///
/// // Two pieces split at 2y.
/// let params = HullWhiteParams::new(0.02_f64, vec![0.01, 0.012], vec![2.0]).unwrap();
/// assert_eq!(params.volatility_time()[1], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HullWhiteParams<T: Float> {
    /// Mean reversion speed, strictly positive
    mean_reversion: T,
    /// Volatility per piece, strictly positive
    volatility: Vec<T>,
    /// Piece boundaries: 0, the interior breakpoints, then the sentinel
    volatility_time: Vec<T>,
}

impl<T: Float> HullWhiteParams<T> {
    /// Construct a parameter set with piecewise-constant volatility.
    ///
    /// `breakpoints` are the interior piece boundaries; `volatility` must
    /// hold one value more than there are breakpoints.
    ///
    /// # Errors
    ///
    /// * [`ModelError::InvalidMeanReversion`] - `mean_reversion <= 0`
    /// * [`ModelError::InvalidVolatility`] - any `volatility <= 0`
    /// * [`ModelError::MismatchedPieces`] - wrong number of volatilities
    /// * [`ModelError::InvalidBreakpoints`] - breakpoints not strictly
    ///   increasing, not positive, or beyond the sentinel
    pub fn new(
        mean_reversion: T,
        volatility: Vec<T>,
        breakpoints: Vec<T>,
    ) -> Result<Self, ModelError> {
        if mean_reversion <= T::zero() || !mean_reversion.is_finite() {
            return Err(ModelError::InvalidMeanReversion {
                value: mean_reversion.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility.is_empty() || volatility.len() != breakpoints.len() + 1 {
            return Err(ModelError::MismatchedPieces {
                volatilities: volatility.len(),
                breakpoints: breakpoints.len(),
            });
        }
        for sigma in &volatility {
            if *sigma <= T::zero() || !sigma.is_finite() {
                return Err(ModelError::InvalidVolatility {
                    value: sigma.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        let last_time = T::from(LAST_TIME).unwrap();
        let mut previous = T::zero();
        for (i, t) in breakpoints.iter().enumerate() {
            if *t <= previous || *t >= last_time {
                return Err(ModelError::InvalidBreakpoints { index: i });
            }
            previous = *t;
        }

        let mut volatility_time = Vec::with_capacity(breakpoints.len() + 2);
        volatility_time.push(T::zero());
        volatility_time.extend(breakpoints);
        volatility_time.push(last_time);

        Ok(Self {
            mean_reversion,
            volatility,
            volatility_time,
        })
    }

    /// Construct a parameter set with a single constant volatility.
    pub fn constant(mean_reversion: T, volatility: T) -> Result<Self, ModelError> {
        Self::new(mean_reversion, vec![volatility], vec![])
    }

    /// Return the mean reversion speed.
    #[inline]
    pub fn mean_reversion(&self) -> T {
        self.mean_reversion
    }

    /// Return the volatility pieces.
    #[inline]
    pub fn volatility(&self) -> &[T] {
        &self.volatility
    }

    /// Return the augmented piece boundaries (starting at 0, ending at the
    /// sentinel).
    #[inline]
    pub fn volatility_time(&self) -> &[T] {
        &self.volatility_time
    }
}

/// Hull-White one-factor model analytics.
///
/// Implements [`ShortRateAnalytics`] with the closed-form accumulation of
/// the piecewise-constant volatility over the model pieces.
///
/// # Examples
/// ```
/// use pricer_models::models::rates::hull_white::{HullWhiteModel, HullWhiteParams};
/// use pricer_models::models::ShortRateAnalytics;
///
/// let model = HullWhiteModel::new(HullWhiteParams::constant(0.02_f64, 0.01).unwrap());
///
/// // A bond maturing at the numeraire date has no rebased volatility.
/// let alpha = model.alpha(0.0, 1.0, 5.0, 5.0);
/// assert!(alpha.abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HullWhiteModel<T: Float> {
    /// Model parameters
    params: HullWhiteParams<T>,
}

impl<T: Float> HullWhiteModel<T> {
    /// Construct the model from validated parameters.
    pub fn new(params: HullWhiteParams<T>) -> Self {
        Self { params }
    }

    /// Return the model parameters.
    #[inline]
    pub fn params(&self) -> &HullWhiteParams<T> {
        &self.params
    }

    /// Accumulate `Σ σ_i² (exp(2a·s_{i+1}) - exp(2a·s_i))` over the pieces
    /// intersecting `[start_expiry, end_expiry]`.
    fn accumulate(&self, start_expiry: T, end_expiry: T) -> T {
        let a = self.params.mean_reversion;
        let two = T::from(2.0).unwrap();
        let vt = self.params.volatility_time();
        let vol = self.params.volatility();

        // Piece containing each endpoint: vt[i-1] <= t <= vt[i].
        let mut index_start = 1;
        while index_start < vt.len() - 1 && start_expiry > vt[index_start] {
            index_start += 1;
        }
        let mut index_end = index_start;
        while index_end < vt.len() - 1 && end_expiry > vt[index_end] {
            index_end += 1;
        }

        // Integration knots: the endpoints and the breakpoints between them.
        let mut knots = Vec::with_capacity(index_end - index_start + 2);
        knots.push(start_expiry);
        knots.extend_from_slice(&vt[index_start..index_end]);
        knots.push(end_expiry);

        let mut total = T::zero();
        for (i, pair) in knots.windows(2).enumerate() {
            let sigma = vol[index_start - 1 + i];
            total = total + sigma * sigma * ((two * a * pair[1]).exp() - (two * a * pair[0]).exp());
        }
        total
    }
}

impl<T: Float> ShortRateAnalytics<T> for HullWhiteModel<T> {
    /// `α = (exp(-a·numeraire_time) - exp(-a·bond_maturity)) ·
    /// sqrt(accumulation / (2a³))`.
    fn alpha(&self, start_expiry: T, end_expiry: T, numeraire_time: T, bond_maturity: T) -> T {
        let a = self.params.mean_reversion;
        let two = T::from(2.0).unwrap();
        let factor1 = (-a * numeraire_time).exp() - (-a * bond_maturity).exp();
        let numerator = two * a * a * a;
        factor1 * (self.accumulate(start_expiry, end_expiry) / numerator).sqrt()
    }

    /// `β = sqrt(accumulation / (2a))`.
    fn beta(&self, start_expiry: T, end_expiry: T) -> T {
        let a = self.params.mean_reversion;
        let two = T::from(2.0).unwrap();
        (self.accumulate(start_expiry, end_expiry) / (two * a)).sqrt()
    }

    fn kappa(&self, discounted_cash_flows: &[T], alphas: &[T]) -> Result<T, ModelError> {
        if discounted_cash_flows.is_empty() || discounted_cash_flows.len() != alphas.len() {
            return Err(ModelError::MismatchedCashFlows {
                flows: discounted_cash_flows.len(),
                alphas: alphas.len(),
            });
        }

        let half = T::from(0.5).unwrap();
        let indicator = |x: T| -> T {
            let mut value = T::zero();
            for (c, alpha) in discounted_cash_flows.iter().zip(alphas.iter()) {
                value = value + *c * (-half * *alpha * *alpha - *alpha * x).exp();
            }
            value
        };

        let guess = T::from(KAPPA_BRACKET).unwrap();
        let (a, b) = expand_bracket(&indicator, -guess, guess, 50)?;
        let solver = BrentSolver::new(SolverConfig::new(T::from(KAPPA_ACCURACY).unwrap(), 100));
        Ok(solver.find_root(&indicator, a, b)?)
    }
}
