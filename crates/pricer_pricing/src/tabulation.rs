//! Closed-form tabulation of exercise values on the state grid.

use crate::error::PricerError;
use crate::grid::StateGrid;
use num_traits::Float;

/// The cash flow strip of one exercise date, prepared for tabulation.
///
/// For each flow: the amount discounted to today and rebased to the terminal
/// numeraire bond, the accumulated bond volatility `α` to the exercise date,
/// and the state loading `g = α / β(0, date)` which depends only on the
/// payment time.
#[derive(Debug, Clone, PartialEq)]
pub struct DatedCashFlows<T: Float> {
    /// `c_l · P(0, t_l) / P(0, θ_n)` per flow
    discounted: Vec<T>,
    /// `α_l` per flow
    alphas: Vec<T>,
    /// `α_l / β(0, date)` per flow
    loadings: Vec<T>,
}

impl<T: Float> DatedCashFlows<T> {
    /// Bundle a prepared strip.
    ///
    /// # Errors
    ///
    /// [`PricerError::InvalidInstrument`] if the slices are empty or differ
    /// in length.
    pub fn new(discounted: Vec<T>, alphas: Vec<T>, loadings: Vec<T>) -> Result<Self, PricerError> {
        if discounted.is_empty()
            || discounted.len() != alphas.len()
            || discounted.len() != loadings.len()
        {
            return Err(PricerError::InvalidInstrument {
                reason: format!(
                    "inconsistent cash flow strip: {} flows, {} alphas, {} loadings",
                    discounted.len(),
                    alphas.len(),
                    loadings.len()
                ),
            });
        }
        Ok(Self {
            discounted,
            alphas,
            loadings,
        })
    }

    /// Return the rebased discounted amounts.
    #[inline]
    pub fn discounted(&self) -> &[T] {
        &self.discounted
    }

    /// Return the alpha loadings.
    #[inline]
    pub fn alphas(&self) -> &[T] {
        &self.alphas
    }

    /// Return the state loadings.
    #[inline]
    pub fn loadings(&self) -> &[T] {
        &self.loadings
    }
}

/// Tabulate the exercise value of a strip over the extended grid.
///
/// Conditional on state `X` at the exercise date, a unit flow at `t_l` is
/// worth `exp(-α_l²/2 - g_l·X)` in rebased discounted terms, so the strip
/// value at grid point `i` is the corresponding weighted sum. Values are
/// computed on the inner band and the outer band is set flat from the inner
/// edges.
pub fn tabulate_exercise<T: Float>(grid: &StateGrid<T>, flows: &DatedCashFlows<T>) -> Vec<T> {
    let half = T::from(0.5).unwrap();
    let mut values = vec![T::zero(); grid.extended_len()];
    for i in grid.inner_range() {
        let x = grid.coordinate(i);
        let mut total = T::zero();
        for ((c, alpha), g) in flows
            .discounted
            .iter()
            .zip(flows.alphas.iter())
            .zip(flows.loadings.iter())
        {
            total = total + *c * (-half * *alpha * *alpha - *g * x).exp();
        }
        values[i] = total;
    }
    flatten_tails(grid, &mut values);
    values
}

/// Copy the inner-edge values across the outer flat band.
pub fn flatten_tails<T: Float>(grid: &StateGrid<T>, values: &mut [T]) {
    let inner_lo = *grid.inner_range().start();
    let inner_hi = *grid.inner_range().end();
    let low = values[inner_lo];
    let high = values[inner_hi];
    for value in values.iter_mut().take(inner_lo) {
        *value = low;
    }
    for value in values.iter_mut().skip(inner_hi + 1) {
        *value = high;
    }
}
