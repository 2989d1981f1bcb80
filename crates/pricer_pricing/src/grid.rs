//! State grid construction.

use crate::error::PricerError;
use num_traits::Float;
use pricer_models::analytical::distributions::norm_inv_cdf;
use std::ops::RangeInclusive;

/// Default half point count per side of the base grid.
const DEFAULT_HALF_POINTS: usize = 50;

/// Tail mass rule when no explicit tolerance is given: `1 / (200 N)`.
const TAIL_RULE: f64 = 200.0;

/// Configuration of the backward-induction lattice.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Examples
/// ```
/// use pricer_pricing::grid::LatticeConfig;
///
/// let config: LatticeConfig<f64> = LatticeConfig::default();
/// assert_eq!(config.half_points, 50);
/// assert!(config.tail_tolerance.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeConfig<T: Float> {
    /// Half point count `N`: the base grid has `2N + 1` points
    pub half_points: usize,
    /// Probability mass allowed beyond the grid edge; `None` applies the
    /// `1 / (200 N)` rule
    pub tail_tolerance: Option<T>,
}

impl<T: Float> LatticeConfig<T> {
    /// Construct a configuration with the given half point count.
    pub fn new(half_points: usize) -> Self {
        Self {
            half_points,
            tail_tolerance: None,
        }
    }

    /// Override the tail mass tolerance.
    pub fn with_tail_tolerance(mut self, tolerance: T) -> Self {
        self.tail_tolerance = Some(tolerance);
        self
    }
}

impl<T: Float> Default for LatticeConfig<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_POINTS)
    }
}

/// The discretised state grid shared by every induction step.
///
/// The grid is symmetric about zero with uniform step `ε`. The *base* grid
/// has `2N + 1` points; the *extended* grid doubles each wing to `4N + 1`
/// points so that the transition integral sees tabulated values well beyond
/// the base range. All indexing below is in extended-grid positions
/// `0 ..= 4N`, with the centre (state zero) at index `2N`; base-grid points
/// occupy the inner band `N ..= 3N` and the outer `N` points per side are
/// the flat tails.
///
/// # Examples
/// ```
/// use pricer_pricing::grid::{LatticeConfig, StateGrid};
///
/// let grid = StateGrid::build(0.01_f64, 0.012, &LatticeConfig::new(50)).unwrap();
/// assert_eq!(grid.extended_len(), 201);
/// assert_eq!(grid.coordinate(grid.center()), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StateGrid<T: Float> {
    /// Half point count `N`
    half_points: usize,
    /// Grid step `ε`
    step: T,
}

impl<T: Float> StateGrid<T> {
    /// Size the grid from the period volatility bounds.
    ///
    /// The step is `ε = Φ⁻¹(1 - tol) · β_max / N`, so that a single period
    /// increment of the largest volatility leaves at most `tol` probability
    /// mass beyond the base grid edge.
    ///
    /// # Errors
    ///
    /// [`PricerError::InvalidModel`] if `N = 0`, if a volatility bound is
    /// not strictly positive and finite, or if the tolerance is outside
    /// `(0, 0.5)`.
    pub fn build(beta_min: T, beta_max: T, config: &LatticeConfig<T>) -> Result<Self, PricerError> {
        let n = config.half_points;
        if n == 0 {
            return Err(PricerError::InvalidModel {
                reason: "lattice half point count must be positive".to_string(),
            });
        }
        if beta_min <= T::zero() || beta_max <= T::zero() || !beta_max.is_finite() {
            return Err(PricerError::InvalidModel {
                reason: format!(
                    "period volatilities must be strictly positive, got bounds [{}, {}]",
                    beta_min.to_f64().unwrap_or(f64::NAN),
                    beta_max.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        let tolerance = match config.tail_tolerance {
            Some(tol) => tol,
            None => T::one() / (T::from(TAIL_RULE).unwrap() * T::from(n).unwrap()),
        };
        if tolerance <= T::zero() || tolerance >= T::from(0.5).unwrap() {
            return Err(PricerError::InvalidModel {
                reason: format!(
                    "tail tolerance must lie in (0, 0.5), got {}",
                    tolerance.to_f64().unwrap_or(f64::NAN)
                ),
            });
        }
        let z_bar = norm_inv_cdf(T::one() - tolerance);
        let step = z_bar * beta_max / T::from(n).unwrap();
        Ok(Self {
            half_points: n,
            step,
        })
    }

    /// Return the half point count `N`.
    #[inline]
    pub fn half_points(&self) -> usize {
        self.half_points
    }

    /// Return the grid step `ε`.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Number of points in the base grid, `2N + 1`.
    #[inline]
    pub fn base_len(&self) -> usize {
        2 * self.half_points + 1
    }

    /// Number of points in the extended grid, `4N + 1`.
    #[inline]
    pub fn extended_len(&self) -> usize {
        4 * self.half_points + 1
    }

    /// Index of the centre point (state zero), `2N`.
    #[inline]
    pub fn center(&self) -> usize {
        2 * self.half_points
    }

    /// State coordinate of extended-grid index `i`: `(i - 2N) · ε`.
    #[inline]
    pub fn coordinate(&self, index: usize) -> T {
        let offset = T::from(index).unwrap() - T::from(self.center()).unwrap();
        offset * self.step
    }

    /// Indices of the inner band where values are tabulated directly,
    /// `N ..= 3N`.
    #[inline]
    pub fn inner_range(&self) -> RangeInclusive<usize> {
        self.half_points..=3 * self.half_points
    }

    /// Whether index `i` lies in the flat tail band outside the base grid.
    #[inline]
    pub fn is_flat_band(&self, index: usize) -> bool {
        index < self.half_points || index > 3 * self.half_points
    }
}
