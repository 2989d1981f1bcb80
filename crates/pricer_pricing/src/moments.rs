//! Partial moments of the standard normal distribution.

use crate::quadratic::Quadratic;
use num_traits::Float;
use pricer_models::analytical::distributions::{norm_cdf, norm_pdf};

/// Zeroth partial moment `M0(z) = ∫_{-∞}^{z} φ(u) du = Φ(z)`.
#[inline]
pub fn m0<T: Float>(z: T) -> T {
    norm_cdf(z)
}

/// First partial moment `M1(z) = ∫_{-∞}^{z} u·φ(u) du = -φ(z)`.
#[inline]
pub fn m1<T: Float>(z: T) -> T {
    -norm_pdf(z)
}

/// Second partial moment `M2(z) = ∫_{-∞}^{z} u²·φ(u) du = Φ(z) - z·φ(z)`.
#[inline]
pub fn m2<T: Float>(z: T) -> T {
    let phi = norm_pdf(z);
    // φ underflows to zero far in the tails; avoid inf·0 there.
    if phi == T::zero() {
        norm_cdf(z)
    } else {
        norm_cdf(z) - z * phi
    }
}

/// Integrate a quadratic in standardised coordinates against the Gaussian
/// density over `[z_lo, z_hi]`:
/// `∫ (a·z² + b·z + c)·φ(z) dz = a·ΔM2 + b·ΔM1 + c·ΔM0`.
#[inline]
pub fn integrate_between<T: Float>(q: &Quadratic<T>, z_lo: T, z_hi: T) -> T {
    q.a * (m2(z_hi) - m2(z_lo)) + q.b * (m1(z_hi) - m1(z_lo)) + q.c * (m0(z_hi) - m0(z_lo))
}

/// Moment tables at a fixed set of cell boundaries.
///
/// One transition integral evaluates every cell against the same
/// standardised boundaries, so the three partial moments are tabulated once
/// per boundary and differenced per cell.
#[derive(Debug, Clone)]
pub struct MomentTable<T: Float> {
    m0: Vec<T>,
    m1: Vec<T>,
    m2: Vec<T>,
}

impl<T: Float> MomentTable<T> {
    /// Tabulate the partial moments at each boundary.
    pub fn new(bounds: &[T]) -> Self {
        Self {
            m0: bounds.iter().map(|z| m0(*z)).collect(),
            m1: bounds.iter().map(|z| m1(*z)).collect(),
            m2: bounds.iter().map(|z| m2(*z)).collect(),
        }
    }

    /// Number of tabulated boundaries.
    #[inline]
    pub fn len(&self) -> usize {
        self.m0.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.m0.is_empty()
    }

    /// Integrate `q` (in standardised coordinates) over cell `i`, the
    /// interval between boundaries `i` and `i + 1`.
    #[inline]
    pub fn integrate_cell(&self, i: usize, q: &Quadratic<T>) -> T {
        q.a * (self.m2[i + 1] - self.m2[i])
            + q.b * (self.m1[i + 1] - self.m1[i])
            + q.c * (self.m0[i + 1] - self.m0[i])
    }

    /// Contribution of a flat value `v` below the first boundary.
    #[inline]
    pub fn lower_tail(&self, v: T) -> T {
        v * self.m0[0]
    }

    /// Contribution of a flat value `v` above the last boundary.
    #[inline]
    pub fn upper_tail(&self, v: T) -> T {
        v * (T::one() - self.m0[self.m0.len() - 1])
    }
}
