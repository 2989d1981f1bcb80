//! Quadratic segment fitting.

use num_traits::Float;
use std::ops::Sub;

/// A quadratic `q(x) = a·x² + b·x + c` in global state coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic<T: Float> {
    /// Second-order coefficient
    pub a: T,
    /// First-order coefficient
    pub b: T,
    /// Constant coefficient
    pub c: T,
}

impl<T: Float> Quadratic<T> {
    /// Construct from coefficients.
    #[inline]
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Evaluate `q(x)`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        (self.a * x + self.b) * x + self.c
    }

    /// Recompose under the affine substitution `x = m + s·z`.
    ///
    /// Returns the quadratic in `z` with
    /// `q(m + s·z) = (a·s²)·z² + (2·a·m·s + b·s)·z + (a·m² + b·m + c)`.
    #[inline]
    pub fn shift_scale(&self, m: T, s: T) -> Quadratic<T> {
        let two = T::from(2.0).unwrap();
        Quadratic {
            a: self.a * s * s,
            b: (two * self.a * m + self.b) * s,
            c: (self.a * m + self.b) * m + self.c,
        }
    }
}

impl<T: Float> Sub for Quadratic<T> {
    type Output = Quadratic<T>;

    fn sub(self, rhs: Quadratic<T>) -> Quadratic<T> {
        Quadratic {
            a: self.a - rhs.a,
            b: self.b - rhs.b,
            c: self.c - rhs.c,
        }
    }
}

/// Fit per-cell quadratics through consecutive point triples.
///
/// `values` are samples on a uniform grid starting at `x0` with spacing
/// `step`; the length must be odd and at least 3. Each even-odd-even triple
/// `(2m, 2m+1, 2m+2)` is interpolated exactly by one quadratic, which is
/// assigned to both cells it spans, so the result holds one coefficient set
/// per cell (`values.len() - 1` entries) with adjacent cell pairs sharing.
pub fn fit_cells<T: Float>(values: &[T], x0: T, step: T) -> Vec<Quadratic<T>> {
    debug_assert!(values.len() >= 3 && values.len() % 2 == 1);
    let two = T::from(2.0).unwrap();
    let n_cells = values.len() - 1;
    let mut cells = Vec::with_capacity(n_cells);

    for m in 0..n_cells / 2 {
        let i = 2 * m;
        let y0 = values[i];
        let y1 = values[i + 1];
        let y2 = values[i + 2];
        // Exact interpolation through the triple, expanded about the middle
        // point x1: q(x) = y1 + d1·(x - x1) + a·(x - x1)².
        let x1 = x0 + step * T::from(i + 1).unwrap();
        let a = (y0 - two * y1 + y2) / (two * step * step);
        let d1 = (y2 - y0) / (two * step);
        let b = d1 - two * a * x1;
        let c = (a * x1 - d1) * x1 + y1;
        let q = Quadratic::new(a, b, c);
        cells.push(q);
        cells.push(q);
    }
    cells
}

/// Locate a root of `q` inside `[lo, hi]`.
///
/// Uses the numerically stable quadratic formula; degenerate leading
/// coefficients fall back to the linear root. When both roots lie inside the
/// interval the smaller is returned. `None` means the discriminant is
/// negative or no root lies inside the interval.
pub fn crossing_in_cell<T: Float>(q: &Quadratic<T>, lo: T, hi: T) -> Option<T> {
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();

    if q.a == T::zero() {
        if q.b == T::zero() {
            return None;
        }
        let root = -q.c / q.b;
        return (root >= lo && root <= hi).then_some(root);
    }

    let disc = q.b * q.b - four * q.a * q.c;
    if disc < T::zero() {
        return None;
    }
    let sq = disc.sqrt();
    let shifted = -(q.b + if q.b >= T::zero() { sq } else { -sq }) / two;
    let r1 = shifted / q.a;
    let r2 = if shifted != T::zero() {
        q.c / shifted
    } else {
        r1
    };

    let (small, large) = if r1 <= r2 { (r1, r2) } else { (r2, r1) };
    for root in [small, large] {
        if root >= lo && root <= hi {
            return Some(root);
        }
    }
    None
}
