//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: cumulative distribution function Φ
//! - `norm_pdf`: probability density function φ
//! - `norm_inv_cdf`: inverse cumulative distribution function Φ⁻¹
//!
//! All functions are generic over `T: Float` so they can be evaluated on
//! `f64` or on custom scalar types.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function approximation.
///
/// Abramowitz and Stegun formula 7.1.26, maximum error 1.5e-7 for all x.
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    let two = T::from(2.0).unwrap();
    if x < zero {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes `P(X <= x)` for `X ~ N(0, 1)` as `Φ(x) = erfc(-x/√2) / 2`.
/// Accurate to 1.5e-7 for all finite x.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// Computes `φ(x) = exp(-x²/2) / sqrt(2π)`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal inverse cumulative distribution function.
///
/// Acklam's rational approximation: a central rational function for
/// `p ∈ [0.02425, 0.97575]` and tail expansions in `sqrt(-2 ln p)` outside,
/// with relative error below 1.15e-9 over the open unit interval.
///
/// Returns `-∞` for `p <= 0`, `+∞` for `p >= 1` and `NaN` for `NaN` input.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::{norm_cdf, norm_inv_cdf};
///
/// let z = norm_inv_cdf(0.975_f64);
/// assert!((z - 1.959964).abs() < 1e-5);
/// assert!((norm_cdf(z) - 0.975).abs() < 1e-6);
/// ```
pub fn norm_inv_cdf<T: Float>(p: T) -> T {
    if p.is_nan() {
        return p;
    }
    if p <= T::zero() {
        return T::neg_infinity();
    }
    if p >= T::one() {
        return T::infinity();
    }

    // Acklam's coefficients.
    let a = [
        T::from(-3.969683028665376e+01).unwrap(),
        T::from(2.209460984245205e+02).unwrap(),
        T::from(-2.759285104469687e+02).unwrap(),
        T::from(1.383577518672690e+02).unwrap(),
        T::from(-3.066479806614716e+01).unwrap(),
        T::from(2.506628277459239e+00).unwrap(),
    ];
    let b = [
        T::from(-5.447609879822406e+01).unwrap(),
        T::from(1.615858368580409e+02).unwrap(),
        T::from(-1.556989798598866e+02).unwrap(),
        T::from(6.680131188771972e+01).unwrap(),
        T::from(-1.328068155288572e+01).unwrap(),
    ];
    let c = [
        T::from(-7.784894002430293e-03).unwrap(),
        T::from(-3.223964580411365e-01).unwrap(),
        T::from(-2.400758277161838e+00).unwrap(),
        T::from(-2.549732539343734e+00).unwrap(),
        T::from(4.374664141464968e+00).unwrap(),
        T::from(2.938163982698783e+00).unwrap(),
    ];
    let d = [
        T::from(7.784695709041462e-03).unwrap(),
        T::from(3.224671290700398e-01).unwrap(),
        T::from(2.445134137142996e+00).unwrap(),
        T::from(3.754408661907416e+00).unwrap(),
    ];

    let p_low = T::from(0.02425).unwrap();
    let p_high = T::one() - p_low;
    let one = T::one();
    let two = T::from(2.0).unwrap();
    let half = T::from(0.5).unwrap();

    if p < p_low {
        // Lower tail.
        let q = (-two * p.ln()).sqrt();
        (((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
            / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + one)
    } else if p <= p_high {
        // Central region.
        let q = p - half;
        let r = q * q;
        (((((a[0] * r + a[1]) * r + a[2]) * r + a[3]) * r + a[4]) * r + a[5]) * q
            / (((((b[0] * r + b[1]) * r + b[2]) * r + b[3]) * r + b[4]) * r + one)
    } else {
        // Upper tail, by symmetry with the lower tail.
        let q = (-two * (one - p).ln()).sqrt();
        -((((((c[0] * q + c[1]) * q + c[2]) * q + c[3]) * q + c[4]) * q + c[5])
            / ((((d[0] * q + d[1]) * q + d[2]) * q + d[3]) * q + one))
    }
}
