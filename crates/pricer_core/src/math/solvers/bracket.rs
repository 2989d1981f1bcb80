//! Geometric bracket expansion.

use crate::types::SolverError;
use num_traits::Float;

/// Growth factor applied to the bracket width per expansion step.
const GROWTH: f64 = 1.6;

/// Expand `[a, b]` geometrically until `f` changes sign across it.
///
/// Starting from an initial guess interval, the endpoint with the smaller
/// residual magnitude is pushed outwards until the endpoints straddle a root
/// or the expansion budget is exhausted.
///
/// # Returns
///
/// * `Ok((a, b))` - A bracket with `f(a) * f(b) <= 0`
/// * `Err(SolverError::NoBracket)` - No sign change found within
///   `max_expansions` steps
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::expand_bracket;
///
/// // Root at x = 10, outside the initial guess [-1, 1].
/// let f = |x: f64| x - 10.0;
/// let (a, b) = expand_bracket(f, -1.0, 1.0, 50).unwrap();
/// assert!(f(a) * f(b) <= 0.0);
/// ```
pub fn expand_bracket<T, F>(f: F, a: T, b: T, max_expansions: usize) -> Result<(T, T), SolverError>
where
    T: Float,
    F: Fn(T) -> T,
{
    let growth = T::from(GROWTH).unwrap();

    let mut a = a;
    let mut b = b;
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    let mut fa = f(a);
    let mut fb = f(b);

    for _ in 0..max_expansions {
        if fa * fb <= T::zero() {
            return Ok((a, b));
        }
        // Push the endpoint closer to a sign change further out.
        if fa.abs() < fb.abs() {
            a = a + growth * (a - b);
            fa = f(a);
        } else {
            b = b + growth * (b - a);
            fb = f(b);
        }
    }

    Err(SolverError::NoBracket {
        a: a.to_f64().unwrap_or(f64::NAN),
        b: b.to_f64().unwrap_or(f64::NAN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_bracketed() {
        let f = |x: f64| x;
        let (a, b) = expand_bracket(f, -1.0, 1.0, 10).unwrap();
        assert_eq!((a, b), (-1.0, 1.0));
    }

    #[test]
    fn test_expands_right() {
        let f = |x: f64| x - 100.0;
        let (a, b) = expand_bracket(f, -1.0, 1.0, 50).unwrap();
        assert!(f(a) * f(b) <= 0.0);
        assert!(b >= 100.0);
    }

    #[test]
    fn test_expands_left() {
        let f = |x: f64| x + 100.0;
        let (a, b) = expand_bracket(f, -1.0, 1.0, 50).unwrap();
        assert!(f(a) * f(b) <= 0.0);
        assert!(a <= -100.0);
    }

    #[test]
    fn test_reversed_endpoints() {
        let f = |x: f64| x - 3.0;
        let (a, b) = expand_bracket(f, 1.0, -1.0, 50).unwrap();
        assert!(a < b);
        assert!(f(a) * f(b) <= 0.0);
    }

    #[test]
    fn test_no_root_fails() {
        let f = |x: f64| x * x + 1.0;
        match expand_bracket(f, -1.0, 1.0, 8) {
            Err(SolverError::NoBracket { .. }) => {}
            other => panic!("Expected NoBracket, got {:?}", other),
        }
    }
}
