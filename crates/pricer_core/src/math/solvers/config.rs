//! Solver configuration.

use num_traits::Float;

/// Configuration for the root-finding solvers.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Absolute convergence tolerance on the function value and bracket width
    pub tolerance: T,
    /// Maximum number of iterations before giving up
    pub max_iterations: usize,
}

impl<T: Float> SolverConfig<T> {
    /// Construct a configuration with the given tolerance and budget.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl<T: Float> Default for SolverConfig<T> {
    /// Tolerance `1e-10`, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config: SolverConfig<f64> = SolverConfig::default();
        assert_eq!(config.tolerance, 1e-10);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_new() {
        let config = SolverConfig::new(1e-8_f64, 50);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iterations, 50);
    }
}
