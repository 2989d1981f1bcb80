//! Root-finding solvers.
//!
//! This module provides:
//! - [`BrentSolver`]: derivative-free root finding on a bracket
//! - [`expand_bracket`]: geometric bracket expansion for functions whose
//!   root location is unknown
//! - [`SolverConfig`]: tolerance and iteration budget

pub mod bracket;
pub mod brent;
pub mod config;

pub use bracket::expand_bracket;
pub use brent::BrentSolver;
pub use config::SolverConfig;
