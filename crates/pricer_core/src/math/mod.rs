//! Numerical routines shared by the pricing layers.

pub mod solvers;
