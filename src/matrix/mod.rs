//! Cost matrices.
//!
//! Provides a dense rectangular cost matrix shared by the assignment and
//! transportation solvers.

mod cost_matrix;

pub use cost_matrix::CostMatrix;
