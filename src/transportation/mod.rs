//! Transportation problem: ship supply to demand at low total cost.
//!
//! - [`vogel_approximation`] — Vogel's Approximation Method (VAM), O((m+n)·mn)
//!   worst case. Feasible, not guaranteed optimal.
//! - [`solve_transportation`] — validates inputs (shape, quantities, balance)
//!   and labels the VAM plan
//!
//! # Reference
//!
//! Reinfeld, N. V. & Vogel, W. R. (1958). *Mathematical Programming*.
//! Prentice-Hall.

mod balance;
mod solve;
mod vogel;

pub use balance::{is_balanced, rounding_tolerance};
pub use solve::solve_transportation;
pub use vogel::vogel_approximation;
