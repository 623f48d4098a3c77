//! Assignment of row entities (vehicles) to column entities (zones).
//!
//! - [`GreedyRowMinimum`] — each row takes its own cheapest column, O(n·m).
//!   Two rows may pick the same column. Default mode.
//! - [`Hungarian`] — minimum-cost perfect matching (Kuhn-Munkres), O(n³)
//! - [`solve_assignment`] / [`solve_assignment_with`] — validate labels and
//!   build an [`AssignmentSolution`](crate::models::AssignmentSolution)

mod greedy;
mod hungarian;
mod solve;
mod strategy;

pub use greedy::GreedyRowMinimum;
pub use hungarian::Hungarian;
pub use solve::{solve_assignment, solve_assignment_with};
pub use strategy::{AssignmentMode, AssignmentStrategy};
