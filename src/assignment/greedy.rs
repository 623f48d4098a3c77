//! Greedy per-row minimum assignment.
//!
//! Every row independently takes the column with its lowest cost; ties go to
//! the lowest column index. Column uniqueness is not enforced, so this is a
//! heuristic for the assignment problem rather than a solution of it.
//!
//! # Complexity
//!
//! O(n·m) for an n×m matrix.

use crate::error::SolveError;
use crate::matrix::CostMatrix;

use super::AssignmentStrategy;

/// Picks each row's cheapest column.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::{AssignmentStrategy, GreedyRowMinimum};
/// use u_ewaste::matrix::CostMatrix;
///
/// // Both rows prefer column 0.
/// let costs = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0, 5.0]]).unwrap();
/// assert_eq!(GreedyRowMinimum.assign(&costs).unwrap(), vec![0, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyRowMinimum;

impl AssignmentStrategy for GreedyRowMinimum {
    fn name(&self) -> &'static str {
        "greedy_row_minimum"
    }

    fn assign(&self, costs: &CostMatrix) -> Result<Vec<usize>, SolveError> {
        let candidates: Vec<usize> = (0..costs.cols()).collect();
        (0..costs.rows())
            .map(|r| {
                costs
                    .cheapest_in_row(r, &candidates)
                    .ok_or(SolveError::DimensionMismatch {
                        rows: costs.rows(),
                        cols: costs.cols(),
                    })
            })
            .collect()
    }
}
