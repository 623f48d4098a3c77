//! Assignment strategy trait and mode selector.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::matrix::CostMatrix;

use super::{GreedyRowMinimum, Hungarian};

/// A way of choosing one column per row of a cost matrix.
///
/// Implementations must be deterministic: the same matrix always yields the
/// same choice.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::{AssignmentStrategy, GreedyRowMinimum};
/// use u_ewaste::matrix::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![vec![3.0, 1.0], vec![2.0, 4.0]]).unwrap();
/// assert_eq!(GreedyRowMinimum.assign(&costs).unwrap(), vec![1, 0]);
/// ```
pub trait AssignmentStrategy: Send + Sync {
    /// Short identifier recorded on produced solutions.
    fn name(&self) -> &'static str;

    /// Returns the chosen column index for every row, in row order.
    fn assign(&self, costs: &CostMatrix) -> Result<Vec<usize>, SolveError>;
}

/// Serializable selector for the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// Per-row minimum, see [`GreedyRowMinimum`].
    #[default]
    GreedyRowMinimum,
    /// Exact matching, see [`Hungarian`].
    Hungarian,
}

impl AssignmentMode {
    /// Returns the strategy implementing this mode.
    pub fn strategy(self) -> Box<dyn AssignmentStrategy> {
        match self {
            AssignmentMode::GreedyRowMinimum => Box::new(GreedyRowMinimum),
            AssignmentMode::Hungarian => Box::new(Hungarian),
        }
    }
}
