//! Assignment records and solutions.

use serde::{Deserialize, Serialize};

/// One row's chosen column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Label of the row entity (e.g. a vehicle).
    pub row_label: String,
    /// Label of the chosen column entity (e.g. a zone).
    pub column_label: String,
    /// Row index in the cost matrix.
    pub row: usize,
    /// Column index in the cost matrix.
    pub column: usize,
    /// Cost of the chosen cell.
    pub cost: f64,
}

/// Result of an assignment solve: exactly one [`Assignment`] per row.
///
/// Depending on the strategy, two rows may share a column; see
/// [`is_one_to_one`](Self::is_one_to_one).
///
/// # Examples
///
/// ```
/// use u_ewaste::models::{Assignment, AssignmentSolution};
///
/// let mut sol = AssignmentSolution::new("greedy_row_minimum");
/// sol.push(Assignment {
///     row_label: "Vehicle 1".into(),
///     column_label: "Zone A".into(),
///     row: 0,
///     column: 0,
///     cost: 45.0,
/// });
/// assert_eq!(sol.len(), 1);
/// assert_eq!(sol.total_cost(), 45.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSolution {
    strategy: String,
    assignments: Vec<Assignment>,
    total_cost: f64,
}

impl AssignmentSolution {
    /// Creates an empty solution produced by the named strategy.
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            assignments: Vec::new(),
            total_cost: 0.0,
        }
    }

    /// Appends an assignment and adds its cost to the total.
    pub fn push(&mut self, assignment: Assignment) {
        self.total_cost += assignment.cost;
        self.assignments.push(assignment);
    }

    /// Name of the strategy that produced this solution.
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// The assignments, in row order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of assignments (equals the row count).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if there are no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Sum of the chosen cell costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// How many rows chose each column.
    pub fn column_usage(&self, num_cols: usize) -> Vec<usize> {
        let mut usage = vec![0; num_cols];
        for a in &self.assignments {
            if let Some(slot) = usage.get_mut(a.column) {
                *slot += 1;
            }
        }
        usage
    }

    /// Returns `true` if no column was chosen by more than one row.
    pub fn is_one_to_one(&self) -> bool {
        let num_cols = self
            .assignments
            .iter()
            .map(|a| a.column + 1)
            .max()
            .unwrap_or(0);
        self.column_usage(num_cols).iter().all(|&n| n <= 1)
    }
}
