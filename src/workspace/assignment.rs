//! Vehicle-to-zone assignment workspace.

use serde::Serialize;

use crate::assignment::{solve_assignment_with, AssignmentStrategy};
use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::models::AssignmentSolution;

use super::check_index;

const SAMPLE_COSTS: [[f64; 4]; 4] = [
    [45.0, 60.0, 50.0, 55.0],
    [50.0, 40.0, 55.0, 45.0],
    [55.0, 45.0, 40.0, 50.0],
    [50.0, 55.0, 45.0, 40.0],
];

/// Editable assignment problem with a cached solution.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::GreedyRowMinimum;
/// use u_ewaste::workspace::AssignmentProblem;
///
/// let mut problem = AssignmentProblem::sample();
/// problem.solve(&GreedyRowMinimum).unwrap();
/// assert!(problem.solution().is_some());
///
/// problem.set_cost(0, 0, 99.0).unwrap();
/// assert!(problem.solution().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentProblem {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    costs: CostMatrix,
    solution: Option<AssignmentSolution>,
}

impl AssignmentProblem {
    /// Creates a problem from labels and a matrix.
    ///
    /// Fails with [`SolveError::ShapeMismatch`] if the labels don't match the
    /// matrix. Row and column counts may differ here; solving will refuse.
    pub fn new(
        row_labels: Vec<String>,
        column_labels: Vec<String>,
        costs: CostMatrix,
    ) -> Result<Self, SolveError> {
        if row_labels.len() != costs.rows() {
            return Err(SolveError::ShapeMismatch {
                what: "row labels",
                expected: costs.rows(),
                found: row_labels.len(),
            });
        }
        if column_labels.len() != costs.cols() {
            return Err(SolveError::ShapeMismatch {
                what: "column labels",
                expected: costs.cols(),
                found: column_labels.len(),
            });
        }
        Ok(Self {
            row_labels,
            column_labels,
            costs,
            solution: None,
        })
    }

    /// Four collection vehicles and four pickup zones.
    pub fn sample() -> Self {
        let mut costs = CostMatrix::new(4, 4);
        for (r, row) in SAMPLE_COSTS.iter().enumerate() {
            for (c, &cost) in row.iter().enumerate() {
                costs.set(r, c, cost);
            }
        }
        Self {
            row_labels: (1..=4).map(|i| format!("Vehicle {i}")).collect(),
            column_labels: ["A", "B", "C", "D"]
                .iter()
                .map(|z| format!("Zone {z}"))
                .collect(),
            costs,
            solution: None,
        }
    }

    /// Row (vehicle) labels.
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column (zone) labels.
    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// The cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// The solution of the current inputs, if solved since the last edit.
    pub fn solution(&self) -> Option<&AssignmentSolution> {
        self.solution.as_ref()
    }

    /// Sets one cell.
    pub fn set_cost(&mut self, row: usize, col: usize, cost: f64) -> Result<(), SolveError> {
        check_index("row", row, self.costs.rows())?;
        check_index("column", col, self.costs.cols())?;
        self.costs.set(row, col, cost);
        self.invalidate();
        Ok(())
    }

    /// Appends a row entity with zero costs.
    pub fn add_row(&mut self, label: impl Into<String>) {
        self.row_labels.push(label.into());
        self.costs.push_row();
        self.invalidate();
    }

    /// Removes a row entity.
    pub fn remove_row(&mut self, row: usize) -> Result<(), SolveError> {
        check_index("row", row, self.costs.rows())?;
        self.row_labels.remove(row);
        self.costs.remove_row(row);
        self.invalidate();
        Ok(())
    }

    /// Renames a row entity.
    pub fn rename_row(&mut self, row: usize, label: impl Into<String>) -> Result<(), SolveError> {
        check_index("row", row, self.row_labels.len())?;
        self.row_labels[row] = label.into();
        self.invalidate();
        Ok(())
    }

    /// Appends a column entity with zero costs.
    pub fn add_column(&mut self, label: impl Into<String>) {
        self.column_labels.push(label.into());
        self.costs.push_column();
        self.invalidate();
    }

    /// Removes a column entity.
    pub fn remove_column(&mut self, col: usize) -> Result<(), SolveError> {
        check_index("column", col, self.costs.cols())?;
        self.column_labels.remove(col);
        self.costs.remove_column(col);
        self.invalidate();
        Ok(())
    }

    /// Renames a column entity.
    pub fn rename_column(
        &mut self,
        col: usize,
        label: impl Into<String>,
    ) -> Result<(), SolveError> {
        check_index("column", col, self.column_labels.len())?;
        self.column_labels[col] = label.into();
        self.invalidate();
        Ok(())
    }

    /// Solves with `strategy` and caches the result.
    ///
    /// On error the workspace is left unchanged.
    pub fn solve<S>(&mut self, strategy: &S) -> Result<&AssignmentSolution, SolveError>
    where
        S: AssignmentStrategy + ?Sized,
    {
        let solution =
            solve_assignment_with(strategy, &self.costs, &self.row_labels, &self.column_labels)?;
        Ok(self.solution.insert(solution))
    }

    /// Drops the cached solution.
    pub fn invalidate(&mut self) {
        self.solution = None;
    }
}
