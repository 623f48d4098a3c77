//! Label validation and solution assembly for assignment strategies.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::models::{Assignment, AssignmentSolution};

use super::{AssignmentStrategy, GreedyRowMinimum};

/// Solves an assignment with the default [`GreedyRowMinimum`] strategy.
///
/// Fails with [`SolveError::DimensionMismatch`] when the row and column
/// label counts differ, and with [`SolveError::ShapeMismatch`] when the
/// labels do not match the matrix shape.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::solve_assignment;
/// use u_ewaste::matrix::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![45.0, 60.0, 50.0, 55.0],
///     vec![50.0, 40.0, 55.0, 45.0],
///     vec![55.0, 45.0, 40.0, 50.0],
///     vec![50.0, 55.0, 45.0, 40.0],
/// ]).unwrap();
/// let vehicles = ["Vehicle 1", "Vehicle 2", "Vehicle 3", "Vehicle 4"];
/// let zones = ["Zone A", "Zone B", "Zone C", "Zone D"];
///
/// let sol = solve_assignment(&costs, &vehicles, &zones).unwrap();
/// assert_eq!(sol.len(), 4);
/// assert_eq!(sol.assignments()[1].column_label, "Zone B");
/// assert_eq!(sol.total_cost(), 165.0);
/// ```
pub fn solve_assignment<R, C>(
    costs: &CostMatrix,
    row_labels: &[R],
    col_labels: &[C],
) -> Result<AssignmentSolution, SolveError>
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    solve_assignment_with(&GreedyRowMinimum, costs, row_labels, col_labels)
}

/// Solves an assignment with the given strategy.
///
/// Validation is identical to [`solve_assignment`]; on error nothing is
/// returned.
#[tracing::instrument(level = "debug", skip_all, fields(strategy = strategy.name()))]
pub fn solve_assignment_with<S, R, C>(
    strategy: &S,
    costs: &CostMatrix,
    row_labels: &[R],
    col_labels: &[C],
) -> Result<AssignmentSolution, SolveError>
where
    S: AssignmentStrategy + ?Sized,
    R: AsRef<str>,
    C: AsRef<str>,
{
    if row_labels.len() != col_labels.len() {
        tracing::warn!(
            rows = row_labels.len(),
            cols = col_labels.len(),
            "assignment refused: non-square problem"
        );
        return Err(SolveError::DimensionMismatch {
            rows: row_labels.len(),
            cols: col_labels.len(),
        });
    }
    if costs.rows() != row_labels.len() {
        return Err(SolveError::ShapeMismatch {
            what: "row labels",
            expected: costs.rows(),
            found: row_labels.len(),
        });
    }
    if costs.cols() != col_labels.len() {
        return Err(SolveError::ShapeMismatch {
            what: "column labels",
            expected: costs.cols(),
            found: col_labels.len(),
        });
    }

    let columns = strategy.assign(costs)?;

    let mut solution = AssignmentSolution::new(strategy.name());
    for (row, &column) in columns.iter().enumerate() {
        solution.push(Assignment {
            row_label: row_labels[row].as_ref().to_string(),
            column_label: col_labels[column].as_ref().to_string(),
            row,
            column,
            cost: costs.get(row, column),
        });
    }

    tracing::debug!(
        total_cost = solution.total_cost(),
        one_to_one = solution.is_one_to_one(),
        "assignment solved"
    );
    Ok(solution)
}
