//! Hungarian (Kuhn-Munkres) assignment.
//!
//! Shortest augmenting path formulation with row/column potentials. Each
//! phase adds one row to the matching and repairs the potentials so that
//! reduced costs stay non-negative.
//!
//! # Complexity
//!
//! O(n³) for an n×n matrix.
//!
//! # Reference
//!
//! Kuhn, H. W. (1955). "The Hungarian method for the assignment problem",
//! *Naval Research Logistics Quarterly* 2(1-2), 83-97.

use crate::error::SolveError;
use crate::matrix::CostMatrix;

use super::AssignmentStrategy;

/// Minimum-cost one-to-one assignment for square matrices.
///
/// # Examples
///
/// ```
/// use u_ewaste::assignment::{AssignmentStrategy, Hungarian};
/// use u_ewaste::matrix::CostMatrix;
///
/// let costs = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0, 5.0]]).unwrap();
/// assert_eq!(Hungarian.assign(&costs).unwrap(), vec![1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hungarian;

impl AssignmentStrategy for Hungarian {
    fn name(&self) -> &'static str {
        "hungarian"
    }

    fn assign(&self, costs: &CostMatrix) -> Result<Vec<usize>, SolveError> {
        let n = costs.rows();
        if !costs.is_square() {
            return Err(SolveError::DimensionMismatch {
                rows: n,
                cols: costs.cols(),
            });
        }
        costs.check_finite()?;
        if n == 0 {
            return Ok(Vec::new());
        }

        // 1-based with a virtual column 0; p[j] = row matched to column j.
        let mut u = vec![0.0; n + 1];
        let mut v = vec![0.0; n + 1];
        let mut p = vec![0usize; n + 1];
        let mut way = vec![0usize; n + 1];

        for i in 1..=n {
            p[0] = i;
            let mut j0 = 0;
            let mut minv = vec![f64::INFINITY; n + 1];
            let mut used = vec![false; n + 1];

            loop {
                used[j0] = true;
                let i0 = p[j0];
                let mut delta = f64::INFINITY;
                let mut j1 = 0;

                for j in 1..=n {
                    if used[j] {
                        continue;
                    }
                    let reduced = costs.get(i0 - 1, j - 1) - u[i0] - v[j];
                    if reduced < minv[j] {
                        minv[j] = reduced;
                        way[j] = j0;
                    }
                    if minv[j] < delta {
                        delta = minv[j];
                        j1 = j;
                    }
                }

                for j in 0..=n {
                    if used[j] {
                        u[p[j]] += delta;
                        v[j] -= delta;
                    } else {
                        minv[j] -= delta;
                    }
                }

                j0 = j1;
                if p[j0] == 0 {
                    break;
                }
            }

            // Flip the augmenting path.
            loop {
                let j1 = way[j0];
                p[j0] = p[j1];
                j0 = j1;
                if j0 == 0 {
                    break;
                }
            }
        }

        let mut columns = vec![0; n];
        for j in 1..=n {
            columns[p[j] - 1] = j - 1;
        }
        tracing::trace!(?columns, "hungarian matching complete");
        Ok(columns)
    }
}
