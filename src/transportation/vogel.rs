//! Vogel's Approximation Method.
//!
//! Repeatedly picks the open row or column with the largest penalty (gap
//! between its two cheapest open cells) and ships as much as possible
//! through that line's cheapest open cell. A row closes when its supply is
//! exhausted, a column when its demand is; both close together when one
//! shipment exhausts both.
//!
//! Tie rules:
//! - equal penalties: rows beat columns, then lower index wins
//! - equal cell costs: lower index wins

use crate::matrix::CostMatrix;

use super::rounding_tolerance;

/// Which kind of line won a VAM step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row,
    Column,
}

/// Penalty of a line: second-lowest minus lowest cost, or the single cost
/// when only one cell is open.
fn penalty(costs: impl Iterator<Item = f64>) -> f64 {
    let mut lowest = f64::INFINITY;
    let mut second = f64::INFINITY;
    let mut count = 0;
    for c in costs {
        count += 1;
        if c < lowest {
            second = lowest;
            lowest = c;
        } else if c < second {
            second = c;
        }
    }
    if count == 1 {
        lowest
    } else {
        second - lowest
    }
}

/// Returns the candidate with the strictly largest penalty, first one on ties.
fn highest_penalty(
    candidates: &[usize],
    penalty_of: impl Fn(usize) -> f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for &idx in candidates {
        let p = penalty_of(idx);
        if best.map_or(true, |(_, b)| p > b) {
            best = Some((idx, p));
        }
    }
    best
}

/// Builds a feasible shipment plan with Vogel's Approximation Method.
///
/// Returns the shipped quantity of every cell as nested rows
/// (`supply.len()` × `demand.len()`).
///
/// Inputs are not validated here: `costs` must be `supply.len()` ×
/// `demand.len()`, quantities non-negative, and the totals balanced. Use
/// [`solve_transportation`](super::solve_transportation) for checked,
/// labelled results.
///
/// # Examples
///
/// ```
/// use u_ewaste::matrix::CostMatrix;
/// use u_ewaste::transportation::vogel_approximation;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![8.0, 6.0, 10.0],
///     vec![9.0, 12.0, 13.0],
///     vec![14.0, 9.0, 16.0],
/// ]).unwrap();
/// let plan = vogel_approximation(&[300.0, 400.0, 500.0], &[400.0, 500.0, 300.0], &costs);
/// assert_eq!(plan, vec![
///     vec![0.0, 0.0, 300.0],
///     vec![400.0, 0.0, 0.0],
///     vec![0.0, 500.0, 0.0],
/// ]);
/// ```
pub fn vogel_approximation(supply: &[f64], demand: &[f64], costs: &CostMatrix) -> Vec<Vec<f64>> {
    let m = supply.len();
    let n = demand.len();
    let mut shipped = vec![vec![0.0; n]; m];
    let mut remaining_supply = supply.to_vec();
    let mut remaining_demand = demand.to_vec();
    let mut row_done = vec![false; m];
    let mut col_done = vec![false; n];
    // Remainders at or below this are summation residue, not real quantity.
    let tolerance = rounding_tolerance(supply, demand);
    let mut step = 0usize;

    loop {
        let open_rows: Vec<usize> = (0..m).filter(|&r| !row_done[r]).collect();
        let open_cols: Vec<usize> = (0..n).filter(|&c| !col_done[c]).collect();

        let row_pick = highest_penalty(&open_rows, |r| {
            penalty(open_cols.iter().map(|&c| costs.get(r, c)))
        });
        let col_pick = highest_penalty(&open_cols, |c| {
            penalty(
                costs
                    .column(c)
                    .enumerate()
                    .filter(|&(r, _)| !row_done[r])
                    .map(|(_, cost)| cost),
            )
        });
        let (Some((best_row, row_penalty)), Some((best_col, col_penalty))) = (row_pick, col_pick)
        else {
            break;
        };

        let (line, cell) = if row_penalty >= col_penalty {
            (
                Line::Row,
                costs
                    .cheapest_in_row(best_row, &open_cols)
                    .map(|c| (best_row, c)),
            )
        } else {
            (
                Line::Column,
                costs
                    .cheapest_in_column(best_col, &open_rows)
                    .map(|r| (r, best_col)),
            )
        };
        let Some((row, col)) = cell else {
            break;
        };

        let quantity = remaining_supply[row].min(remaining_demand[col]);
        shipped[row][col] += quantity;
        remaining_supply[row] -= quantity;
        remaining_demand[col] -= quantity;

        tracing::trace!(
            step,
            ?line,
            row_penalty,
            col_penalty,
            row,
            col,
            quantity,
            "vam allocation"
        );

        // A closing line's residue rides along in this cell instead of
        // being dropped.
        if remaining_supply[row] <= tolerance {
            shipped[row][col] += remaining_supply[row];
            remaining_supply[row] = 0.0;
            row_done[row] = true;
        }
        if remaining_demand[col] <= tolerance {
            shipped[row][col] += remaining_demand[col];
            remaining_demand[col] = 0.0;
            col_done[col] = true;
        }
        step += 1;
    }

    shipped
}
