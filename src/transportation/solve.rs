//! Checked, labelled transportation solve.

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::models::{Allocation, TransportationSolution};

use super::{is_balanced, vogel_approximation};

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<(), SolveError> {
    if expected != found {
        return Err(SolveError::ShapeMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_quantities(what: &'static str, values: &[f64]) -> Result<(), SolveError> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        Some((index, &value)) => Err(SolveError::InvalidQuantity { what, index, value }),
        None => Ok(()),
    }
}

/// Solves a balanced transportation problem with Vogel's Approximation Method.
///
/// Rows of `costs` are sources, columns are destinations. The result lists
/// every cell with a positive shipment in row-major order. It satisfies all
/// supplies and demands but is not guaranteed to be cost-minimal.
///
/// # Errors
///
/// - [`SolveError::ShapeMismatch`] if a vector or label list disagrees with
///   the matrix shape
/// - [`SolveError::InvalidQuantity`] for negative or non-finite quantities
/// - [`SolveError::NonFiniteCost`] for NaN or infinite costs
/// - [`SolveError::BalanceError`] if total supply differs from total demand
///
/// # Examples
///
/// ```
/// use u_ewaste::matrix::CostMatrix;
/// use u_ewaste::transportation::solve_transportation;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![8.0, 6.0, 10.0],
///     vec![9.0, 12.0, 13.0],
///     vec![14.0, 9.0, 16.0],
/// ]).unwrap();
/// let sol = solve_transportation(
///     &[300.0, 400.0, 500.0],
///     &[400.0, 500.0, 300.0],
///     &costs,
///     &["Plant 1", "Plant 2", "Plant 3"],
///     &["Centre A", "Centre B", "Centre C"],
/// ).unwrap();
/// assert_eq!(sol.total_quantity(), 1200.0);
/// assert_eq!(sol.total_cost(), 11100.0);
/// ```
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(sources = supply.len(), destinations = demand.len())
)]
pub fn solve_transportation<S, D>(
    supply: &[f64],
    demand: &[f64],
    costs: &CostMatrix,
    source_labels: &[S],
    destination_labels: &[D],
) -> Result<TransportationSolution, SolveError>
where
    S: AsRef<str>,
    D: AsRef<str>,
{
    check_len("supply", costs.rows(), supply.len())?;
    check_len("demand", costs.cols(), demand.len())?;
    check_len("source labels", costs.rows(), source_labels.len())?;
    check_len("destination labels", costs.cols(), destination_labels.len())?;
    check_quantities("supply", supply)?;
    check_quantities("demand", demand)?;
    costs.check_finite()?;

    let total_supply: f64 = supply.iter().sum();
    let total_demand: f64 = demand.iter().sum();
    if !is_balanced(supply, demand) {
        tracing::warn!(
            total_supply,
            total_demand,
            "transportation refused: supply and demand do not balance"
        );
        return Err(SolveError::BalanceError {
            supply: total_supply,
            demand: total_demand,
        });
    }

    let plan = vogel_approximation(supply, demand, costs);

    let mut allocations = Vec::new();
    for (source, row) in plan.iter().enumerate() {
        for (destination, &quantity) in row.iter().enumerate() {
            if quantity > 0.0 {
                allocations.push(Allocation {
                    source_label: source_labels[source].as_ref().to_string(),
                    destination_label: destination_labels[destination].as_ref().to_string(),
                    source,
                    destination,
                    quantity,
                    unit_cost: costs.get(source, destination),
                });
            }
        }
    }

    let solution = TransportationSolution::new(allocations);
    tracing::debug!(
        allocations = solution.len(),
        total_cost = solution.total_cost(),
        "transportation solved"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCES: [&str; 3] = ["Plant 1", "Plant 2", "Plant 3"];
    const DESTINATIONS: [&str; 3] = ["Centre A", "Centre B", "Centre C"];

    fn plant_costs() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![8.0, 6.0, 10.0],
            vec![9.0, 12.0, 13.0],
            vec![14.0, 9.0, 16.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_plant_example() {
        let sol = solve_transportation(
            &[300.0, 400.0, 500.0],
            &[400.0, 500.0, 300.0],
            &plant_costs(),
            &SOURCES,
            &DESTINATIONS,
        )
        .expect("balanced");

        let rows: Vec<(&str, &str, f64, f64)> = sol
            .allocations()
            .iter()
            .map(|a| {
                (
                    a.source_label.as_str(),
                    a.destination_label.as_str(),
                    a.quantity,
                    a.unit_cost,
                )
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Plant 1", "Centre C", 300.0, 10.0),
                ("Plant 2", "Centre A", 400.0, 9.0),
                ("Plant 3", "Centre B", 500.0, 9.0),
            ]
        );
        assert!((sol.total_cost() - 11100.0).abs() < 1e-9);
        assert!((sol.total_quantity() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn test_flow_conservation() {
        let supply = [300.0, 400.0, 500.0];
        let demand = [400.0, 500.0, 300.0];
        let sol = solve_transportation(&supply, &demand, &plant_costs(), &SOURCES, &DESTINATIONS)
            .expect("balanced");
        for (i, &s) in supply.iter().enumerate() {
            assert!((sol.shipped_from(i) - s).abs() < 1e-9);
        }
        for (j, &d) in demand.iter().enumerate() {
            assert!((sol.shipped_to(j) - d).abs() < 1e-9);
        }
        assert!(sol.allocations().iter().all(|a| a.quantity > 0.0));
    }

    #[test]
    fn test_balance_error() {
        let err = solve_transportation(
            &[300.0, 400.0, 500.0],
            &[400.0, 500.0, 400.0],
            &plant_costs(),
            &SOURCES,
            &DESTINATIONS,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SolveError::BalanceError {
                supply: 1200.0,
                demand: 1300.0
            }
        );
    }

    #[test]
    fn test_whole_unit_imbalance_at_scale() {
        let err = solve_transportation(
            &[1_000_000_000.0],
            &[1_000_000_001.0],
            &CostMatrix::from_rows(vec![vec![4.0]]).expect("valid"),
            &["Depot"],
            &["Smelter"],
        )
        .unwrap_err();
        assert_eq!(
            err,
            SolveError::BalanceError {
                supply: 1_000_000_000.0,
                demand: 1_000_000_001.0
            }
        );
    }

    #[test]
    fn test_tiny_quantities_all_shipped() {
        let supply = [5e-10, 5e-10];
        let costs = CostMatrix::from_rows(vec![vec![1.0], vec![2.0]]).expect("valid");
        let sol = solve_transportation(&supply, &[1e-9], &costs, &["a", "b"], &["x"])
            .expect("balanced");
        assert_eq!(sol.len(), 2);
        for (i, &s) in supply.iter().enumerate() {
            assert!((sol.shipped_from(i) - s).abs() < 1e-24);
        }
        assert!((sol.shipped_to(0) - 1e-9).abs() < 1e-24);
    }

    #[test]
    fn test_supply_length_mismatch() {
        let err = solve_transportation(
            &[300.0, 900.0],
            &[400.0, 500.0, 300.0],
            &plant_costs(),
            &SOURCES,
            &DESTINATIONS,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SolveError::ShapeMismatch {
                what: "supply",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_label_length_mismatch() {
        let err = solve_transportation(
            &[300.0, 400.0, 500.0],
            &[400.0, 500.0, 300.0],
            &plant_costs(),
            &SOURCES,
            &DESTINATIONS[..2],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SolveError::ShapeMismatch {
                what: "destination labels",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_demand_rejected() {
        let err = solve_transportation(
            &[300.0, 400.0, 500.0],
            &[1300.0, -100.0, 0.0],
            &plant_costs(),
            &SOURCES,
            &DESTINATIONS,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidQuantity {
                what: "demand",
                index: 1,
                value: -100.0
            }
        );
    }

    #[test]
    fn test_fractional_quantities() {
        let costs = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 1.0]]).expect("valid");
        let sol = solve_transportation(&[0.1, 0.2], &[0.2, 0.1], &costs, &["a", "b"], &["x", "y"])
            .expect("balanced within tolerance");
        assert!((sol.total_quantity() - 0.3).abs() < 1e-9);
        assert!((sol.shipped_from(0) - 0.1).abs() < 1e-9);
        assert!((sol.shipped_to(1) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_empty_problem() {
        let labels: [&str; 0] = [];
        let sol = solve_transportation(&[], &[], &CostMatrix::new(0, 0), &labels, &labels)
            .expect("trivially balanced");
        assert!(sol.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let run = || {
            solve_transportation(
                &[300.0, 400.0, 500.0],
                &[400.0, 500.0, 300.0],
                &plant_costs(),
                &SOURCES,
                &DESTINATIONS,
            )
        };
        assert_eq!(run(), run());
    }
}
