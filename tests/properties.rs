//! Property tests for the solvers.

use proptest::prelude::*;

use u_ewaste::assignment::{
    solve_assignment, solve_assignment_with, AssignmentStrategy, GreedyRowMinimum, Hungarian,
};
use u_ewaste::cost::evaluate_cost;
use u_ewaste::error::SolveError;
use u_ewaste::matrix::CostMatrix;
use u_ewaste::models::CostInputs;
use u_ewaste::transportation::solve_transportation;

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

/// Integer-valued cost matrix with the given shape.
fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = CostMatrix> {
    prop::collection::vec(0u32..100, rows * cols).prop_map(move |cells| {
        let data = cells.into_iter().map(f64::from).collect();
        CostMatrix::from_data(rows, cols, data).expect("length matches shape")
    })
}

/// Balanced transportation instance with integer quantities.
///
/// Supplies and demands are the row and column sums of a random shipment
/// grid, so the totals always agree.
fn balanced_instance() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, CostMatrix)> {
    (1usize..6, 1usize..6).prop_flat_map(|(m, n)| {
        (prop::collection::vec(0u32..200, m * n), matrix(m, n)).prop_map(move |(grid, costs)| {
            let supply: Vec<f64> = (0..m)
                .map(|r| f64::from(grid[r * n..(r + 1) * n].iter().sum::<u32>()))
                .collect();
            let demand: Vec<f64> = (0..n)
                .map(|c| f64::from((0..m).map(|r| grid[r * n + c]).sum::<u32>()))
                .collect();
            (supply, demand, costs)
        })
    })
}

/// `scaled` equals `base * k` up to float rounding.
fn scales_by(base: f64, scaled: f64, k: f64) -> bool {
    let expected = base * k;
    (scaled - expected).abs() <= 1e-9 * (1.0 + expected.abs())
}

proptest! {
    #[test]
    fn cost_net_identity(v in 0.0..1e5f64, d in 0.0..1e3f64, p in 0.0..=1.0f64, w in 0.0..1e5f64) {
        let r = evaluate_cost(&CostInputs::new(v, d, p, w));
        let sum = r.collection_cost + r.transportation_cost + r.processing_cost + r.disposal_cost;
        prop_assert!((r.total_cost - sum).abs() < 1e-6);
        prop_assert!((r.net_cost - (r.total_cost - r.recovery_value)).abs() < 1e-6);
    }

    #[test]
    fn cost_linear_in_disposal(v in 0.0..1e4f64, w in 0.0..1e4f64, k in 0.0..10.0f64) {
        let base = evaluate_cost(&CostInputs::new(v, 10.0, 0.5, w));
        let scaled = evaluate_cost(&CostInputs::new(v, 10.0, 0.5, w * k));
        prop_assert!(scales_by(base.disposal_cost, scaled.disposal_cost, k));
        prop_assert_eq!(scaled.collection_cost, base.collection_cost);
        prop_assert_eq!(scaled.transportation_cost, base.transportation_cost);
        prop_assert_eq!(scaled.processing_cost, base.processing_cost);
        prop_assert_eq!(scaled.recovery_value, base.recovery_value);
    }

    #[test]
    fn cost_linear_in_collection_volume(
        v in 0.0..1e4f64, d in 0.0..1e3f64, p in 0.0..=1.0f64, w in 0.0..1e4f64, k in 0.0..10.0f64
    ) {
        let base = evaluate_cost(&CostInputs::new(v, d, p, w));
        let scaled = evaluate_cost(&CostInputs::new(v * k, d, p, w));
        prop_assert!(scales_by(base.collection_cost, scaled.collection_cost, k));
        prop_assert!(scales_by(base.transportation_cost, scaled.transportation_cost, k));
        prop_assert!(scales_by(base.processing_cost, scaled.processing_cost, k));
        prop_assert!(scales_by(base.recovery_value, scaled.recovery_value, k));
        prop_assert_eq!(scaled.disposal_cost, base.disposal_cost);
    }

    #[test]
    fn cost_linear_in_distance(
        v in 0.0..1e4f64, d in 0.0..1e3f64, p in 0.0..=1.0f64, w in 0.0..1e4f64, k in 0.0..10.0f64
    ) {
        let base = evaluate_cost(&CostInputs::new(v, d, p, w));
        let scaled = evaluate_cost(&CostInputs::new(v, d * k, p, w));
        prop_assert!(scales_by(base.transportation_cost, scaled.transportation_cost, k));
        prop_assert_eq!(scaled.collection_cost, base.collection_cost);
        prop_assert_eq!(scaled.processing_cost, base.processing_cost);
        prop_assert_eq!(scaled.disposal_cost, base.disposal_cost);
        prop_assert_eq!(scaled.recovery_value, base.recovery_value);
    }

    #[test]
    fn cost_linear_in_processing_rate(
        v in 0.0..1e4f64, d in 0.0..1e3f64, p in 0.0..=1.0f64, w in 0.0..1e4f64, k in 0.0..10.0f64
    ) {
        let base = evaluate_cost(&CostInputs::new(v, d, p, w));
        let scaled = evaluate_cost(&CostInputs::new(v, d, p * k, w));
        prop_assert!(scales_by(base.processing_cost, scaled.processing_cost, k));
        prop_assert!(scales_by(base.recovery_value, scaled.recovery_value, k));
        prop_assert_eq!(scaled.collection_cost, base.collection_cost);
        prop_assert_eq!(scaled.transportation_cost, base.transportation_cost);
        prop_assert_eq!(scaled.disposal_cost, base.disposal_cost);
    }

    #[test]
    fn greedy_takes_row_minimum(costs in (1usize..7).prop_flat_map(|n| matrix(n, n))) {
        let n = costs.rows();
        let sol = solve_assignment(&costs, &labels("V", n), &labels("Z", n)).expect("square");
        prop_assert_eq!(sol.len(), n);
        for a in sol.assignments() {
            let row_min = costs.row(a.row).iter().cloned().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(a.cost, row_min);
            prop_assert!(costs.row(a.row)[..a.column].iter().all(|&c| c > row_min));
        }
    }

    #[test]
    fn hungarian_is_permutation_and_no_worse_than_greedy_bound(
        costs in (1usize..7).prop_flat_map(|n| matrix(n, n))
    ) {
        let n = costs.rows();
        let exact = solve_assignment_with(&Hungarian, &costs, &labels("V", n), &labels("Z", n))
            .expect("square");
        let greedy = solve_assignment(&costs, &labels("V", n), &labels("Z", n)).expect("square");
        prop_assert!(exact.is_one_to_one());
        // Greedy ignores column conflicts, so its total is a lower bound.
        prop_assert!(greedy.total_cost() <= exact.total_cost() + 1e-9);
        if greedy.is_one_to_one() {
            prop_assert!((greedy.total_cost() - exact.total_cost()).abs() < 1e-9);
        }
    }

    #[test]
    fn hungarian_beats_identity(costs in (1usize..7).prop_flat_map(|n| matrix(n, n))) {
        let cols = Hungarian.assign(&costs).expect("square");
        let exact: f64 = cols.iter().enumerate().map(|(r, &c)| costs.get(r, c)).sum();
        let identity: f64 = (0..costs.rows()).map(|i| costs.get(i, i)).sum();
        prop_assert!(exact <= identity + 1e-9);
    }

    #[test]
    fn non_square_refused(rows in 1usize..6, cols in 1usize..6) {
        prop_assume!(rows != cols);
        let costs = CostMatrix::new(rows, cols);
        let err = solve_assignment(&costs, &labels("V", rows), &labels("Z", cols)).unwrap_err();
        prop_assert_eq!(err, SolveError::DimensionMismatch { rows, cols });
    }

    #[test]
    fn vam_conserves_flow(instance in balanced_instance()) {
        let (supply, demand, costs) = instance;
        let sol = solve_transportation(
            &supply,
            &demand,
            &costs,
            &labels("S", supply.len()),
            &labels("D", demand.len()),
        )
        .expect("balanced");
        for (i, &s) in supply.iter().enumerate() {
            prop_assert!((sol.shipped_from(i) - s).abs() < 1e-9);
        }
        for (j, &d) in demand.iter().enumerate() {
            prop_assert!((sol.shipped_to(j) - d).abs() < 1e-9);
        }
        let cost: f64 = sol.allocations().iter().map(|a| a.quantity * a.unit_cost).sum();
        prop_assert!((sol.total_cost() - cost).abs() < 1e-6);
        for a in sol.allocations() {
            prop_assert!(a.quantity > 0.0);
            prop_assert_eq!(a.unit_cost, costs.get(a.source, a.destination));
        }
    }

    #[test]
    fn vam_is_idempotent(instance in balanced_instance()) {
        let (supply, demand, costs) = instance;
        let run = || solve_transportation(
            &supply,
            &demand,
            &costs,
            &labels("S", supply.len()),
            &labels("D", demand.len()),
        );
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn unbalanced_refused(instance in balanced_instance(), extra in 1u32..100) {
        let (supply, mut demand, costs) = instance;
        demand[0] += f64::from(extra);
        let err = solve_transportation(
            &supply,
            &demand,
            &costs,
            &labels("S", supply.len()),
            &labels("D", demand.len()),
        )
        .unwrap_err();
        prop_assert!(
            matches!(err, SolveError::BalanceError { .. }),
            "unexpected error: {}",
            err
        );
    }
}

#[test]
fn strategies_share_one_interface() {
    let strategies: Vec<Box<dyn AssignmentStrategy>> =
        vec![Box::new(GreedyRowMinimum), Box::new(Hungarian)];
    let costs = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0, 5.0]]).expect("valid");
    let totals: Vec<f64> = strategies
        .iter()
        .map(|s| {
            solve_assignment_with(s.as_ref(), &costs, &["a", "b"], &["x", "y"])
                .expect("square")
                .total_cost()
        })
        .collect();
    assert_eq!(totals, vec![2.0, 3.0]);
}
