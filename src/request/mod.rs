//! Self-contained solve requests for the binding layers.
//!
//! The browser and C bindings receive one JSON object per call. These types
//! describe those objects and dispatch to the solvers.

use serde::{Deserialize, Serialize};

use crate::assignment::{solve_assignment_with, AssignmentMode};
use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::models::{AssignmentSolution, TransportationSolution};
use crate::transportation::solve_transportation;

/// Everything needed for one assignment solve.
///
/// # Examples
///
/// ```
/// use u_ewaste::request::AssignmentRequest;
///
/// let req: AssignmentRequest = serde_json::from_str(r#"{
///     "costs": [[1, 2], [1, 5]],
///     "rowLabels": ["V1", "V2"],
///     "columnLabels": ["Z1", "Z2"],
///     "mode": "hungarian"
/// }"#).unwrap();
/// assert_eq!(req.solve().unwrap().total_cost(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    /// Row-by-column cost table.
    pub costs: CostMatrix,
    /// One label per row.
    pub row_labels: Vec<String>,
    /// One label per column.
    pub column_labels: Vec<String>,
    /// Strategy; greedy when omitted.
    #[serde(default)]
    pub mode: AssignmentMode,
}

impl AssignmentRequest {
    /// Runs the requested strategy.
    pub fn solve(&self) -> Result<AssignmentSolution, SolveError> {
        let strategy = self.mode.strategy();
        solve_assignment_with(
            strategy.as_ref(),
            &self.costs,
            &self.row_labels,
            &self.column_labels,
        )
    }
}

/// Everything needed for one transportation solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationRequest {
    /// Supply per source.
    pub supply: Vec<f64>,
    /// Demand per destination.
    pub demand: Vec<f64>,
    /// Source-by-destination unit costs.
    pub costs: CostMatrix,
    /// One label per source.
    pub source_labels: Vec<String>,
    /// One label per destination.
    pub destination_labels: Vec<String>,
}

impl TransportationRequest {
    /// Runs Vogel's Approximation Method.
    pub fn solve(&self) -> Result<TransportationSolution, SolveError> {
        solve_transportation(
            &self.supply,
            &self.demand,
            &self.costs,
            &self.source_labels,
            &self.destination_labels,
        )
    }
}

/// Outcome envelope returned across the binding boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Response<T> {
    /// Successful result.
    Ok(T),
    /// Human-readable failure.
    Error(String),
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for Response<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(err) => Response::Error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transportation_json(demand: &str) -> String {
        format!(
            r#"{{
                "supply": [300, 400, 500],
                "demand": {demand},
                "costs": [[8, 6, 10], [9, 12, 13], [14, 9, 16]],
                "sourceLabels": ["P1", "P2", "P3"],
                "destinationLabels": ["A", "B", "C"]
            }}"#
        )
    }

    #[test]
    fn test_assignment_default_mode() {
        let req: AssignmentRequest = serde_json::from_str(
            r#"{"costs": [[1, 2], [1, 5]], "rowLabels": ["V1", "V2"], "columnLabels": ["Z1", "Z2"]}"#,
        )
        .expect("valid");
        assert_eq!(req.mode, AssignmentMode::GreedyRowMinimum);
        let sol = req.solve().expect("square");
        assert!((sol.total_cost() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_assignment_dimension_mismatch() {
        let req = AssignmentRequest {
            costs: CostMatrix::new(2, 3),
            row_labels: vec!["V1".into(), "V2".into()],
            column_labels: vec!["A".into(), "B".into(), "C".into()],
            mode: AssignmentMode::GreedyRowMinimum,
        };
        assert_eq!(
            req.solve().unwrap_err(),
            SolveError::DimensionMismatch { rows: 2, cols: 3 }
        );
    }

    #[test]
    fn test_transportation_request() {
        let req: TransportationRequest =
            serde_json::from_str(&transportation_json("[400, 500, 300]")).expect("valid");
        let sol = req.solve().expect("balanced");
        assert!((sol.total_cost() - 11100.0).abs() < 1e-9);
    }

    #[test]
    fn test_response_envelope() {
        let req: TransportationRequest =
            serde_json::from_str(&transportation_json("[400, 500, 400]")).expect("valid");
        let resp: Response<TransportationSolution> = req.solve().into();
        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(
            json["error"],
            "total supply (1200) must equal total demand (1300)"
        );

        let ok: Response<u8> = Ok::<u8, SolveError>(7).into();
        assert_eq!(serde_json::to_string(&ok).expect("serializable"), r#"{"ok":7}"#);
    }

    #[test]
    fn test_ragged_costs_rejected_on_parse() {
        let err = serde_json::from_str::<TransportationRequest>(
            r#"{"supply": [1], "demand": [1], "costs": [[1], [2, 3]],
                "sourceLabels": ["a"], "destinationLabels": ["b"]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("row 1 has 2 cells"));
    }
}
