//! Collection-point-to-recycling-centre transportation workspace.

use serde::Serialize;

use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::models::TransportationSolution;
use crate::transportation::solve_transportation;

use super::check_index;

const SAMPLE_SUPPLY: [f64; 3] = [300.0, 400.0, 500.0];
const SAMPLE_DEMAND: [f64; 3] = [400.0, 500.0, 300.0];
const SAMPLE_COSTS: [[f64; 3]; 3] = [[8.0, 6.0, 10.0], [9.0, 12.0, 13.0], [14.0, 9.0, 16.0]];

/// Editable transportation problem with a cached solution.
///
/// # Examples
///
/// ```
/// use u_ewaste::workspace::TransportationProblem;
///
/// let mut problem = TransportationProblem::sample();
/// assert_eq!(problem.total_supply(), problem.total_demand());
/// problem.solve().unwrap();
///
/// problem.set_demand(2, 400.0).unwrap();
/// assert!(problem.solution().is_none());
/// assert!(problem.solve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationProblem {
    source_labels: Vec<String>,
    destination_labels: Vec<String>,
    supply: Vec<f64>,
    demand: Vec<f64>,
    costs: CostMatrix,
    solution: Option<TransportationSolution>,
}

impl TransportationProblem {
    /// Creates a problem from sources, destinations and unit costs.
    ///
    /// Sources are `(label, supply)` pairs, destinations `(label, demand)`.
    /// Fails with [`SolveError::ShapeMismatch`] if the matrix doesn't match.
    /// Balance is checked only when solving.
    pub fn new(
        sources: Vec<(String, f64)>,
        destinations: Vec<(String, f64)>,
        costs: CostMatrix,
    ) -> Result<Self, SolveError> {
        if sources.len() != costs.rows() {
            return Err(SolveError::ShapeMismatch {
                what: "sources",
                expected: costs.rows(),
                found: sources.len(),
            });
        }
        if destinations.len() != costs.cols() {
            return Err(SolveError::ShapeMismatch {
                what: "destinations",
                expected: costs.cols(),
                found: destinations.len(),
            });
        }
        let (source_labels, supply) = sources.into_iter().unzip();
        let (destination_labels, demand) = destinations.into_iter().unzip();
        Ok(Self {
            source_labels,
            destination_labels,
            supply,
            demand,
            costs,
            solution: None,
        })
    }

    /// Three collection points shipping to three recycling centres.
    pub fn sample() -> Self {
        let mut costs = CostMatrix::new(3, 3);
        for (r, row) in SAMPLE_COSTS.iter().enumerate() {
            for (c, &cost) in row.iter().enumerate() {
                costs.set(r, c, cost);
            }
        }
        Self {
            source_labels: (1..=3).map(|i| format!("Collection Point {i}")).collect(),
            destination_labels: ["A", "B", "C"]
                .iter()
                .map(|d| format!("Recycling Centre {d}"))
                .collect(),
            supply: SAMPLE_SUPPLY.to_vec(),
            demand: SAMPLE_DEMAND.to_vec(),
            costs,
            solution: None,
        }
    }

    /// Source labels.
    pub fn source_labels(&self) -> &[String] {
        &self.source_labels
    }

    /// Destination labels.
    pub fn destination_labels(&self) -> &[String] {
        &self.destination_labels
    }

    /// Supply per source.
    pub fn supply(&self) -> &[f64] {
        &self.supply
    }

    /// Demand per destination.
    pub fn demand(&self) -> &[f64] {
        &self.demand
    }

    /// Unit shipping costs.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Sum of all supplies.
    pub fn total_supply(&self) -> f64 {
        self.supply.iter().sum()
    }

    /// Sum of all demands.
    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// The solution of the current inputs, if solved since the last edit.
    pub fn solution(&self) -> Option<&TransportationSolution> {
        self.solution.as_ref()
    }

    /// Sets one unit cost.
    pub fn set_cost(
        &mut self,
        source: usize,
        destination: usize,
        cost: f64,
    ) -> Result<(), SolveError> {
        check_index("source", source, self.costs.rows())?;
        check_index("destination", destination, self.costs.cols())?;
        self.costs.set(source, destination, cost);
        self.invalidate();
        Ok(())
    }

    /// Sets the supply of one source.
    pub fn set_supply(&mut self, source: usize, quantity: f64) -> Result<(), SolveError> {
        check_index("source", source, self.supply.len())?;
        self.supply[source] = quantity;
        self.invalidate();
        Ok(())
    }

    /// Sets the demand of one destination.
    pub fn set_demand(&mut self, destination: usize, quantity: f64) -> Result<(), SolveError> {
        check_index("destination", destination, self.demand.len())?;
        self.demand[destination] = quantity;
        self.invalidate();
        Ok(())
    }

    /// Appends a source with zero unit costs.
    pub fn add_source(&mut self, label: impl Into<String>, supply: f64) {
        self.source_labels.push(label.into());
        self.supply.push(supply);
        self.costs.push_row();
        self.invalidate();
    }

    /// Removes a source.
    pub fn remove_source(&mut self, source: usize) -> Result<(), SolveError> {
        check_index("source", source, self.supply.len())?;
        self.source_labels.remove(source);
        self.supply.remove(source);
        self.costs.remove_row(source);
        self.invalidate();
        Ok(())
    }

    /// Renames a source.
    pub fn rename_source(
        &mut self,
        source: usize,
        label: impl Into<String>,
    ) -> Result<(), SolveError> {
        check_index("source", source, self.source_labels.len())?;
        self.source_labels[source] = label.into();
        self.invalidate();
        Ok(())
    }

    /// Appends a destination with zero unit costs.
    pub fn add_destination(&mut self, label: impl Into<String>, demand: f64) {
        self.destination_labels.push(label.into());
        self.demand.push(demand);
        self.costs.push_column();
        self.invalidate();
    }

    /// Removes a destination.
    pub fn remove_destination(&mut self, destination: usize) -> Result<(), SolveError> {
        check_index("destination", destination, self.demand.len())?;
        self.destination_labels.remove(destination);
        self.demand.remove(destination);
        self.costs.remove_column(destination);
        self.invalidate();
        Ok(())
    }

    /// Renames a destination.
    pub fn rename_destination(
        &mut self,
        destination: usize,
        label: impl Into<String>,
    ) -> Result<(), SolveError> {
        check_index("destination", destination, self.destination_labels.len())?;
        self.destination_labels[destination] = label.into();
        self.invalidate();
        Ok(())
    }

    /// Solves with Vogel's Approximation Method and caches the result.
    ///
    /// On error the workspace is left unchanged.
    pub fn solve(&mut self) -> Result<&TransportationSolution, SolveError> {
        let solution = solve_transportation(
            &self.supply,
            &self.demand,
            &self.costs,
            &self.source_labels,
            &self.destination_labels,
        )?;
        Ok(self.solution.insert(solution))
    }

    /// Drops the cached solution.
    pub fn invalidate(&mut self) {
        self.solution = None;
    }
}
