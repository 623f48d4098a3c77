//! Transportation allocations and solutions.

use serde::{Deserialize, Serialize};

/// A positive quantity shipped from one source to one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    /// Label of the source (e.g. a collection point).
    pub source_label: String,
    /// Label of the destination (e.g. a recycling centre).
    pub destination_label: String,
    /// Source row in the cost matrix.
    pub source: usize,
    /// Destination column in the cost matrix.
    pub destination: usize,
    /// Shipped quantity, always > 0.
    pub quantity: f64,
    /// Cost per shipped unit.
    pub unit_cost: f64,
}

impl Allocation {
    /// `quantity * unit_cost`.
    pub fn cost(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

/// A feasible transportation plan.
///
/// Holds every cell with a positive allocation, in row-major order. Per
/// source the quantities sum to its supply; per destination they sum to
/// its demand. The plan is feasible, not certified cost-minimal.
///
/// # Examples
///
/// ```
/// use u_ewaste::models::{Allocation, TransportationSolution};
///
/// let sol = TransportationSolution::new(vec![Allocation {
///     source_label: "Plant 1".into(),
///     destination_label: "Centre A".into(),
///     source: 0,
///     destination: 0,
///     quantity: 300.0,
///     unit_cost: 10.0,
/// }]);
/// assert_eq!(sol.total_quantity(), 300.0);
/// assert_eq!(sol.total_cost(), 3000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationSolution {
    allocations: Vec<Allocation>,
    total_cost: f64,
}

impl TransportationSolution {
    /// Creates a solution from its allocations.
    pub fn new(allocations: Vec<Allocation>) -> Self {
        let total_cost = allocations.iter().map(Allocation::cost).sum();
        Self {
            allocations,
            total_cost,
        }
    }

    /// The positive allocations, row-major.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Number of positive allocations.
    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Returns `true` if nothing is shipped.
    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    /// Sum of `quantity * unit_cost` over all allocations.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Total shipped quantity.
    pub fn total_quantity(&self) -> f64 {
        self.allocations.iter().map(|a| a.quantity).sum()
    }

    /// Quantity shipped out of `source`.
    pub fn shipped_from(&self, source: usize) -> f64 {
        self.allocations
            .iter()
            .filter(|a| a.source == source)
            .map(|a| a.quantity)
            .sum()
    }

    /// Quantity delivered to `destination`.
    pub fn shipped_to(&self, destination: usize) -> f64 {
        self.allocations
            .iter()
            .filter(|a| a.destination == destination)
            .map(|a| a.quantity)
            .sum()
    }
}
