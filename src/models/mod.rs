//! Domain model types for the e-waste logistics models.
//!
//! Provides the inputs and results of the cost formula, the per-row records
//! of an assignment, and the shipped quantities of a transportation plan.

mod assignment;
mod cost;
mod transportation;

pub use assignment::{Assignment, AssignmentSolution};
pub use cost::{CostInputs, CostRates, CostResult};
pub use transportation::{Allocation, TransportationSolution};
