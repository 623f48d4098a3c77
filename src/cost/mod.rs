//! E-waste cost formula.
//!
//! - [`CostModel`] — evaluates the cost breakdown for one set of inputs
//! - [`evaluate_cost`] — shorthand using the default unit rates

mod model;

pub use model::{evaluate_cost, CostModel};
