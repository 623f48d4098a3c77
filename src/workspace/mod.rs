//! Editable problem state.
//!
//! Each workspace bundles labels, a cost matrix, any supply/demand vectors,
//! and an optional cached solution. Every edit clears the cached solution,
//! so [`solution`](AssignmentProblem::solution) only ever returns a result
//! computed from the current inputs.

mod assignment;
mod transportation;

pub use assignment::AssignmentProblem;
pub use transportation::TransportationProblem;

use crate::error::SolveError;

fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), SolveError> {
    if index >= len {
        return Err(SolveError::IndexOutOfBounds { what, index, len });
    }
    Ok(())
}
