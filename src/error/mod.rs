//! Error taxonomy shared by all solvers.
//!
//! Every fallible operation in this crate reports a [`SolveError`]. A failed
//! solve never returns a partial result.

use thiserror::Error;

/// Reasons a solve request is refused.
///
/// # Examples
///
/// ```
/// use u_ewaste::error::SolveError;
///
/// let err = SolveError::BalanceError { supply: 1200.0, demand: 1300.0 };
/// assert_eq!(
///     err.to_string(),
///     "total supply (1200) must equal total demand (1300)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The assignment solver needs as many row labels as column labels.
    #[error("assignment needs a square problem: {rows} rows vs {cols} columns")]
    DimensionMismatch {
        /// Number of row labels.
        rows: usize,
        /// Number of column labels.
        cols: usize,
    },

    /// Total supply differs from total demand.
    #[error("total supply ({supply}) must equal total demand ({demand})")]
    BalanceError {
        /// Sum of the supply vector.
        supply: f64,
        /// Sum of the demand vector.
        demand: f64,
    },

    /// A label list or vector does not match the matrix dimension it describes.
    #[error("{what} has length {found}, expected {expected}")]
    ShapeMismatch {
        /// Which input is wrongly sized.
        what: &'static str,
        /// Length implied by the cost matrix.
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// Nested rows of unequal length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A supply or demand entry is negative or not finite.
    #[error("{what}[{index}] = {value} is not a non-negative finite quantity")]
    InvalidQuantity {
        /// `"supply"` or `"demand"`.
        what: &'static str,
        /// Position in the vector.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// A cost cell is NaN or infinite where a finite cost is required.
    #[error("cost at ({row}, {col}) is not finite")]
    NonFiniteCost {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// An entity edit referenced a position that does not exist.
    #[error("{what} index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// Which entity list was addressed.
        what: &'static str,
        /// Requested index.
        index: usize,
        /// Current length.
        len: usize,
    },
}
