//! Dense rectangular cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// A dense rows×cols cost matrix stored in row-major order.
///
/// Rows are supply-side entities (vehicles, plants) and columns are
/// demand-side entities (zones, recycling centres).
///
/// # Examples
///
/// ```
/// use u_ewaste::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![8.0, 6.0, 10.0],
///     vec![9.0, 12.0, 13.0],
/// ]).unwrap();
/// assert_eq!(m.rows(), 2);
/// assert_eq!(m.cols(), 3);
/// assert_eq!(m.get(1, 2), 13.0);
/// assert_eq!(m.cheapest_in_row(0, &[0, 1, 2]), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given shape, initialized to zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from nested rows.
    ///
    /// Returns [`SolveError::RaggedMatrix`] if any row differs in length
    /// from the first one.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(SolveError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a matrix from an explicit row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `rows * cols`.
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { data, rows, cols })
    }

    /// Returns the cost of cell (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// Sets the cost of cell (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cost: f64) {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col] = cost;
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if rows == cols.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the cells of one row.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns the cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.rows).map(move |r| self.get(r, col))
    }

    /// Returns the first NaN or infinite cell as [`SolveError::NonFiniteCost`].
    pub fn check_finite(&self) -> Result<(), SolveError> {
        match self.data.iter().position(|c| !c.is_finite()) {
            Some(idx) => Err(SolveError::NonFiniteCost {
                row: idx / self.cols,
                col: idx % self.cols,
            }),
            None => Ok(()),
        }
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Appends a row of zeros.
    pub fn push_row(&mut self) {
        self.data.extend(std::iter::repeat(0.0).take(self.cols));
        self.rows += 1;
    }

    /// Removes a row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn remove_row(&mut self, row: usize) {
        assert!(row < self.rows, "row {row} out of bounds");
        let start = row * self.cols;
        self.data.drain(start..start + self.cols);
        self.rows -= 1;
    }

    /// Appends a column of zeros.
    pub fn push_column(&mut self) {
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for r in 0..self.rows {
            data.extend_from_slice(self.row(r));
            data.push(0.0);
        }
        self.data = data;
        self.cols = new_cols;
    }

    /// Removes a column.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn remove_column(&mut self, col: usize) {
        assert!(col < self.cols, "column {col} out of bounds");
        let cols = self.cols;
        let mut idx = 0;
        self.data.retain(|_| {
            let keep = idx % cols != col;
            idx += 1;
            keep
        });
        self.cols -= 1;
    }

    /// Returns the cheapest column of `row` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn cheapest_in_row(&self, row: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let cost = self.get(row, c);
            if best.map_or(true, |(_, b)| cost < b) {
                best = Some((c, cost));
            }
        }
        best.map(|(c, _)| c)
    }

    /// Returns the cheapest row of `col` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn cheapest_in_column(&self, col: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &r in candidates {
            let cost = self.get(r, col);
            if best.map_or(true, |(_, b)| cost < b) {
                best = Some((r, cost));
            }
        }
        best.map(|(r, _)| r)
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = SolveError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(m: CostMatrix) -> Self {
        m.to_rows()
    }
}
