//! Dense row-major matrix storage and elementary row operations

use crate::{MatrixError, Result};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::{Index, IndexMut};
use std::path::Path;

/// A dense `rows x cols` matrix of `f64`, stored as one buffer per row
///
/// Dimensions are fixed at construction. Row swaps and row replacements move
/// whole row buffers, so slices obtained from [`Matrix::row`] must not be kept
/// across such calls.
///
/// Equality (`==` and [`Matrix::equals`]) is exact: same shape and every entry
/// equal under IEEE comparison, with no tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Create a `rows x cols` matrix of zeros
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        })
    }

    /// Create a matrix from row literals
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(data: Vec<Vec<f64>>) -> Result<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension { rows, cols });
        }
        if let Some(ragged) = data.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::InvalidDimension {
                rows,
                cols: ragged.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Load a matrix stored as a JSON array of rows
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Copy an ndarray matrix
    pub fn from_array2(array: &Array2<f64>) -> Result<Self> {
        Self::from_rows(array.outer_iter().map(|row| row.to_vec()).collect())
    }

    /// Copy into an ndarray matrix
    pub fn to_array2(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.rows, self.cols), |(i, j)| self.data[i][j])
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions as `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at `(row, col)`. Panics when out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    /// Borrow a row
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row]
    }

    /// Borrow all rows
    pub fn as_rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Replace the contents with `values`
    ///
    /// When `values` does not have exactly `rows` rows of `cols` entries the
    /// call is ignored and the matrix is left as it was.
    pub fn fill(&mut self, values: Vec<Vec<f64>>) {
        if values.len() != self.rows || values.iter().any(|row| row.len() != self.cols) {
            log::warn!(
                "Ignoring fill of a {}x{} matrix with {} rows of mismatched shape",
                self.rows,
                self.cols,
                values.len()
            );
            return;
        }
        self.data = values;
    }

    /// Write a single entry. Panics when out of range.
    pub fn update(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    /// Exchange two rows by moving their buffers
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        self.data.swap(r1, r2);
    }

    /// Return row `row` multiplied by `c` without modifying the matrix
    pub fn scale_row(&self, row: usize, c: f64) -> Vec<f64> {
        self.data[row].iter().map(|&x| c * x).collect()
    }

    /// Move `values` into row `row`, returning the previous buffer
    ///
    /// Panics if `values` does not have `cols` entries.
    pub fn replace_row(&mut self, row: usize, values: Vec<f64>) -> Vec<f64> {
        assert_eq!(
            values.len(),
            self.cols,
            "replacement row has {} entries, matrix has {} columns",
            values.len(),
            self.cols
        );
        std::mem::replace(&mut self.data[row], values)
    }

    /// Exact equality: same shape and every entry equal
    pub fn equals(&self, other: &Matrix) -> bool {
        self == other
    }

    /// Same shape and every pair of entries within `epsilon` of each other
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .flatten()
                .zip(other.data.iter().flatten())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Round every entry to `n` decimal places, halves rounding up
    pub fn round(&mut self, n: i32) {
        let factor = 10f64.powi(n);
        for value in self.data.iter_mut().flatten() {
            *value = (*value * factor + 0.5).floor() / factor;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row][col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(data: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(data)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.data
    }
}
