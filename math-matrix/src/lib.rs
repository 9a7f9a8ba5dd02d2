//! Dense real matrices with elementary row operations and Gaussian elimination
//!
//! This crate provides a small row-major `f64` matrix type together with:
//! - Elementary row operations (swap, scale) and in-place entry updates
//! - Dimension-checked addition and multiplication
//! - Reduction to row-echelon and reduced row-echelon form with pivot tracking
//! - Consistency and independence predicates for augmented linear systems
//!
//! All arithmetic is IEEE double precision. Zero tests and equality are exact
//! unless a tolerance is requested explicitly through [`ZeroTest`] or
//! [`Matrix::approx_eq`].
//!
//! # Example
//! ```
//! use math_audio_matrix::{Matrix, is_consistent, is_independent, row_reduce};
//!
//! // 5x + 6y - 4z = -4, 4x - 3y - 5z = 22, 7x - y + 6z = 11
//! let system = Matrix::from_rows(vec![
//!     vec![5.0, 6.0, -4.0, -4.0],
//!     vec![4.0, -3.0, -5.0, 22.0],
//!     vec![7.0, -1.0, 6.0, 11.0],
//! ])
//! .unwrap();
//! assert!(is_consistent(&system));
//! assert!(is_independent(&system));
//!
//! let mut reduced = system.clone();
//! let pivots = row_reduce(&mut reduced);
//! assert_eq!(pivots.len(), 3);
//! assert!((reduced[(0, 3)] - 2.0).abs() < 1e-10);
//! ```

pub mod arithmetic;
pub mod classify;
mod display;
mod matrix;
pub mod reduce;

pub use arithmetic::{add, add_rows, multiply};
pub use classify::{SystemReport, classify, classify_with, is_consistent, is_independent, rank};
pub use display::LinearCombination;
pub use matrix::Matrix;
pub use reduce::{
    PivotPosition, PivotStrategy, ReductionConfig, ZeroTest, bubble_zeroes, reduce, reduce_with,
    row_reduce, row_reduce_with,
};

/// Error types for matrix operations
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Invalid matrix dimensions {rows}x{cols}: both must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error(
        "Matrix dimensions mismatch: {}x{} and {}x{}",
        .left.0, .left.1, .right.0, .right.1
    )]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatrixError>;
