//! Dimension-checked matrix addition and multiplication
//!
//! Both operations allocate a new [`Matrix`] and leave their operands untouched.

use crate::{Matrix, MatrixError, Result};

/// Elementwise sum of two matrices of identical shape
pub fn add(m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
    if m1.shape() != m2.shape() {
        return Err(MatrixError::DimensionMismatch {
            left: m1.shape(),
            right: m2.shape(),
        });
    }

    let mut sum = Matrix::new(m1.rows(), m1.cols())?;
    for i in 0..m1.rows() {
        for j in 0..m1.cols() {
            sum[(i, j)] = m1[(i, j)] + m2[(i, j)];
        }
    }
    Ok(sum)
}

/// Elementwise sum of two rows of equal length
pub fn add_rows(r1: &[f64], r2: &[f64]) -> Result<Vec<f64>> {
    if r1.len() != r2.len() {
        return Err(MatrixError::DimensionMismatch {
            left: (1, r1.len()),
            right: (1, r2.len()),
        });
    }
    Ok(r1.iter().zip(r2).map(|(a, b)| a + b).collect())
}

/// Matrix product `m1 * m2`; requires `m1.cols() == m2.rows()`
///
/// Each output entry is accumulated from `0.0` along the inner dimension in
/// increasing index order, so results are reproducible bit for bit.
pub fn multiply(m1: &Matrix, m2: &Matrix) -> Result<Matrix> {
    if m1.cols() != m2.rows() {
        return Err(MatrixError::DimensionMismatch {
            left: m1.shape(),
            right: m2.shape(),
        });
    }

    let mut product = Matrix::new(m1.rows(), m2.cols())?;
    for i in 0..m1.rows() {
        for k in 0..m2.cols() {
            let mut sum = 0.0;
            for j in 0..m1.cols() {
                sum += m1[(i, j)] * m2[(j, k)];
            }
            product[(i, k)] = sum;
        }
    }
    Ok(product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![0.5, -2.0], vec![1.0, 0.0]]).unwrap();
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.as_rows(), &[vec![1.5, 0.0], vec![4.0, 4.0]]);
        assert_eq!(a.row(0), &[1.0, 2.0]);
    }

    #[test]
    fn test_add_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 2).unwrap();
        match add(&a, &b) {
            Err(MatrixError::DimensionMismatch { left, right }) => {
                assert_eq!(left, (2, 3));
                assert_eq!(right, (3, 2));
            }
            other => panic!("expected dimension mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_add_rows() {
        assert_eq!(
            add_rows(&[1.0, 2.0, 3.0], &[-1.0, 0.5, 0.0]).unwrap(),
            vec![0.0, 2.5, 3.0]
        );
        assert!(matches!(
            add_rows(&[1.0], &[1.0, 2.0]),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7.0, 8.0], vec![9.0, 10.0], vec![11.0, 12.0]]).unwrap();
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.shape(), (2, 2));
        assert_eq!(product.as_rows(), &[vec![58.0, 64.0], vec![139.0, 154.0]]);
    }

    #[test]
    fn test_multiply_scalars() {
        let a = Matrix::from_rows(vec![vec![9.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![7.0]]).unwrap();
        assert_eq!(multiply(&a, &b).unwrap().get(0, 0), 63.0);
    }

    #[test]
    fn test_multiply_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 3).unwrap();
        assert!(matches!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
    }
}
