//! Consistency and independence of augmented linear systems
//!
//! An augmented matrix holds the coefficients of a linear system in all but
//! its last column and the right-hand side in the last column. Every
//! predicate here reduces a copy of the system to reduced row-echelon form
//! and inspects the result; the caller's matrix is not modified.

use crate::Matrix;
use crate::reduce::{PivotPosition, ReductionConfig, ZeroTest, row_reduce_with};

/// Outcome of reducing an augmented system once
#[derive(Debug, Clone)]
pub struct SystemReport {
    /// No row reads `0 = c` with `c` nonzero
    pub consistent: bool,
    /// One pivot per coefficient column
    pub independent: bool,
    /// Pivots returned by the reduction
    pub pivots: Vec<PivotPosition>,
    /// The system in reduced row-echelon form
    pub reduced: Matrix,
}

impl SystemReport {
    /// Number of pivots found
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// Reduce `augmented` and classify it with the default exact configuration
pub fn classify(augmented: &Matrix) -> SystemReport {
    classify_with(augmented, &ReductionConfig::default())
}

/// Reduce `augmented` and classify it using `config`
pub fn classify_with(augmented: &Matrix, config: &ReductionConfig) -> SystemReport {
    let mut reduced = augmented.clone();
    let pivots = row_reduce_with(&mut reduced, config);
    let consistent = !has_contradiction(&reduced, config.zero_test);
    let independent = pivots.len() == reduced.cols() - 1;

    log::debug!(
        "Classified {}x{} system: {} pivots, consistent={}, independent={}",
        reduced.rows(),
        reduced.cols(),
        pivots.len(),
        consistent,
        independent
    );

    SystemReport {
        consistent,
        independent,
        pivots,
        reduced,
    }
}

/// True unless reduction exposes a row with all coefficients zero and a
/// nonzero right-hand side
pub fn is_consistent(augmented: &Matrix) -> bool {
    let mut reduced = augmented.clone();
    row_reduce_with(&mut reduced, &ReductionConfig::default());
    !has_contradiction(&reduced, ZeroTest::Exact)
}

/// True when reduction finds a pivot for every coefficient column
pub fn is_independent(augmented: &Matrix) -> bool {
    rank(augmented) == augmented.cols() - 1
}

/// Number of pivots found by reduced row-echelon reduction of `m`
pub fn rank(m: &Matrix) -> usize {
    let mut reduced = m.clone();
    row_reduce_with(&mut reduced, &ReductionConfig::default()).len()
}

fn has_contradiction(reduced: &Matrix, zero_test: ZeroTest) -> bool {
    let coefficients = reduced.cols() - 1;
    reduced.as_rows().iter().any(|row| {
        let (lhs, rhs) = row.split_at(coefficients);
        zero_test.is_zero_row(lhs) && !zero_test.is_zero(rhs[0])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_unique_solution() {
        let m = matrix(vec![
            vec![5.0, 6.0, -4.0, -4.0],
            vec![4.0, -3.0, -5.0, 22.0],
            vec![7.0, -1.0, 6.0, 11.0],
        ]);
        assert!(is_consistent(&m));
        assert!(is_independent(&m));
        assert_eq!(rank(&m), 3);
    }

    #[test]
    fn test_contradiction() {
        let m = matrix(vec![
            vec![1.0, 1.0, 1.0, 3.0],
            vec![2.0, 2.0, 2.0, 7.0],
            vec![0.0, 1.0, 0.0, 1.0],
        ]);
        assert!(!is_consistent(&m));
        assert!(!is_independent(&m));
    }

    #[test]
    fn test_dependent_but_consistent() {
        let m = matrix(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]]);
        let report = classify(&m);
        assert!(report.consistent);
        assert!(!report.independent);
        assert_eq!(report.rank(), 1);
        assert_eq!(report.reduced.row(1), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_input_not_modified() {
        let m = matrix(vec![vec![2.0, 4.0], vec![1.0, 1.0]]);
        let before = m.clone();
        let _ = classify(&m);
        let _ = is_consistent(&m);
        let _ = is_independent(&m);
        assert_eq!(m, before);
    }

    #[test]
    fn test_single_column_system() {
        // no coefficient columns: any nonzero constant is a contradiction
        let m = matrix(vec![vec![0.0], vec![4.0]]);
        assert!(!is_consistent(&m));
        assert!(!is_independent(&m));
    }
}
