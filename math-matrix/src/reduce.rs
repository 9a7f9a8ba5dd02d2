//! Gaussian elimination to row-echelon and reduced row-echelon form
//!
//! Columns are visited left to right, once each. For every column the first
//! row at or below the current pivot row with a nonzero entry is swapped into
//! place, scaled so the pivot becomes exactly `1.0`, and used to clear the
//! column:
//! - [`reduce`] clears entries below the pivot only (row-echelon form)
//! - [`row_reduce`] clears every other row in the same pass, then moves
//!   all-zero rows to the bottom (reduced row-echelon form)
//!
//! With the default [`PivotStrategy::ColumnAligned`] the pivot row for column
//! `j` is row `j` itself. A column with no nonzero entry at or below row `j`
//! is skipped and row `j` is not offered to later columns, which leaves some
//! rank-deficient matrices short of true RREF.
//! [`PivotStrategy::NextFreeRow`] keeps a separate pivot-row cursor instead.

use crate::{Matrix, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Coordinates of a leading `1.0` placed during reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PivotPosition {
    pub row: usize,
    pub col: usize,
}

impl PivotPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// How the row receiving the next pivot is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// The pivot for column `j` is searched from row `j` and placed in row `j`
    #[default]
    ColumnAligned,
    /// The pivot is placed in the first row not yet holding a pivot
    NextFreeRow,
}

/// Policy deciding whether an entry counts as zero
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTest {
    /// `value == 0.0`
    #[default]
    Exact,
    /// `|value| <= tolerance`
    Absolute(f64),
}

impl ZeroTest {
    #[inline]
    pub fn is_zero(self, value: f64) -> bool {
        match self {
            ZeroTest::Exact => value == 0.0,
            ZeroTest::Absolute(tolerance) => value.abs() <= tolerance,
        }
    }

    /// Every entry of `row` is zero
    pub fn is_zero_row(self, row: &[f64]) -> bool {
        row.iter().all(|&x| self.is_zero(x))
    }
}

/// Reduction settings, loadable from JSON
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    pub pivot_strategy: PivotStrategy,
    pub zero_test: ZeroTest,
}

impl ReductionConfig {
    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Elimination {
    /// Clear rows below the pivot
    Below,
    /// Clear every row except the pivot row
    All,
}

/// Reduce `m` in place to row-echelon form
pub fn reduce(m: &mut Matrix) {
    reduce_with(m, &ReductionConfig::default());
}

/// Reduce `m` in place to row-echelon form using `config`
pub fn reduce_with(m: &mut Matrix, config: &ReductionConfig) {
    eliminate(m, config, Elimination::Below);
}

/// Reduce `m` in place to reduced row-echelon form
///
/// Returns the pivots in the order their columns were visited. Positions are
/// those at which each pivot was placed, before zero rows are moved down.
pub fn row_reduce(m: &mut Matrix) -> Vec<PivotPosition> {
    row_reduce_with(m, &ReductionConfig::default())
}

/// Reduce `m` in place to reduced row-echelon form using `config`
pub fn row_reduce_with(m: &mut Matrix, config: &ReductionConfig) -> Vec<PivotPosition> {
    let pivots = eliminate(m, config, Elimination::All);
    bubble_zero_rows(m, config.zero_test);
    pivots
}

/// Move every all-zero row below every other row, keeping the order of the
/// nonzero rows
pub fn bubble_zeroes(m: &mut Matrix) {
    bubble_zero_rows(m, ZeroTest::Exact);
}

fn eliminate(
    m: &mut Matrix,
    config: &ReductionConfig,
    elimination: Elimination,
) -> Vec<PivotPosition> {
    let rows = m.rows();
    let zero_test = config.zero_test;
    let mut pivots = Vec::new();
    let mut next_row = 0;

    for col in 0..m.cols() {
        let pivot_row = match config.pivot_strategy {
            PivotStrategy::ColumnAligned => col,
            PivotStrategy::NextFreeRow => next_row,
        };
        if pivot_row >= rows {
            continue;
        }

        let Some(found) = (pivot_row..rows).find(|&i| !zero_test.is_zero(m[(i, col)])) else {
            continue;
        };

        let value = m[(found, col)];
        m.swap_rows(found, pivot_row);
        let mut scaled = m.scale_row(pivot_row, 1.0 / value);
        scaled[col] = 1.0;
        m.replace_row(pivot_row, scaled);
        log::debug!(
            "Pivot {} found at row {} for column {}, placed in row {}",
            value,
            found,
            col,
            pivot_row
        );

        let targets = match elimination {
            Elimination::Below => (pivot_row + 1)..rows,
            Elimination::All => 0..rows,
        };
        for target in targets.filter(|&k| k != pivot_row) {
            eliminate_row(m, target, pivot_row, col, zero_test);
        }

        pivots.push(PivotPosition::new(pivot_row, col));
        next_row = pivot_row + 1;
    }

    pivots
}

/// Subtract the multiple of `pivot_row` that clears `m[(target, col)]`
fn eliminate_row(
    m: &mut Matrix,
    target: usize,
    pivot_row: usize,
    col: usize,
    zero_test: ZeroTest,
) {
    let factor = m[(target, col)];
    if zero_test.is_zero(factor) {
        // flush entries within tolerance
        m[(target, col)] = 0.0;
        return;
    }
    let scaled = m.scale_row(pivot_row, -factor);
    let updated: Vec<f64> = m
        .row(target)
        .iter()
        .zip(&scaled)
        .map(|(x, s)| x + s)
        .collect();
    m.replace_row(target, updated);
}

fn bubble_zero_rows(m: &mut Matrix, zero_test: ZeroTest) {
    let last = m.rows() - 1;
    let mut unsettled = m.rows();
    let mut i = 0;

    while i < unsettled {
        if zero_test.is_zero_row(m.row(i)) {
            for k in i..last {
                m.swap_rows(k, k + 1);
            }
            log::debug!("Moved zero row {} to the bottom", i);
            unsettled -= 1;
        } else {
            i += 1;
        }
    }
}
