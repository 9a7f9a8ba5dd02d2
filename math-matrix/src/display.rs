//! Console rendering of matrices

use crate::Matrix;
use std::fmt;

fn entry(value: f64) -> String {
    format!("{:?}", value)
}

/// Bordered grid, one ruled line between rows:
///
/// ```text
/// -------------
/// | 1.0 | 2.5 |
/// -------------
/// | 3.0 | 4.0 |
/// -------------
/// ```
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .as_rows()
            .iter()
            .flatten()
            .map(|&x| entry(x).len())
            .max()
            .unwrap_or(0);
        let rule = "-".repeat(self.cols() * (width + 2) + self.cols() + 1);

        for row in self.as_rows() {
            writeln!(f, "{}", rule)?;
            for &x in row {
                write!(f, "| {:>width$} ", entry(x), width = width)?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "{}", rule)
    }
}

/// Renders an augmented matrix as a vector equation over its columns,
/// e.g. `x1 * [1.0, 3.0] + x2 * [2.0, 4.0] = [5.0, 6.0]`
#[derive(Debug, Clone, Copy)]
pub struct LinearCombination<'a>(pub &'a Matrix);

impl LinearCombination<'_> {
    fn column(&self, col: usize) -> String {
        let entries: Vec<String> = self.0.as_rows().iter().map(|row| entry(row[col])).collect();
        format!("[{}]", entries.join(", "))
    }
}

impl fmt::Display for LinearCombination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs = self.0.cols() - 1;
        if rhs == 0 {
            write!(f, "0")?;
        }
        for col in 0..rhs {
            if col > 0 {
                write!(f, " + ")?;
            }
            write!(f, "x{} * {}", col + 1, self.column(col))?;
        }
        write!(f, " = {}", self.column(rhs))
    }
}
