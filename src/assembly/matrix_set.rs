//! Paired numeric/symbolic matrix storage.

use std::fmt;

use crate::error::{QGraphError, Result};

/// Symbolic text of an untouched cell.
pub const ZERO_SYMBOL: &str = "0";

/// A single matrix coefficient in both representations.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficient {
    /// Evaluated value handed to the solver
    pub value: f64,
    /// Human-readable formula for the same coefficient
    pub formula: String,
}

impl Coefficient {
    /// Create a coefficient from a value and its formula.
    pub fn new(value: f64, formula: impl Into<String>) -> Self {
        Self {
            value,
            formula: formula.into(),
        }
    }
}

/// Numeric and symbolic matrices of identical shape.
///
/// Both matrices are stored row-major. The fields are private and the only
/// mutator, [`MatrixSet::set`], writes both cells together, so
/// `numeric(i, j)` and `symbolic(i, j)` always describe the same coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSet {
    rows: usize,
    cols: usize,
    numeric: Vec<f64>,
    symbolic: Vec<String>,
}

impl MatrixSet {
    /// Create a `rows x cols` set with every cell zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            numeric: vec![0.0; rows * cols],
            symbolic: vec![ZERO_SYMBOL.to_string(); rows * cols],
        }
    }

    /// Create a square `size x size` set with every cell zero.
    pub fn square(size: usize) -> Self {
        Self::zeros(size, size)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if the set is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Write a coefficient into both representations at (row, col).
    pub fn set(&mut self, row: usize, col: usize, coefficient: Coefficient) {
        let idx = self.offset(row, col);
        self.numeric[idx] = coefficient.value;
        self.symbolic[idx] = coefficient.formula;
    }

    /// Get the numeric value at (row, col).
    pub fn numeric(&self, row: usize, col: usize) -> f64 {
        self.numeric[self.offset(row, col)]
    }

    /// Get the symbolic formula at (row, col).
    pub fn symbolic(&self, row: usize, col: usize) -> &str {
        &self.symbolic[self.offset(row, col)]
    }

    /// Get both representations at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Coefficient {
        let idx = self.offset(row, col);
        Coefficient::new(self.numeric[idx], self.symbolic[idx].clone())
    }

    /// Numeric matrix in row-major order.
    pub fn numeric_data(&self) -> &[f64] {
        &self.numeric
    }

    /// Symbolic matrix in row-major order.
    pub fn symbolic_data(&self) -> &[String] {
        &self.symbolic
    }

    /// One numeric row as a slice.
    pub fn numeric_row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.numeric[start..start + self.cols]
    }

    /// Check if every cell of a row is zero.
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.numeric_row(row).iter().all(|&v| v == 0.0)
    }

    /// Concatenate sets side by side (same row count).
    pub fn hstack(blocks: &[&MatrixSet]) -> Result<MatrixSet> {
        let rows = blocks.first().map_or(0, |b| b.rows);
        if let Some(bad) = blocks.iter().find(|b| b.rows != rows) {
            return Err(QGraphError::DimensionMismatch {
                message: format!("cannot hstack {} rows with {} rows", bad.rows, rows),
            });
        }

        let cols = blocks.iter().map(|b| b.cols).sum();
        let mut out = MatrixSet::zeros(rows, cols);
        for row in 0..rows {
            let mut col = 0;
            for block in blocks {
                for j in 0..block.cols {
                    out.set(row, col + j, block.get(row, j));
                }
                col += block.cols;
            }
        }
        Ok(out)
    }

    /// Concatenate sets on top of each other (same column count).
    pub fn vstack(blocks: &[&MatrixSet]) -> Result<MatrixSet> {
        let cols = blocks.first().map_or(0, |b| b.cols);
        if let Some(bad) = blocks.iter().find(|b| b.cols != cols) {
            return Err(QGraphError::DimensionMismatch {
                message: format!("cannot vstack {} columns with {} columns", bad.cols, cols),
            });
        }

        let rows = blocks.iter().map(|b| b.rows).sum();
        let mut numeric = Vec::with_capacity(rows * cols);
        let mut symbolic = Vec::with_capacity(rows * cols);
        for block in blocks {
            numeric.extend_from_slice(&block.numeric);
            symbolic.extend(block.symbolic.iter().cloned());
        }
        Ok(MatrixSet {
            rows,
            cols,
            numeric,
            symbolic,
        })
    }

    /// View that renders the numeric matrix instead of the symbolic one.
    pub fn display_numeric(&self) -> NumericDisplay<'_> {
        NumericDisplay(self)
    }
}

/// Write a grid of cells with right-aligned, per-column widths.
fn write_grid(
    f: &mut fmt::Formatter<'_>,
    rows: usize,
    cols: usize,
    cell: impl Fn(usize, usize) -> String,
) -> fmt::Result {
    let cells: Vec<String> = (0..rows * cols).map(|i| cell(i / cols, i % cols)).collect();
    let widths: Vec<usize> = (0..cols)
        .map(|j| {
            (0..rows)
                .map(|i| cells[i * cols + j].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for i in 0..rows {
        for j in 0..cols {
            if j > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:>width$}", cells[i * cols + j], width = widths[j])?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for MatrixSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.rows, self.cols, |i, j| self.symbolic(i, j).to_string())
    }
}

/// Numeric rendering of a [`MatrixSet`].
pub struct NumericDisplay<'a>(&'a MatrixSet);

impl fmt::Display for NumericDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.0;
        write_grid(f, set.rows, set.cols, |i, j| format!("{:.6}", set.numeric(i, j)))
    }
}
