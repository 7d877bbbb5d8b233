//! Dense matrices of exact rational entries.
//!
//! Matrices are immutable through the public API: every transformation
//! returns a new value. The elimination engine mutates a private working
//! copy through the row helpers in this module.

use std::fmt;
use std::ops::Index;

use num_traits::{One, Zero};
use rand::Rng;

use ratmat_rationals::{Comparison, Rational};

use crate::error::MatrixError;

/// A dense matrix of rational entries, stored in row-major order.
///
/// Invariants: `rows >= 1`, `cols >= 1`, and the entry buffer holds
/// exactly `rows * cols` values. The shape is fixed for the lifetime of
/// the value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    /// Matrix entries in row-major order.
    data: Vec<Rational>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl Matrix {
    /// Creates a matrix with every entry set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn fill(rows: usize, cols: usize, value: Rational) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be at least 1x1");
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::fill(rows, cols, Rational::zero())
    }

    /// Creates a matrix of ones.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::fill(rows, cols, Rational::one())
    }

    /// Creates an n-by-n identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = Rational::one();
        }
        m
    }

    /// Creates a matrix from rows of rational entries.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the grid is empty or the
    /// rows have unequal lengths.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self, MatrixError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 {
            return Err(MatrixError::ShapeMismatch(
                "matrix must have at least one row and one column".into(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != num_cols {
                return Err(MatrixError::ShapeMismatch(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    num_cols
                )));
            }
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: num_rows,
            cols: num_cols,
        })
    }

    /// Creates a matrix from rows of integers.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if the grid is empty or the
    /// rows have unequal lengths.
    pub fn from_integer_rows(rows: &[&[i64]]) -> Result<Self, MatrixError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&n| Rational::from_integer(n)).collect())
                .collect(),
        )
    }

    /// Creates an n-by-1 column vector from integer entries.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty.
    #[must_use]
    pub fn column_vector(entries: &[i64]) -> Self {
        assert!(!entries.is_empty(), "column vector must have at least one entry");
        Self {
            data: entries.iter().map(|&n| Rational::from_integer(n)).collect(),
            rows: entries.len(),
            cols: 1,
        }
    }

    /// Creates a matrix with integer entries drawn uniformly from 1..=99.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be at least 1x1");
        Self {
            data: (0..rows * cols)
                .map(|_| Rational::from_integer(rng.gen_range(1..=99)))
                .collect(),
            rows,
            cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of
    /// bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<&Rational, MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(&self.data[row * self.cols + col])
        } else {
            Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Rational] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the single entry of a 1-by-1 matrix, or `None` otherwise.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Rational> {
        if self.rows == 1 && self.cols == 1 {
            Some(&self.data[0])
        } else {
            None
        }
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Sums the diagonal over the first `min(rows, cols)` entries.
    #[must_use]
    pub fn trace(&self) -> Rational {
        (0..self.rows.min(self.cols))
            .map(|i| self[(i, i)].clone())
            .fold(Rational::zero(), |acc, v| acc + v)
    }

    /// Sums every entry.
    #[must_use]
    pub fn sum(&self) -> Rational {
        self.data
            .iter()
            .fold(Rational::zero(), |acc, v| acc + v.clone())
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless the shapes are
    /// identical.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.require_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Scales every entry by a rational factor.
    #[must_use]
    pub fn scale(&self, factor: &Rational) -> Self {
        Self {
            data: self.data.iter().map(|v| v * factor).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Negates every entry.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            data: self.data.iter().map(std::ops::Neg::neg).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix product.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless the left column count
    /// equals the right row count.
    pub fn dot(&self, other: &Self) -> Result<Self, MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::ShapeMismatch(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )));
        }
        let mut data = Vec::with_capacity(self.rows * other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = Rational::zero();
                for k in 0..self.cols {
                    sum = sum + &self[(i, k)] * &other[(k, j)];
                }
                data.push(sum);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Concatenates matrices horizontally, left to right.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless every operand has the
    /// same row count as `self`.
    pub fn hstack(&self, others: &[Self]) -> Result<Self, MatrixError> {
        let mut cols = self.cols;
        for other in others {
            if other.rows != self.rows {
                return Err(MatrixError::ShapeMismatch(format!(
                    "cannot hstack a matrix with {} rows onto one with {}",
                    other.rows, self.rows
                )));
            }
            cols += other.cols;
        }
        let mut data = Vec::with_capacity(self.rows * cols);
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
            for other in others {
                data.extend_from_slice(other.row(i));
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols,
        })
    }

    /// Returns the lower triangle; entries strictly above the diagonal
    /// become zero.
    #[must_use]
    pub fn lower_triangle(&self) -> Self {
        self.triangle(|i, j| i >= j)
    }

    /// Returns the upper triangle; entries strictly below the diagonal
    /// become zero.
    #[must_use]
    pub fn upper_triangle(&self) -> Self {
        self.triangle(|i, j| j >= i)
    }

    fn triangle(&self, keep: impl Fn(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                data.push(if keep(i, j) {
                    self[(i, j)].clone()
                } else {
                    Rational::zero()
                });
            }
        }
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Compares element-wise, producing a 0/1 indicator matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] unless the shapes are
    /// identical.
    pub fn compare_elementwise(
        &self,
        other: &Self,
        comparison: Comparison,
    ) -> Result<Self, MatrixError> {
        self.require_same_shape(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| {
                    if a.compare(b, comparison) {
                        Rational::one()
                    } else {
                        Rational::zero()
                    }
                })
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Zero::is_zero)
    }

    /// Returns true if this is a square identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows {
            for j in 0..self.cols {
                let entry = &self[(i, j)];
                if i == j {
                    if !entry.is_one() {
                        return false;
                    }
                } else if !entry.is_zero() {
                    return false;
                }
            }
        }
        true
    }

    fn require_same_shape(&self, other: &Self) -> Result<(), MatrixError> {
        if self.shape() == other.shape() {
            Ok(())
        } else {
            Err(MatrixError::ShapeMismatch(format!(
                "{}x{} vs {}x{}",
                self.rows, self.cols, other.rows, other.cols
            )))
        }
    }

    // Row helpers for the elimination engine and RowOp replay.

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let a_start = a * self.cols;
        let b_start = b * self.cols;
        for k in 0..self.cols {
            self.data.swap(a_start + k, b_start + k);
        }
    }

    pub(crate) fn scale_row(&mut self, row: usize, factor: &Rational) {
        let start = row * self.cols;
        for entry in &mut self.data[start..start + self.cols] {
            *entry = entry.clone() * factor;
        }
    }

    pub(crate) fn add_scaled_row(&mut self, target: usize, source: usize, factor: &Rational) {
        for k in 0..self.cols {
            let addend = &self[(source, k)] * factor;
            let index = target * self.cols + k;
            self.data[index] = self.data[index].clone() + addend;
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Rational;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{} Rows, {} Columns]", self.rows, self.cols)?;

        let rendered: Vec<String> = self.data.iter().map(ToString::to_string).collect();
        let mut widths = vec![0usize; self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                widths[j] = widths[j].max(rendered[i * self.cols + j].len());
            }
        }

        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>width$}", rendered[i * self.cols + j], width = widths[j])?;
                if j != self.cols - 1 {
                    write!(f, "    ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
