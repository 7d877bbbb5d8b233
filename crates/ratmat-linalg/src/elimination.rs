//! Gauss-Jordan elimination with a replayable operation log.
//!
//! A run copies its input, reduces the copy in place, and records every
//! elementary row operation in order. The log is what makes the derived
//! operations cheap: the determinant is recovered by walking the log
//! backwards, and the inverse by replaying it against an identity matrix.
//!
//! Elimination never fails on a well-formed matrix. Rank deficiency shows
//! up as zero rows in the reduced form and is reported as data; only
//! [`Matrix::inverse`] turns it into an error.

use num_traits::{One, Zero};

use ratmat_rationals::Rational;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::row_op::RowOp;

/// The result of one elimination run.
///
/// Invariant: replaying `steps` in order against the run's input matrix
/// reproduces `working` exactly.
#[derive(Clone, Debug)]
pub struct Elimination {
    working: Matrix,
    steps: Vec<RowOp>,
    zero_rows: usize,
}

impl Elimination {
    /// The reduced matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix {
        &self.working
    }

    /// Consumes the run and returns the reduced matrix.
    #[must_use]
    pub fn into_matrix(self) -> Matrix {
        self.working
    }

    /// The recorded elementary row operations, in application order.
    #[must_use]
    pub fn steps(&self) -> &[RowOp] {
        &self.steps
    }

    /// The number of all-zero rows found during back-substitution.
    ///
    /// Zero for a full-rank matrix; equals `rows - rank` in general. A
    /// forward-only run reports zero because only the backward pass scans
    /// for degenerate rows.
    #[must_use]
    pub fn zero_rows(&self) -> usize {
        self.zero_rows
    }

    /// The rank revealed by a full Gauss-Jordan run.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.working.num_rows() - self.zero_rows
    }
}

/// One in-progress run over a private working copy.
struct Run<'a> {
    working: Matrix,
    steps: Vec<RowOp>,
    zero_rows: usize,
    observer: Option<&'a mut dyn FnMut(&RowOp, &Matrix)>,
}

impl<'a> Run<'a> {
    fn new(matrix: &Matrix, observer: Option<&'a mut dyn FnMut(&RowOp, &Matrix)>) -> Self {
        Self {
            working: matrix.clone(),
            steps: Vec::new(),
            zero_rows: 0,
            observer,
        }
    }

    /// Applies an op to the working matrix, notifies the observer, and
    /// appends the op to the log.
    fn record(&mut self, op: RowOp) {
        op.apply(&mut self.working);
        if let Some(observer) = self.observer.as_mut() {
            observer(&op, &self.working);
        }
        self.steps.push(op);
    }

    /// Forward pass: reduces the working matrix to row-echelon form with
    /// every pivot normalized to one.
    ///
    /// The pivot search takes the first nonzero entry below the cursor;
    /// with exact arithmetic there is nothing to gain from
    /// magnitude-based pivoting.
    fn gauss(&mut self) {
        let (rows, cols) = self.working.shape();
        let mut i = 0;
        let mut j = 0;

        while i < rows && j < cols {
            if self.working[(i, j)].is_zero() {
                let found = (i + 1..rows).find(|&k| !self.working[(k, j)].is_zero());
                let Some(k) = found else {
                    // No pivot in this column.
                    j += 1;
                    continue;
                };
                self.record(RowOp::Exchange { a: i, b: k });
            }

            let pivot = self.working[(i, j)].clone();
            if !pivot.is_one() {
                let factor = pivot.recip().expect("pivot is nonzero");
                self.record(RowOp::Scale { row: i, factor });
            }

            for k in i + 1..rows {
                let entry = self.working[(k, j)].clone();
                if !entry.is_zero() {
                    self.record(RowOp::AddScaled {
                        target: k,
                        source: i,
                        factor: -entry,
                    });
                }
            }

            i += 1;
            j += 1;
        }
    }

    /// Backward pass: back-substitutes to reduced row-echelon form and
    /// counts the all-zero rows.
    fn jordan(&mut self) {
        let (rows, cols) = self.working.shape();
        for i in (0..rows).rev() {
            let leading = (0..cols).find(|&j| !self.working[(i, j)].is_zero());
            let Some(j) = leading else {
                self.zero_rows += 1;
                continue;
            };
            for k in (0..i).rev() {
                let entry = self.working[(k, j)].clone();
                if !entry.is_zero() {
                    self.record(RowOp::AddScaled {
                        target: k,
                        source: i,
                        factor: -entry,
                    });
                }
            }
        }
    }

    fn finish(self) -> Elimination {
        Elimination {
            working: self.working,
            steps: self.steps,
            zero_rows: self.zero_rows,
        }
    }
}

impl Matrix {
    /// Runs the forward (Gauss) pass only, producing row-echelon form.
    #[must_use]
    pub fn row_echelon(&self) -> Elimination {
        let mut run = Run::new(self, None);
        run.gauss();
        run.finish()
    }

    /// Runs the forward pass with an observer called after each step.
    ///
    /// The observer receives each recorded op and the working-matrix state
    /// right after the op was applied, synchronously on the caller's
    /// thread. It must not block indefinitely.
    #[must_use]
    pub fn row_echelon_observed(&self, observer: &mut dyn FnMut(&RowOp, &Matrix)) -> Elimination {
        let mut run = Run::new(self, Some(observer));
        run.gauss();
        run.finish()
    }

    /// Runs full Gauss-Jordan elimination, producing reduced row-echelon
    /// form and the zero-row count.
    #[must_use]
    pub fn gauss_jordan(&self) -> Elimination {
        let mut run = Run::new(self, None);
        run.gauss();
        run.jordan();
        run.finish()
    }

    /// Runs full Gauss-Jordan elimination with an observer called after
    /// each step.
    #[must_use]
    pub fn gauss_jordan_observed(&self, observer: &mut dyn FnMut(&RowOp, &Matrix)) -> Elimination {
        let mut run = Run::new(self, Some(observer));
        run.gauss();
        run.jordan();
        run.finish()
    }

    /// Returns the reduced row-echelon form.
    #[must_use]
    pub fn rref(&self) -> Self {
        self.gauss_jordan().into_matrix()
    }

    /// Computes the determinant.
    ///
    /// Runs the forward pass only. A zero on the echelon diagonal means
    /// the matrix is singular and the determinant is exactly zero.
    /// Otherwise the normalized echelon form has diagonal product one, so
    /// the determinant is recovered from the log alone: walking it
    /// backwards, each exchange flips the sign and each scaling divides
    /// by its factor.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix.
    pub fn det(&self) -> Result<Rational, MatrixError> {
        if !self.is_square() {
            let (rows, cols) = self.shape();
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let run = self.row_echelon();
        for i in 0..self.num_rows() {
            if run.matrix()[(i, i)].is_zero() {
                return Ok(Rational::zero());
            }
        }

        let mut product = Rational::one();
        for op in run.steps().iter().rev() {
            match op {
                RowOp::Exchange { .. } => product = -product,
                RowOp::Scale { factor, .. } => {
                    product = product
                        .checked_div(factor)
                        .expect("scale factor is nonzero");
                }
                RowOp::AddScaled { .. } => {}
            }
        }
        Ok(product)
    }

    /// Computes the inverse by replaying the elimination log against an
    /// identity matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for a non-square matrix, and
    /// [`MatrixError::SingularMatrix`] when elimination reveals a rank
    /// deficiency.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if !self.is_square() {
            let (rows, cols) = self.shape();
            return Err(MatrixError::NotSquare { rows, cols });
        }

        let run = self.gauss_jordan();
        if run.zero_rows() > 0 {
            return Err(MatrixError::SingularMatrix);
        }

        let mut inverse = Self::identity(self.num_rows());
        for op in run.steps() {
            op.apply(&mut inverse);
        }
        Ok(inverse)
    }
}
