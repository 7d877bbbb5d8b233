//! Matrix operation errors.

use thiserror::Error;

/// Errors produced by matrix construction and operations.
///
/// All errors are reported synchronously to the caller; no partially
/// mutated state is ever observable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Operand dimensions are incompatible for the requested operation.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
    },

    /// The operation is only defined for square matrices.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
    },

    /// An inverse was requested for a rank-deficient matrix.
    #[error("matrix is singular")]
    SingularMatrix,
}
