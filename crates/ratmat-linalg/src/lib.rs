//! # ratmat-linalg
//!
//! Exact-arithmetic linear algebra over rational matrices.
//!
//! This crate provides:
//! - Dense matrices of [`ratmat_rationals::Rational`] entries
//! - Gauss-Jordan elimination that records every elementary row
//!   operation into a replayable log
//! - Determinant, inverse and reduced row-echelon form built on that log
//!
//! Every result is exact; rank deficiency is reported as data, not as an
//! error, and only [`Matrix::inverse`] escalates it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod elimination;
pub mod error;
pub mod matrix;
pub mod row_op;

pub use elimination::Elimination;
pub use error::MatrixError;
pub use matrix::Matrix;
pub use row_op::RowOp;

#[cfg(test)]
mod tests;
