//! # ratmat
//!
//! Exact-arithmetic matrix algebra over rational numbers.
//!
//! ratmat represents matrix entries as arbitrary precision fractions and
//! performs row-reduction-based linear algebra with no rounding error.
//!
//! ## Features
//!
//! - **Exact scalars**: rationals in lowest terms, backed by `dashu`
//! - **Recorded elimination**: Gauss-Jordan reduction that logs every
//!   elementary row operation for replay
//! - **Derived operations**: determinant, inverse and reduced
//!   row-echelon form built on the elimination log
//!
//! ## Quick Start
//!
//! ```rust
//! use ratmat::prelude::*;
//!
//! let a = Matrix::from_integer_rows(&[&[7, 4, -2], &[3, 8, 6], &[10, 12, 5]])?;
//! let inv = a.inverse()?;
//! assert!(a.dot(&inv)?.is_identity());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ratmat_linalg as linalg;
pub use ratmat_rationals as rationals;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ratmat_linalg::{Elimination, Matrix, MatrixError, RowOp};
    pub use ratmat_rationals::{Comparison, Integer, Rational, RationalError};
}
