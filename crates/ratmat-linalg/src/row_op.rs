//! Elementary row operations.
//!
//! A [`RowOp`] is one reversible step of an elimination run: a row
//! exchange, a row scaling by a nonzero factor, or the addition of a
//! scaled row to another. Replaying a run's recorded ops in order against
//! the original input reproduces the run's working matrix exactly.

use std::fmt;

use ratmat_rationals::Rational;

use crate::matrix::Matrix;

/// A single elementary row operation.
///
/// Row indices are zero-based. The `factor` of a [`RowOp::Scale`] is never
/// zero: the engine only records a scale for a nonzero pivot, and a zero
/// scaling would not be invertible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOp {
    /// Swap rows `a` and `b`.
    Exchange {
        /// First row.
        a: usize,
        /// Second row.
        b: usize,
    },
    /// Multiply every entry of `row` by `factor`.
    Scale {
        /// Target row.
        row: usize,
        /// Nonzero scaling factor.
        factor: Rational,
    },
    /// For every column, `target += factor * source`.
    AddScaled {
        /// Row being modified.
        target: usize,
        /// Row being read.
        source: usize,
        /// Scaling factor applied to the source row.
        factor: Rational,
    },
}

impl RowOp {
    /// Applies this operation to a matrix in place.
    ///
    /// This is the replay primitive: the elimination engine uses it on its
    /// private working copy, and callers use it to replay a recorded log
    /// against a matrix they own.
    ///
    /// # Panics
    ///
    /// Panics if a row index is out of bounds for `matrix`.
    pub fn apply(&self, matrix: &mut Matrix) {
        match self {
            Self::Exchange { a, b } => matrix.swap_rows(*a, *b),
            Self::Scale { row, factor } => matrix.scale_row(*row, factor),
            Self::AddScaled {
                target,
                source,
                factor,
            } => matrix.add_scaled_row(*target, *source, factor),
        }
    }

    /// Returns the operation that undoes this one.
    ///
    /// An exchange is its own inverse, a scaling inverts its factor, and a
    /// scaled-row addition negates its factor. Applying an op and then its
    /// inverse restores the matrix exactly.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match self {
            Self::Exchange { a, b } => Self::Exchange { a: *a, b: *b },
            Self::Scale { row, factor } => Self::Scale {
                row: *row,
                factor: factor.recip().expect("scale factor is nonzero"),
            },
            Self::AddScaled {
                target,
                source,
                factor,
            } => Self::AddScaled {
                target: *target,
                source: *source,
                factor: -factor,
            },
        }
    }

    /// Returns the n-by-n elementary matrix of this operation.
    ///
    /// Left-multiplying by the result performs the operation; a recorded
    /// log composes into a transformation matrix this way.
    ///
    /// # Panics
    ///
    /// Panics if a row index of the operation is out of bounds for an
    /// n-by-n matrix, or if `n` is zero.
    #[must_use]
    pub fn as_matrix(&self, n: usize) -> Matrix {
        let mut m = Matrix::identity(n);
        self.apply(&mut m);
        m
    }
}

impl fmt::Display for RowOp {
    /// Renders with one-based row numbers, e.g. `r1 <-> r2`,
    /// `r2 -> 3*r2`, `r3 -> r3 + -5/2*r1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exchange { a, b } => write!(f, "r{} <-> r{}", a + 1, b + 1),
            Self::Scale { row, factor } => {
                write!(f, "r{} -> {}*r{}", row + 1, factor, row + 1)
            }
            Self::AddScaled {
                target,
                source,
                factor,
            } => write!(
                f,
                "r{} -> r{} + {}*r{}",
                target + 1,
                target + 1,
                factor,
                source + 1
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratmat_rationals::Rational;

    fn sample() -> Matrix {
        Matrix::from_integer_rows(&[&[1, 2], &[3, 4]]).unwrap()
    }

    #[test]
    fn test_exchange() {
        let mut m = sample();
        RowOp::Exchange { a: 0, b: 1 }.apply(&mut m);
        assert_eq!(m, Matrix::from_integer_rows(&[&[3, 4], &[1, 2]]).unwrap());
    }

    #[test]
    fn test_scale() {
        let mut m = sample();
        RowOp::Scale {
            row: 1,
            factor: Rational::new(1, 2).unwrap(),
        }
        .apply(&mut m);
        assert_eq!(
            m,
            Matrix::from_rows(vec![
                vec![Rational::from_integer(1), Rational::from_integer(2)],
                vec![Rational::new(3, 2).unwrap(), Rational::from_integer(2)],
            ])
            .unwrap()
        );
    }

    #[test]
    fn test_add_scaled() {
        let mut m = sample();
        RowOp::AddScaled {
            target: 1,
            source: 0,
            factor: Rational::from_integer(-3),
        }
        .apply(&mut m);
        assert_eq!(m, Matrix::from_integer_rows(&[&[1, 2], &[0, -2]]).unwrap());
    }

    #[test]
    fn test_inverse_round_trips() {
        let ops = [
            RowOp::Exchange { a: 0, b: 1 },
            RowOp::Scale {
                row: 0,
                factor: Rational::new(-7, 3).unwrap(),
            },
            RowOp::AddScaled {
                target: 1,
                source: 0,
                factor: Rational::new(5, 2).unwrap(),
            },
        ];
        for op in &ops {
            let mut m = sample();
            op.apply(&mut m);
            op.inverse().apply(&mut m);
            assert_eq!(m, sample(), "{op} did not round-trip");
        }
    }

    #[test]
    fn test_inverse_forms() {
        let exchange = RowOp::Exchange { a: 1, b: 2 };
        assert_eq!(exchange.inverse(), exchange);

        let scale = RowOp::Scale {
            row: 0,
            factor: Rational::new(2, 3).unwrap(),
        };
        assert_eq!(
            scale.inverse(),
            RowOp::Scale {
                row: 0,
                factor: Rational::new(3, 2).unwrap(),
            }
        );

        let lc = RowOp::AddScaled {
            target: 2,
            source: 0,
            factor: Rational::new(1, 4).unwrap(),
        };
        assert_eq!(
            lc.inverse(),
            RowOp::AddScaled {
                target: 2,
                source: 0,
                factor: Rational::new(-1, 4).unwrap(),
            }
        );
    }

    #[test]
    fn test_as_matrix_left_multiplies() {
        let op = RowOp::AddScaled {
            target: 1,
            source: 0,
            factor: Rational::from_integer(2),
        };
        let elementary = op.as_matrix(2);

        let m = sample();
        let mut expected = m.clone();
        op.apply(&mut expected);
        assert_eq!(elementary.dot(&m).unwrap(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(RowOp::Exchange { a: 0, b: 1 }.to_string(), "r1 <-> r2");
        assert_eq!(
            RowOp::Scale {
                row: 1,
                factor: Rational::from_integer(3),
            }
            .to_string(),
            "r2 -> 3*r2"
        );
        assert_eq!(
            RowOp::AddScaled {
                target: 2,
                source: 0,
                factor: Rational::new(-5, 2).unwrap(),
            }
            .to_string(),
            "r3 -> r3 + -5/2*r1"
        );
    }
}
