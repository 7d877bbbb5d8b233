//! Integration tests for ratmat-linalg.

#[cfg(test)]
mod integration_tests {
    use num_traits::{One, Zero};

    use ratmat_rationals::Rational;

    use crate::error::MatrixError;
    use crate::matrix::Matrix;

    #[test]
    fn test_invertible_3x3() {
        let a = Matrix::from_integer_rows(&[&[7, 4, -2], &[3, 8, 6], &[10, 12, 5]]).unwrap();

        // Cofactor expansion: 7*(40-72) - 4*(15-60) - 2*(36-80) = 44.
        assert_eq!(a.det().unwrap(), Rational::from_integer(44));

        let inv = a.inverse().unwrap();
        assert!(a.dot(&inv).unwrap().is_identity());
        assert!(inv.dot(&a).unwrap().is_identity());
    }

    #[test]
    fn test_singular_3x3_det_is_zero() {
        let a = Matrix::from_integer_rows(&[&[2, 2, -2], &[-2, 1, -7], &[-2, -1, -1]]).unwrap();

        // Cofactor expansion: 2*(-8) - 2*(-12) + (-2)*4 = 0.
        assert!(a.det().unwrap().is_zero());
        assert_eq!(a.gauss_jordan().rank(), 2);
        assert_eq!(a.inverse(), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn test_fractional_determinant() {
        let a = Matrix::from_rows(vec![
            vec![Rational::new(1, 2).unwrap(), Rational::new(1, 3).unwrap()],
            vec![Rational::new(1, 4).unwrap(), Rational::new(1, 5).unwrap()],
        ])
        .unwrap();
        // 1/10 - 1/12 = 1/60
        assert_eq!(a.det().unwrap(), Rational::new(1, 60).unwrap());
    }

    #[test]
    fn test_duplicate_rows_are_singular() {
        let a = Matrix::from_integer_rows(&[&[1, 2, 3], &[1, 2, 3], &[4, 5, 6]]).unwrap();
        let run = a.gauss_jordan();
        assert!(run.zero_rows() >= 1);
        assert_eq!(a.inverse(), Err(MatrixError::SingularMatrix));
    }

    #[test]
    fn test_rref_rectangular() {
        let a = Matrix::from_integer_rows(&[
            &[0, 0, -2, 0, 7, 12],
            &[2, 4, -10, 6, 12, 28],
            &[2, 4, -5, 6, -5, -1],
        ])
        .unwrap();
        let rref = a.rref();

        assert_eq!(
            rref,
            Matrix::from_integer_rows(&[
                &[1, 2, 0, 3, 0, 7],
                &[0, 0, 1, 0, 0, 1],
                &[0, 0, 0, 0, 1, 2],
            ])
            .unwrap()
        );

        // Each pivot is exactly one, with zeros everywhere else in its
        // column.
        for i in 0..rref.num_rows() {
            let lead = (0..rref.num_cols()).find(|&j| !rref[(i, j)].is_zero());
            let Some(j) = lead else { continue };
            assert!(rref[(i, j)].is_one());
            for k in 0..rref.num_rows() {
                if k != i {
                    assert!(rref[(k, j)].is_zero());
                }
            }
        }
    }

    #[test]
    fn test_rref_idempotent() {
        let a = Matrix::from_integer_rows(&[&[2, 4, -2], &[4, 9, -3], &[-2, -3, 7]]).unwrap();
        let once = a.rref();
        assert_eq!(once.rref(), once);
    }

    #[test]
    fn test_log_round_trip() {
        let a = Matrix::from_integer_rows(&[&[0, 3, 1], &[2, 2, 2], &[4, 4, 1]]).unwrap();
        let run = a.gauss_jordan();

        let mut replay = a.clone();
        for op in run.steps() {
            op.apply(&mut replay);
        }
        assert_eq!(&replay, run.matrix());
    }

    #[test]
    fn test_determinant_multiplicative() {
        let a = Matrix::from_integer_rows(&[&[1, 2, 0], &[3, 1, 4], &[0, 2, 2]]).unwrap();
        let b = Matrix::from_integer_rows(&[&[2, 0, 1], &[1, 1, 0], &[5, 2, 3]]).unwrap();
        let product = a.dot(&b).unwrap();
        assert_eq!(
            product.det().unwrap(),
            a.det().unwrap() * b.det().unwrap()
        );
    }

    #[test]
    fn test_augmented_solve_via_rref() {
        // [A | b] reduces to [I | x] for an invertible A.
        let a = Matrix::from_integer_rows(&[&[1, 2], &[3, 4]]).unwrap();
        let b = Matrix::column_vector(&[5, 11]);
        let rref = a.hstack(&[b]).unwrap().rref();

        assert_eq!(rref[(0, 2)], Rational::from_integer(1));
        assert_eq!(rref[(1, 2)], Rational::from_integer(2));
    }
}

#[cfg(test)]
mod proptest_tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use ratmat_rationals::Rational;

    use crate::error::MatrixError;
    use crate::matrix::Matrix;

    fn entry() -> impl Strategy<Value = i64> {
        -9i64..=9
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        proptest::collection::vec(proptest::collection::vec(entry(), cols), rows).prop_map(
            |grid| {
                Matrix::from_rows(
                    grid.into_iter()
                        .map(|row| row.into_iter().map(Rational::from_integer).collect())
                        .collect(),
                )
                .expect("generated grid is rectangular")
            },
        )
    }

    fn any_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| matrix(rows, cols))
    }

    fn square_matrix() -> impl Strategy<Value = Matrix> {
        (1usize..=4).prop_flat_map(|n| matrix(n, n))
    }

    proptest! {
        #[test]
        fn log_replay_reproduces_working_matrix(m in any_matrix()) {
            let run = m.gauss_jordan();
            let mut replay = m.clone();
            for op in run.steps() {
                op.apply(&mut replay);
            }
            prop_assert_eq!(&replay, run.matrix());
        }

        #[test]
        fn every_step_round_trips_through_its_inverse(m in any_matrix()) {
            let run = m.gauss_jordan();
            let mut state = m.clone();
            for op in run.steps() {
                let before = state.clone();
                op.apply(&mut state);
                let mut undone = state.clone();
                op.inverse().apply(&mut undone);
                prop_assert_eq!(&undone, &before);
            }
        }

        #[test]
        fn rref_is_idempotent(m in any_matrix()) {
            let once = m.rref();
            prop_assert_eq!(once.rref(), once);
        }

        #[test]
        fn zero_rows_counts_rank_deficiency(m in any_matrix()) {
            let run = m.gauss_jordan();
            let rref = run.matrix();
            let zero_row_count = (0..rref.num_rows())
                .filter(|&i| rref.row(i).iter().all(Zero::is_zero))
                .count();
            prop_assert_eq!(run.zero_rows(), zero_row_count);
        }

        #[test]
        fn determinant_is_multiplicative(a in matrix(3, 3), b in matrix(3, 3)) {
            let product = a.dot(&b).unwrap();
            prop_assert_eq!(
                product.det().unwrap(),
                a.det().unwrap() * b.det().unwrap()
            );
        }

        #[test]
        fn inverse_times_original_is_identity(m in square_matrix()) {
            match m.inverse() {
                Ok(inv) => {
                    prop_assert!(m.dot(&inv).unwrap().is_identity());
                    prop_assert!(inv.dot(&m).unwrap().is_identity());
                }
                Err(MatrixError::SingularMatrix) => {
                    prop_assert!(m.det().unwrap().is_zero());
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        #[test]
        fn inverse_fails_exactly_on_rank_deficiency(m in square_matrix()) {
            let singular = m.gauss_jordan().zero_rows() > 0;
            prop_assert_eq!(
                m.inverse().is_err(),
                singular
            );
        }
    }
}
