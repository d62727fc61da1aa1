//! Input validation shared by the solvers
//!
//! Checks run once, before any iteration, so that bad inputs fail with a
//! [`SolverError`] instead of producing NaN/Inf iterates.

use crate::error::{Result, SolverError};
use crate::traits::{LinearOperator, Preconditioner, RealField};
use ndarray::{Array1, Array2};

/// Check that `operator` is square and that `b` and `x0` match its size.
pub fn validate_system<T, A>(operator: &A, b: &Array1<T>, x0: &Array1<T>) -> Result<usize>
where
    T: RealField,
    A: LinearOperator<T> + ?Sized,
{
    let n = operator.num_rows();
    if !operator.is_square() {
        return Err(SolverError::NotSquare {
            rows: n,
            cols: operator.num_cols(),
        });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    if x0.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: x0.len(),
        });
    }
    Ok(n)
}

/// Check that a preconditioner with a fixed size matches the system size.
pub fn validate_preconditioner<T, P>(preconditioner: &P, n: usize) -> Result<()>
where
    T: RealField,
    P: Preconditioner<T> + ?Sized,
{
    match preconditioner.dim() {
        Some(dim) if dim != n => Err(SolverError::DimensionMismatch {
            expected: n,
            got: dim,
        }),
        _ => Ok(()),
    }
}

/// Extract the diagonal of `a`, rejecting zero or negligible entries.
///
/// An entry is negligible when `|a_ii| <= eps * max_j |a_ij|`, i.e. it is
/// lost in rounding next to the rest of its row.
pub fn checked_diagonal<T: RealField>(a: &Array2<T>) -> Result<Array1<T>> {
    if a.nrows() != a.ncols() {
        return Err(SolverError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }

    let mut diag = Array1::zeros(a.nrows());
    for (i, row) in a.outer_iter().enumerate() {
        let d = row[i];
        let row_max = row.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
        if !d.is_finite() || d == T::zero() || d.abs() <= T::epsilon() * row_max {
            return Err(SolverError::ZeroDiagonal {
                row: i,
                value: d.to_real(),
            });
        }
        diag[i] = d;
    }
    Ok(diag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_validate_system_ok() {
        let a = Array2::<f64>::eye(3);
        let b = Array1::zeros(3);
        let x0 = Array1::ones(3);
        assert_eq!(validate_system(&a, &b, &x0), Ok(3));
    }

    #[test]
    fn test_validate_system_mismatch() {
        let a = Array2::<f64>::eye(3);
        let b = Array1::zeros(4);
        let x0 = Array1::zeros(3);
        assert_eq!(
            validate_system(&a, &b, &x0),
            Err(SolverError::DimensionMismatch {
                expected: 3,
                got: 4
            })
        );

        let rect = Array2::<f64>::zeros((3, 2));
        let b = Array1::zeros(3);
        assert_eq!(
            validate_system(&rect, &b, &x0),
            Err(SolverError::NotSquare { rows: 3, cols: 2 })
        );
    }

    #[test]
    fn test_validate_preconditioner() {
        use crate::preconditioners::{DiagonalPreconditioner, IdentityPreconditioner};

        assert_eq!(
            validate_preconditioner::<f64, _>(&IdentityPreconditioner, 5),
            Ok(())
        );

        let diag = DiagonalPreconditioner::from_inverse_diagonal(Array1::<f64>::ones(4));
        assert_eq!(validate_preconditioner(&diag, 4), Ok(()));
        assert_eq!(
            validate_preconditioner(&diag, 5),
            Err(SolverError::DimensionMismatch {
                expected: 5,
                got: 4
            })
        );
    }

    #[test]
    fn test_checked_diagonal() {
        let a = array![[4.0_f64, -1.0], [-1.0, 2.0]];
        let diag = checked_diagonal(&a).unwrap();
        assert_eq!(diag, array![4.0, 2.0]);
    }

    #[test]
    fn test_checked_diagonal_zero() {
        let a = array![[1.0_f64, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]];
        assert_eq!(
            checked_diagonal(&a),
            Err(SolverError::ZeroDiagonal { row: 1, value: 0.0 })
        );
    }

    #[test]
    fn test_checked_diagonal_negligible() {
        let a = array![[1e-20_f64, 1.0], [1.0, 1.0]];
        assert!(matches!(
            checked_diagonal(&a),
            Err(SolverError::ZeroDiagonal { row: 0, .. })
        ));
    }
}
