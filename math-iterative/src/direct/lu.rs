//! LU decomposition solver
//!
//! LU factorization with partial pivoting for dense systems. The gradient
//! solvers use it to apply a preconditioner supplied as a full matrix.

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// LU factorization result
///
/// Stores L and U factors along with pivot information
#[derive(Debug, Clone)]
pub struct LuFactorization<T: RealField> {
    /// Combined L and U matrices (L is unit lower triangular, stored below diagonal)
    pub lu: Array2<T>,
    /// Pivot indices
    pub pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl<T: RealField> LuFactorization<T> {
    /// Solve Ax = b using the pre-computed LU factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        if b.len() != self.n {
            return Err(SolverError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }
        Ok(self.solve_unchecked(b))
    }

    /// Forward and backward substitution without the length check
    ///
    /// `lu_factorize` rejects any pivot below the singularity threshold, so
    /// the divisions are safe. Panics if `b` is shorter than `n`.
    pub(crate) fn solve_unchecked(&self, b: &Array1<T>) -> Array1<T> {
        // Row i of the factored matrix is row pivots[i] of A
        let mut x: Array1<T> = self.pivots.iter().map(|&p| b[p]).collect();

        // Forward substitution: Ly = Pb
        for i in 0..self.n {
            for j in 0..i {
                let l_ij = self.lu[[i, j]];
                x[i] = x[i] - l_ij * x[j];
            }
        }

        // Backward substitution: Ux = y
        for i in (0..self.n).rev() {
            for j in (i + 1)..self.n {
                let u_ij = self.lu[[i, j]];
                x[i] = x[i] - u_ij * x[j];
            }
            x[i] /= self.lu[[i, i]];
        }

        x
    }
}

/// Compute LU factorization with partial pivoting
pub fn lu_factorize<T: RealField>(a: &Array2<T>) -> Result<LuFactorization<T>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(SolverError::NotSquare {
            rows: n,
            cols: a.ncols(),
        });
    }

    let mut lu = a.clone();
    let mut pivots: Vec<usize> = (0..n).collect();

    for k in 0..n {
        // Find pivot
        let mut max_val = lu[[k, k]].abs();
        let mut max_row = k;

        for i in (k + 1)..n {
            let val = lu[[i, k]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_val.is_zero_approx(T::from_real(1e-30)) {
            return Err(SolverError::SingularMatrix);
        }

        if max_row != k {
            for j in 0..n {
                lu.swap([k, j], [max_row, j]);
            }
            pivots.swap(k, max_row);
        }

        // Compute multipliers and eliminate
        let pivot = lu[[k, k]];
        for i in (k + 1)..n {
            let mult = lu[[i, k]] / pivot;
            lu[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * lu[[k, j]];
                lu[[i, j]] -= update;
            }
        }
    }

    Ok(LuFactorization { lu, pivots, n })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lu_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let factorization = lu_factorize(a)?;
    factorization.solve(b)
}
