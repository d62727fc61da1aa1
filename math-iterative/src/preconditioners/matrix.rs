//! Preconditioner given as an explicit matrix
//!
//! Applies P^(-1) exactly through an LU factorization computed once at
//! construction. With P = A the gradient solvers reduce to a direct solve.

use crate::direct::{LuFactorization, lu_factorize};
use crate::error::Result;
use crate::traits::{Preconditioner, RealField};
use ndarray::{Array1, Array2};

/// Exact-solve preconditioner for a dense matrix P
#[derive(Debug, Clone)]
pub struct MatrixPreconditioner<T: RealField> {
    factorization: LuFactorization<T>,
}

impl<T: RealField> MatrixPreconditioner<T> {
    /// Factorize `p`; fails if `p` is not square or is singular.
    pub fn new(p: &Array2<T>) -> Result<Self> {
        Ok(Self {
            factorization: lu_factorize(p)?,
        })
    }
}

impl<T: RealField> Preconditioner<T> for MatrixPreconditioner<T> {
    /// `r` must have the length reported by `dim`. Debug builds assert it,
    /// and a shorter `r` panics on indexing in any build.
    fn apply(&self, r: &Array1<T>) -> Array1<T> {
        // Pivots are checked in `new`; solvers check `dim` against the system
        debug_assert_eq!(r.len(), self.factorization.n, "preconditioner length mismatch");
        self.factorization.solve_unchecked(r)
    }

    fn dim(&self) -> Option<usize> {
        Some(self.factorization.n)
    }
}
