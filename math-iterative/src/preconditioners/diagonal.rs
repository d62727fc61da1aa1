//! Diagonal (Jacobi) preconditioner
//!
//! Simple but effective preconditioner that scales by the diagonal of A.

use crate::error::Result;
use crate::traits::{Preconditioner, RealField};
use crate::validation::checked_diagonal;
use ndarray::{Array1, Array2};

/// Diagonal (Jacobi) preconditioner
///
/// P = diag(A), so z_i = r_i / A_ii
#[derive(Debug, Clone)]
pub struct DiagonalPreconditioner<T: RealField> {
    /// Inverse diagonal elements
    inv_diag: Array1<T>,
}

impl<T: RealField> DiagonalPreconditioner<T> {
    /// Create a diagonal preconditioner from a dense matrix
    ///
    /// Fails if any diagonal entry is zero or negligible.
    pub fn from_dense(matrix: &Array2<T>) -> Result<Self> {
        let diag = checked_diagonal(matrix)?;
        Ok(Self {
            inv_diag: diag.mapv(|d| T::one() / d),
        })
    }

    /// Create from inverse diagonal vector directly
    pub fn from_inverse_diagonal(inv_diag: Array1<T>) -> Self {
        Self { inv_diag }
    }
}

impl<T: RealField> Preconditioner<T> for DiagonalPreconditioner<T> {
    fn apply(&self, r: &Array1<T>) -> Array1<T> {
        r.iter()
            .zip(self.inv_diag.iter())
            .map(|(&ri, &di)| ri * di)
            .collect()
    }

    fn dim(&self) -> Option<usize> {
        Some(self.inv_diag.len())
    }
}
