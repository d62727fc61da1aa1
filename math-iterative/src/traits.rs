//! Core traits for the iterative solvers
//!
//! This module defines the abstractions shared by every solver:
//! - [`RealField`]: Trait for the real scalar types the solvers run on
//! - [`LinearOperator`]: Trait for matrix-like objects that can perform matrix-vector products
//! - [`Preconditioner`]: Trait for preconditioning operations

use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for scalar types that can be used by the iterative solvers.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for the Poisson problems)
/// - `f32` (for memory-constrained applications)
pub trait RealField: Float + NumAssign + Send + Sync + Debug + 'static {
    /// Create from an `f64` constant
    fn from_real(r: f64) -> Self;

    /// Convert to `f64` for logging and reporting
    fn to_real(self) -> f64;

    /// Check if this is approximately zero
    fn is_zero_approx(&self, tol: Self) -> bool {
        self.abs() < tol
    }
}

impl RealField for f64 {
    #[inline]
    fn from_real(r: f64) -> Self {
        r
    }

    #[inline]
    fn to_real(self) -> f64 {
        self
    }
}

impl RealField for f32 {
    #[inline]
    fn from_real(r: f64) -> Self {
        r as f32
    }

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }
}

/// Trait for linear operators (matrices) that can perform matrix-vector products.
///
/// The gradient-family solvers only need `A * x`, so they are written against
/// this trait rather than a concrete storage format.
pub trait LinearOperator<T: RealField>: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator: y = A * x
    fn apply(&self, x: &Array1<T>) -> Array1<T>;

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}

impl<T: RealField> LinearOperator<T> for Array2<T> {
    fn num_rows(&self) -> usize {
        self.nrows()
    }

    fn num_cols(&self) -> usize {
        self.ncols()
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        self.dot(x)
    }
}

/// Trait for preconditioners used in the gradient-family solvers.
///
/// A preconditioner P approximates A, and applying it returns z with P z = r.
pub trait Preconditioner<T: RealField>: Send + Sync {
    /// Apply the preconditioner: solve P * z = r for z
    fn apply(&self, r: &Array1<T>) -> Array1<T>;

    /// Dimension of P, or `None` if it acts on vectors of any length
    fn dim(&self) -> Option<usize> {
        None
    }
}

/// Identity preconditioner (no preconditioning)
#[derive(Clone, Debug, Default)]
pub struct IdentityPreconditioner;

impl<T: RealField> Preconditioner<T> for IdentityPreconditioner {
    fn apply(&self, r: &Array1<T>) -> Array1<T> {
        r.clone()
    }
}
