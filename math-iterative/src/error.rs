//! Error types for the solver crate
//!
//! Non-convergence within the iteration cap is reported through
//! [`IterativeSolution::converged`](crate::iterative::IterativeSolution),
//! not through this type.

use thiserror::Error;

/// Result type alias using [`SolverError`]
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors that can occur while building or solving a system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Vector or matrix dimensions do not agree
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The system matrix is not square
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A diagonal entry is zero or negligible relative to its row
    #[error("Diagonal entry at row {row} is zero or nearly zero ({value:e})")]
    ZeroDiagonal { row: usize, value: f64 },

    /// Non-positive curvature along a search direction
    #[error("Matrix is not positive definite: curvature {curvature:e} at iteration {iteration}")]
    NotPositiveDefinite { iteration: usize, curvature: f64 },

    /// LU factorization hit a zero pivot
    #[error("Matrix is singular or nearly singular")]
    SingularMatrix,

    /// The residual norm became NaN or infinite
    #[error("Residual became non-finite at iteration {iteration}")]
    NonFinite { iteration: usize },

    /// A builder or configuration parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
