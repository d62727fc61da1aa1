//! Preconditioners for the gradient-family solvers
//!
//! Applying a preconditioner P to a residual r returns z with P z = r.
//!
//! # Available Preconditioners
//!
//! - **IdentityPreconditioner**: z = r, plain steepest descent / CG
//! - **DiagonalPreconditioner** (Jacobi): Simple diagonal scaling
//! - **MatrixPreconditioner**: Exact solve with a user-supplied matrix

mod diagonal;
mod matrix;

pub use diagonal::DiagonalPreconditioner;
pub use matrix::MatrixPreconditioner;

// Re-export IdentityPreconditioner from traits
pub use crate::traits::IdentityPreconditioner;
