//! Iterative solvers for linear systems
//!
//! Stationary methods, which need the matrix entries:
//! - [`jacobi`]: Jacobi (optionally weighted)
//! - [`gauss_seidel`]: Gauss-Seidel (SOR with relaxation ≠ 1)
//!
//! Gradient methods for symmetric positive definite systems, written against
//! [`LinearOperator`](crate::traits::LinearOperator):
//! - [`steepest_descent`] / [`gradient_descent`]: steepest descent, optionally preconditioned
//! - [`cg`] / [`pcg`]: Conjugate Gradient, optionally preconditioned

mod cg;
mod config;
mod gauss_seidel;
mod gradient;
mod jacobi;

pub use cg::{cg, pcg};
pub use config::{IterationConfig, IterativeSolution, zero_guess};
pub use gauss_seidel::gauss_seidel;
pub use gradient::{gradient_descent, steepest_descent};
pub use jacobi::jacobi;
