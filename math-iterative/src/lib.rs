//! Iterative solvers for finite-difference Poisson systems
//!
//! This crate assembles the 1-D Poisson second-difference system with
//! Dirichlet boundaries and solves it with classic iterative methods.
//!
//! # Features
//!
//! - **Stationary Solvers**: Jacobi (weighted), Gauss-Seidel (SOR)
//! - **Gradient Solvers**: Steepest descent, Conjugate Gradient, both optionally preconditioned
//! - **Preconditioners**: Identity, diagonal, exact solve with a given matrix
//! - **Direct Solver**: LU decomposition, used for exact preconditioning
//! - **Generic Scalar Types**: Works with f64, f32
//!
//! Every solver takes an explicit initial guess and returns the iterate
//! together with the iteration count and final residual norm. Hitting the
//! iteration cap is reported through `converged = false`, not as an error.
//!
//! # Example
//!
//! ```
//! use math_iterative::{DirichletValues, IterationConfig, PoissonProblem, SourceTerm, cg, zero_guess};
//!
//! let problem: PoissonProblem<f64> = PoissonProblem::on_interval(
//!     33,
//!     0.0,
//!     1.0,
//!     &SourceTerm::Exponential,
//!     DirichletValues::homogeneous(),
//! )?;
//! let (a, b) = problem.system();
//!
//! let solution = cg(&a, &b, &zero_guess(problem.size()), &IterationConfig::default())?;
//! assert!(solution.converged);
//! assert!(solution.iterations <= problem.size());
//! # Ok::<(), math_iterative::SolverError>(())
//! ```

pub mod blas_helpers;
pub mod config;
pub mod direct;
pub mod error;
pub mod iterative;
pub mod poisson;
pub mod preconditioners;
pub mod runner;
pub mod traits;
pub mod validation;

// Re-export main types
pub use error::{Result, SolverError};
pub use poisson::{DirichletValues, PoissonProblem, SourceTerm, apply_dirichlet};
pub use traits::{LinearOperator, Preconditioner, RealField};

// Re-export iterative solvers
pub use iterative::{
    IterationConfig, IterativeSolution, cg, gauss_seidel, gradient_descent, jacobi, pcg,
    steepest_descent, zero_guess,
};

// Re-export direct solvers
pub use direct::{LuFactorization, lu_solve};

// Re-export preconditioners
pub use preconditioners::{DiagonalPreconditioner, IdentityPreconditioner, MatrixPreconditioner};

// Re-export run configuration
pub use config::{ConfigError, InitialGuess, Method, PreconditionerKind, RunConfig};
pub use runner::{MethodReport, RunReport, run};
