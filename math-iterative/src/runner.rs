//! Run the configured methods on one Poisson problem and collect diagnostics

use crate::blas_helpers::residual_norm;
use crate::config::{Method, PreconditionerKind, RunConfig};
use crate::error::Result;
use crate::iterative::{IterativeSolution, cg, gauss_seidel, gradient_descent, jacobi, pcg};
use crate::poisson::PoissonProblem;
use crate::preconditioners::{DiagonalPreconditioner, IdentityPreconditioner, MatrixPreconditioner};
use crate::traits::Preconditioner;
use ndarray::{Array1, Array2};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of one method on one problem
#[derive(Debug, Clone, Serialize)]
pub struct MethodReport {
    pub method: Method,
    /// Preconditioner, for the gradient methods
    pub preconditioner: Option<PreconditionerKind>,
    pub iterations: usize,
    /// Residual norm reported by the solver
    pub residual: f64,
    /// ||b - A x||_2 recomputed from the returned iterate
    pub true_residual: f64,
    pub converged: bool,
    /// x[0] and x[N-1]
    pub boundary_values: (f64, f64),
    pub duration_us: u64,
    pub solution: Vec<f64>,
}

/// Full run report
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub points: usize,
    pub spacing: f64,
    pub grid: Vec<f64>,
    pub methods: Vec<MethodReport>,
}

/// Assemble the configured problem and run every configured method on it
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let problem: PoissonProblem<f64> = PoissonProblem::on_interval(
        config.problem.points,
        config.problem.x_min,
        config.problem.x_max,
        &config.problem.source,
        config.problem.boundary,
    )?;

    let n = problem.size();
    let iteration = config.solver.iteration_config();
    let x0 = Array1::from_elem(n, config.solver.initial_guess.value());

    let mut methods = Vec::with_capacity(config.solver.methods.len());
    for &method in &config.solver.methods {
        // Each method gets its own copy of the system
        let (a, b) = problem.system();
        let start = Instant::now();

        let (solution, preconditioner) = match method {
            Method::Jacobi => (jacobi(&a, &b, &x0, &iteration)?, None),
            Method::GaussSeidel => (gauss_seidel(&a, &b, &x0, &iteration)?, None),
            Method::Gradient | Method::ConjugateGradient => {
                let kind = config.solver.preconditioner;
                let precond = build_preconditioner(kind, &a)?;
                let solution = if method == Method::Gradient {
                    gradient_descent(&a, &b, &x0, &*precond, &iteration)?
                } else if kind == PreconditionerKind::Identity {
                    cg(&a, &b, &x0, &iteration)?
                } else {
                    pcg(&a, &b, &x0, &*precond, &iteration)?
                };
                (solution, Some(kind))
            }
        };

        let duration_us = micros(start.elapsed());
        log::info!(
            "{}: {} iterations, residual = {:.3e}, converged = {}",
            method.name(),
            solution.iterations,
            solution.residual,
            solution.converged
        );
        methods.push(method_report(method, preconditioner, &a, &b, solution, duration_us));
    }

    Ok(RunReport {
        points: n,
        spacing: problem.spacing(),
        grid: problem.grid().to_vec(),
        methods,
    })
}

/// Whole microseconds, saturating at `u64::MAX`
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

fn build_preconditioner(
    kind: PreconditionerKind,
    a: &Array2<f64>,
) -> Result<Box<dyn Preconditioner<f64>>> {
    let precond: Box<dyn Preconditioner<f64>> = match kind {
        PreconditionerKind::Identity => Box::new(IdentityPreconditioner),
        PreconditionerKind::Diagonal => Box::new(DiagonalPreconditioner::from_dense(a)?),
        PreconditionerKind::Exact => Box::new(MatrixPreconditioner::new(a)?),
    };
    Ok(precond)
}

fn method_report(
    method: Method,
    preconditioner: Option<PreconditionerKind>,
    a: &Array2<f64>,
    b: &Array1<f64>,
    solution: IterativeSolution<f64>,
    duration_us: u64,
) -> MethodReport {
    let n = solution.x.len();
    MethodReport {
        method,
        preconditioner,
        iterations: solution.iterations,
        residual: solution.residual,
        true_residual: residual_norm(a, b, &solution.x),
        converged: solution.converged,
        boundary_values: (solution.x[0], solution.x[n - 1]),
        duration_us,
        solution: solution.x.to_vec(),
    }
}
