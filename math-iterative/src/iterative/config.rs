//! Configuration and result types shared by the iterative solvers

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::Array1;

/// Iterative solver configuration
///
/// Every solver stops at the first iteration whose absolute residual norm
/// `||b - A x||_2` is at most `tolerance`, or after `max_iterations` updates.
#[derive(Debug, Clone)]
pub struct IterationConfig<R> {
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual 2-norm
    pub tolerance: R,
    /// Relaxation factor ω (weighted Jacobi, SOR); ignored by the gradient solvers
    pub relaxation: R,
    /// Print progress every N iterations (0 = no output)
    pub print_interval: usize,
    /// Keep the residual norm of every iteration in the solution
    pub record_history: bool,
}

impl Default for IterationConfig<f64> {
    fn default() -> Self {
        Self {
            max_iterations: 20_000,
            tolerance: 1e-10,
            relaxation: 1.0,
            print_interval: 0,
            record_history: false,
        }
    }
}

impl<R: RealField> IterationConfig<R> {
    /// Configuration with the given cap and tolerance, no relaxation, no output
    pub fn new(max_iterations: usize, tolerance: R) -> Self {
        Self {
            max_iterations,
            tolerance,
            relaxation: R::one(),
            print_interval: 0,
            record_history: false,
        }
    }

    /// Set the relaxation factor ω
    pub fn with_relaxation(mut self, relaxation: R) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Log progress every `interval` iterations
    pub fn with_print_interval(mut self, interval: usize) -> Self {
        self.print_interval = interval;
        self
    }

    /// Record the residual norm at every iteration
    pub fn with_history(mut self) -> Self {
        self.record_history = true;
        self
    }

    /// Reject a negative or non-finite tolerance and ω outside (0, 2).
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < R::zero() {
            return Err(SolverError::InvalidParameter(format!(
                "tolerance must be finite and non-negative, got {:e}",
                self.tolerance.to_real()
            )));
        }
        let two = R::one() + R::one();
        if !(self.relaxation > R::zero() && self.relaxation < two) {
            return Err(SolverError::InvalidParameter(format!(
                "relaxation must lie in (0, 2), got {}",
                self.relaxation.to_real()
            )));
        }
        Ok(())
    }
}

/// Iterative solver result
#[derive(Debug, Clone)]
pub struct IterativeSolution<T: RealField> {
    /// Solution vector
    pub x: Array1<T>,
    /// Number of iterations
    pub iterations: usize,
    /// Final absolute residual norm
    pub residual: T,
    /// Whether convergence was achieved
    pub converged: bool,
    /// Residual norm before each update and after the last one
    /// (empty unless `record_history` was set)
    pub residual_history: Vec<T>,
}

/// Initial guess x0 = 0, the usual default for the solvers
pub fn zero_guess<T: RealField>(n: usize) -> Array1<T> {
    Array1::zeros(n)
}

/// Tracks the residual across iterations: convergence test, history and logging.
pub(crate) struct ResidualMonitor<'a, T: RealField> {
    method: &'static str,
    config: &'a IterationConfig<T>,
    history: Vec<T>,
}

impl<'a, T: RealField> ResidualMonitor<'a, T> {
    pub(crate) fn new(method: &'static str, config: &'a IterationConfig<T>) -> Self {
        let history = if config.record_history {
            Vec::with_capacity(config.max_iterations.min(4096) + 1)
        } else {
            Vec::new()
        };
        Self {
            method,
            config,
            history,
        }
    }

    /// Record the residual after `iteration` updates and return whether it
    /// meets the tolerance.
    pub(crate) fn check(&mut self, iteration: usize, residual: T) -> Result<bool> {
        if !residual.is_finite() {
            return Err(SolverError::NonFinite { iteration });
        }
        if self.config.record_history {
            self.history.push(residual);
        }
        if self.config.print_interval > 0
            && iteration > 0
            && iteration % self.config.print_interval == 0
        {
            log::info!(
                "{} iteration {}: residual = {:.6e}",
                self.method,
                iteration,
                residual.to_real()
            );
        }
        Ok(residual <= self.config.tolerance)
    }

    pub(crate) fn finish(
        self,
        x: Array1<T>,
        iterations: usize,
        residual: T,
        converged: bool,
    ) -> IterativeSolution<T> {
        if converged {
            log::debug!(
                "{} converged in {} iterations (residual = {:.3e})",
                self.method,
                iterations,
                residual.to_real()
            );
        } else {
            log::warn!(
                "{} stopped at the iteration cap {} (residual = {:.3e}, tolerance = {:.3e})",
                self.method,
                iterations,
                residual.to_real(),
                self.config.tolerance.to_real()
            );
        }
        IterativeSolution {
            x,
            iterations,
            residual,
            converged,
            residual_history: self.history,
        }
    }
}
