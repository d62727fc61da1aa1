//! CG (Conjugate Gradient) solver
//!
//! The Conjugate Gradient method for symmetric positive definite systems.
//! Search directions are A-conjugate, so in exact arithmetic an N×N system
//! is solved in at most N iterations.
//!
//! Preconditioned recurrence (z = P⁻¹ r):
//!
//! ```text
//! α = (r, z) / (p, A p)
//! x ← x + α p
//! r ← r - α A p
//! β = (r_new, z_new) / (r, z)
//! p ← z_new + β p
//! ```

use super::config::{IterationConfig, IterativeSolution, ResidualMonitor};
use crate::blas_helpers::{axpy, inner_product, residual, residual_norm, vector_norm};
use crate::error::{Result, SolverError};
use crate::traits::{IdentityPreconditioner, LinearOperator, Preconditioner, RealField};
use crate::validation::{validate_preconditioner, validate_system};
use ndarray::Array1;

/// Solve Ax = b using the Conjugate Gradient method
///
/// Note: This method is only correct for symmetric positive definite matrices.
pub fn cg<T, A>(
    operator: &A,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>>
where
    T: RealField,
    A: LinearOperator<T>,
{
    pcg(operator, b, x0, &IdentityPreconditioner, config)
}

/// Solve Ax = b using the preconditioned Conjugate Gradient method
///
/// Both A and P must be symmetric positive definite. When the recurrence
/// residual meets the tolerance it is replaced by `b - A x` and the
/// search continues from there if the true residual is still too large.
/// The returned `residual` is always `||b - A x||`. `config.relaxation`
/// is ignored.
///
/// # Errors
///
/// Dimension mismatches (system or preconditioner), non-positive curvature
/// `(p, A p) <= 0`, and a non-finite residual.
pub fn pcg<T, A, P>(
    operator: &A,
    b: &Array1<T>,
    x0: &Array1<T>,
    preconditioner: &P,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>>
where
    T: RealField,
    A: LinearOperator<T>,
    P: Preconditioner<T> + ?Sized,
{
    let n = validate_system(operator, b, x0)?;
    validate_preconditioner(preconditioner, n)?;
    config.validate()?;

    let mut monitor = ResidualMonitor::new("CG", config);

    let mut x = x0.clone();
    let mut r = residual(operator, b, &x);
    let mut r_norm = vector_norm(&r);

    let mut z = preconditioner.apply(&r);
    let mut p = z.clone();
    let mut rho = inner_product(&r, &z);

    for iter in 0..config.max_iterations {
        if monitor.check(iter, r_norm)? {
            return Ok(monitor.finish(x, iter, r_norm, true));
        }

        // q = A * p
        let q = operator.apply(&p);

        let pq = inner_product(&p, &q);
        if pq <= T::zero() {
            return Err(SolverError::NotPositiveDefinite {
                iteration: iter,
                curvature: pq.to_real(),
            });
        }

        let alpha = rho / pq;

        axpy(alpha, &p, &mut x);
        axpy(-alpha, &q, &mut r);
        r_norm = vector_norm(&r);

        if r_norm <= config.tolerance {
            // Residual replacement
            r = residual(operator, b, &x);
            r_norm = vector_norm(&r);
        }

        z = preconditioner.apply(&r);
        let rho_new = inner_product(&r, &z);
        let beta = rho_new / rho;
        rho = rho_new;

        // p = z + beta * p
        for (pi, &zi) in p.iter_mut().zip(z.iter()) {
            *pi = zi + beta * *pi;
        }
    }

    let r_norm = residual_norm(operator, b, &x);
    let converged = monitor.check(config.max_iterations, r_norm)?;
    Ok(monitor.finish(x, config.max_iterations, r_norm, converged))
}
