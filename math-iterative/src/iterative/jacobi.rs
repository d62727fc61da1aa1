//! Jacobi iteration
//!
//! Fixed-point iteration that computes every component of the new iterate
//! from the previous iterate only:
//!
//! x_i^(k+1) = (b_i - Σ_{j≠i} A_ij x_j^(k)) / A_ii
//!
//! Converges for strictly or irreducibly diagonally dominant matrices, which
//! includes the finite-difference Laplacian.

use super::config::{IterationConfig, IterativeSolution, ResidualMonitor};
use crate::blas_helpers::residual_norm;
use crate::error::Result;
use crate::traits::RealField;
use crate::validation::{checked_diagonal, validate_system};
use ndarray::{Array1, Array2};

/// Solve Ax = b with (weighted) Jacobi iteration starting from `x0`
///
/// With `config.relaxation = ω != 1` each component is blended as
/// `(1 - ω) x_i + ω x_i^jacobi`.
///
/// Reaching `max_iterations` is not an error: the last iterate is returned
/// with `converged = false`.
///
/// # Errors
///
/// Dimension mismatches, a zero or negligible diagonal entry, and a
/// non-finite residual.
pub fn jacobi<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x0: &Array1<T>,
    config: &IterationConfig<T>,
) -> Result<IterativeSolution<T>> {
    validate_system(a, b, x0)?;
    config.validate()?;
    let diag = checked_diagonal(a)?;

    let omega = config.relaxation;
    let weighted = omega != T::one();
    let mut monitor = ResidualMonitor::new("Jacobi", config);

    let mut x = x0.clone();
    let mut x_next = x0.clone();

    for iter in 0..config.max_iterations {
        let residual = residual_norm(a, b, &x);
        if monitor.check(iter, residual)? {
            return Ok(monitor.finish(x, iter, residual, true));
        }

        for (i, row) in a.outer_iter().enumerate() {
            let mut sigma = T::zero();
            for (j, (&aij, &xj)) in row.iter().zip(x.iter()).enumerate() {
                if j != i {
                    sigma += aij * xj;
                }
            }
            let xi = (b[i] - sigma) / diag[i];
            x_next[i] = if weighted {
                (T::one() - omega) * x[i] + omega * xi
            } else {
                xi
            };
        }

        std::mem::swap(&mut x, &mut x_next);
    }

    let residual = residual_norm(a, b, &x);
    let converged = monitor.check(config.max_iterations, residual)?;
    Ok(monitor.finish(x, config.max_iterations, residual, converged))
}
