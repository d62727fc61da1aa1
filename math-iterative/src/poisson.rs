//! 1-D Poisson finite-difference system
//!
//! Assembles the second-difference discretization of `-u'' = f` on a
//! uniform grid of `n` points with spacing `h`:
//!
//! ```text
//! (-u_{i-1} + 2 u_i - u_{i+1}) / h² = f_i
//! ```
//!
//! and imposes Dirichlet values at both end points by row/column
//! elimination, which keeps the matrix symmetric positive definite.

use crate::error::{Result, SolverError};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Right-hand side f(x) of `-u'' = f`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceTerm {
    /// f(x) = value
    #[serde(rename = "constant")]
    Constant {
        /// Constant value
        value: f64,
    },
    /// f(x) = exp(x)
    #[default]
    #[serde(rename = "exponential")]
    Exponential,
    /// f(x) = sin(k x)
    #[serde(rename = "sine")]
    Sine {
        /// Wave number k
        wave_number: f64,
    },
    /// f(x) = Σ c_k x^k
    #[serde(rename = "polynomial")]
    Polynomial {
        /// Coefficients, lowest degree first
        coefficients: Vec<f64>,
    },
}

impl SourceTerm {
    /// Evaluate f at `x`
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            SourceTerm::Constant { value } => *value,
            SourceTerm::Exponential => x.exp(),
            SourceTerm::Sine { wave_number } => (wave_number * x).sin(),
            SourceTerm::Polynomial { coefficients } => coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, &c| acc * x + c),
        }
    }

    /// Sample f on `points`
    pub fn sample<T: RealField>(&self, points: &Array1<T>) -> Array1<T> {
        points.mapv(|x| T::from_real(self.evaluate(x.to_real())))
    }
}

/// Prescribed values u(x_min) and u(x_max)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DirichletValues {
    /// Value at the first grid point
    #[serde(default)]
    pub left: f64,
    /// Value at the last grid point
    #[serde(default)]
    pub right: f64,
}

impl DirichletValues {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// u = 0 at both ends
    pub fn homogeneous() -> Self {
        Self::default()
    }
}

/// Assembled 1-D Poisson system `A u = b`
#[derive(Debug, Clone)]
pub struct PoissonProblem<T: RealField> {
    matrix: Array2<T>,
    rhs: Array1<T>,
    origin: T,
    spacing: T,
    dirichlet: DirichletValues,
}

impl<T: RealField> PoissonProblem<T> {
    /// Assemble the system from source samples `f_i` at `n` points spaced `h` apart
    ///
    /// # Errors
    ///
    /// `n < 3`, a non-positive or non-finite `h`, `source.len() != n`, or a
    /// non-finite source sample or boundary value.
    pub fn assemble(
        n: usize,
        h: T,
        source: &Array1<T>,
        dirichlet: DirichletValues,
    ) -> Result<Self> {
        if n < 3 {
            return Err(SolverError::InvalidParameter(format!(
                "need at least 3 grid points, got {}",
                n
            )));
        }
        if !h.is_finite() || h <= T::zero() {
            return Err(SolverError::InvalidParameter(format!(
                "grid spacing must be positive and finite, got {}",
                h.to_real()
            )));
        }
        if source.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: source.len(),
            });
        }
        if let Some(i) = source.iter().position(|v| !v.is_finite()) {
            return Err(SolverError::InvalidParameter(format!(
                "source sample {} is not finite",
                i
            )));
        }
        if !dirichlet.left.is_finite() || !dirichlet.right.is_finite() {
            return Err(SolverError::InvalidParameter(
                "Dirichlet values must be finite".to_string(),
            ));
        }

        let inv_h2 = T::one() / (h * h);
        let diag = (T::one() + T::one()) * inv_h2;

        let mut matrix = Array2::zeros((n, n));
        for i in 0..n {
            matrix[[i, i]] = diag;
            if i > 0 {
                matrix[[i, i - 1]] = -inv_h2;
            }
            if i + 1 < n {
                matrix[[i, i + 1]] = -inv_h2;
            }
        }
        let mut rhs = source.clone();

        apply_dirichlet(&mut matrix, &mut rhs, 0, T::from_real(dirichlet.left))?;
        apply_dirichlet(&mut matrix, &mut rhs, n - 1, T::from_real(dirichlet.right))?;

        log::debug!(
            "Assembled 1-D Poisson system: n = {}, h = {:.4e}, u(left) = {}, u(right) = {}",
            n,
            h.to_real(),
            dirichlet.left,
            dirichlet.right
        );

        Ok(Self {
            matrix,
            rhs,
            origin: T::zero(),
            spacing: h,
            dirichlet,
        })
    }

    /// Assemble the system on `[x_min, x_max]` with `n` points, sampling `source`
    pub fn on_interval(
        n: usize,
        x_min: f64,
        x_max: f64,
        source: &SourceTerm,
        dirichlet: DirichletValues,
    ) -> Result<Self> {
        if n < 2 || !(x_max > x_min) {
            return Err(SolverError::InvalidParameter(format!(
                "invalid interval [{}, {}] with {} points",
                x_min, x_max, n
            )));
        }
        let h = (x_max - x_min) / (n - 1) as f64;
        let origin = T::from_real(x_min);
        let spacing = T::from_real(h);

        let grid = Array1::from_iter((0..n).map(|i| origin + T::from_real(i as f64) * spacing));
        let samples = source.sample(&grid);

        let mut problem = Self::assemble(n, spacing, &samples, dirichlet)?;
        problem.origin = origin;
        Ok(problem)
    }

    /// Number of grid points
    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Grid spacing h
    pub fn spacing(&self) -> T {
        self.spacing
    }

    /// Boundary values imposed on the system
    pub fn dirichlet(&self) -> DirichletValues {
        self.dirichlet
    }

    /// Grid points x_i = x_min + i h
    pub fn grid(&self) -> Array1<T> {
        Array1::from_iter(
            (0..self.size()).map(|i| self.origin + T::from_real(i as f64) * self.spacing),
        )
    }

    /// System matrix A
    pub fn matrix(&self) -> &Array2<T> {
        &self.matrix
    }

    /// Right-hand side b
    pub fn rhs(&self) -> &Array1<T> {
        &self.rhs
    }

    /// Fresh copies of (A, b), independent of this problem's storage
    pub fn system(&self) -> (Array2<T>, Array1<T>) {
        (self.matrix.clone(), self.rhs.clone())
    }
}

/// Impose u[node] = value on `A u = b` by row and column elimination
///
/// - b[j] -= A[j, node] * value for every other row j (keeps symmetry)
/// - A[node, :] = 0, A[:, node] = 0, A[node, node] = 1
/// - b[node] = value
pub fn apply_dirichlet<T: RealField>(
    matrix: &mut Array2<T>,
    rhs: &mut Array1<T>,
    node: usize,
    value: T,
) -> Result<()> {
    let n = rhs.len();
    if matrix.nrows() != n || matrix.ncols() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: matrix.nrows().max(matrix.ncols()),
        });
    }
    if node >= n {
        return Err(SolverError::InvalidParameter(format!(
            "boundary node {} out of range for {} unknowns",
            node, n
        )));
    }

    if value != T::zero() {
        for j in 0..n {
            if j != node {
                let coupling = matrix[[j, node]];
                rhs[j] -= coupling * value;
            }
        }
    }

    matrix.row_mut(node).fill(T::zero());
    matrix.column_mut(node).fill(T::zero());
    matrix[[node, node]] = T::one();
    rhs[node] = value;

    Ok(())
}
