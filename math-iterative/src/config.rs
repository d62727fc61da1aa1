//! JSON configuration for solver runs

use crate::iterative::IterationConfig;
use crate::poisson::{DirichletValues, SourceTerm};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors while reading or writing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete run configuration loaded from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Problem to assemble
    #[serde(default)]
    pub problem: ProblemConfig,
    /// Solver settings
    #[serde(default)]
    pub solver: SolverConfig,
    /// Where to write the JSON report (none = no report)
    #[serde(default)]
    pub report: Option<String>,
}

/// 1-D Poisson problem configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Number of grid points, boundaries included
    #[serde(default = "default_points")]
    pub points: usize,
    /// Left end of the interval
    #[serde(default)]
    pub x_min: f64,
    /// Right end of the interval
    #[serde(default = "default_x_max")]
    pub x_max: f64,
    /// Source term f of -u'' = f
    #[serde(default)]
    pub source: SourceTerm,
    /// Dirichlet values at both ends
    #[serde(default)]
    pub boundary: DirichletValues,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
            x_min: 0.0,
            x_max: default_x_max(),
            source: SourceTerm::default(),
            boundary: DirichletValues::default(),
        }
    }
}

fn default_points() -> usize {
    33
}

fn default_x_max() -> f64 {
    1.0
}

/// Iterative method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Jacobi,
    GaussSeidel,
    Gradient,
    ConjugateGradient,
}

impl Method {
    /// All methods, in the order they are usually compared
    pub fn all() -> Vec<Method> {
        vec![
            Method::Jacobi,
            Method::GaussSeidel,
            Method::Gradient,
            Method::ConjugateGradient,
        ]
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Method::Jacobi => "Jacobi",
            Method::GaussSeidel => "Gauss-Seidel",
            Method::Gradient => "Steepest descent",
            Method::ConjugateGradient => "Conjugate gradient",
        }
    }
}

/// Preconditioner used by the gradient methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreconditionerKind {
    #[default]
    Identity,
    Diagonal,
    /// P = A, solved exactly
    Exact,
}

/// Initial iterate x0
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialGuess {
    #[default]
    Zeros,
    Ones,
    Constant(f64),
}

impl InitialGuess {
    /// Value of every component of x0
    pub fn value(&self) -> f64 {
        match self {
            InitialGuess::Zeros => 0.0,
            InitialGuess::Ones => 1.0,
            InitialGuess::Constant(v) => *v,
        }
    }
}

/// Solver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Methods to run
    #[serde(default = "Method::all")]
    pub methods: Vec<Method>,
    /// Maximum number of iterations
    #[serde(default = "default_max_iter")]
    pub max_iterations: usize,
    /// Absolute tolerance on ||b - A x||_2
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Relaxation factor for Jacobi / Gauss-Seidel
    #[serde(default = "default_relaxation")]
    pub relaxation: f64,
    /// Preconditioner for the gradient methods
    #[serde(default)]
    pub preconditioner: PreconditionerKind,
    /// Initial guess
    #[serde(default)]
    pub initial_guess: InitialGuess,
    /// Log progress every N iterations (0 = no output)
    #[serde(default)]
    pub print_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            methods: Method::all(),
            max_iterations: default_max_iter(),
            tolerance: default_tolerance(),
            relaxation: default_relaxation(),
            preconditioner: PreconditionerKind::default(),
            initial_guess: InitialGuess::default(),
            print_interval: 0,
        }
    }
}

impl SolverConfig {
    /// Iteration settings shared by every method
    pub fn iteration_config(&self) -> IterationConfig<f64> {
        IterationConfig::new(self.max_iterations, self.tolerance)
            .with_relaxation(self.relaxation)
            .with_print_interval(self.print_interval)
    }
}

fn default_max_iter() -> usize {
    20_000
}

fn default_tolerance() -> f64 {
    1e-10
}

fn default_relaxation() -> f64 {
    1.0
}

impl RunConfig {
    /// Load configuration from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Save configuration to JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
