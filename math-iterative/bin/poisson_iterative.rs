//! Compare the iterative solvers on the 1-D Poisson problem
//!
//! Usage:
//!     cargo run --bin poisson-iterative --release -- --points 33
//!     cargo run --bin poisson-iterative --release -- --config run.json --report out.json

use anyhow::Context;
use clap::{Parser, ValueEnum};
use math_iterative::{Method, PreconditionerKind, RunConfig, run};

#[derive(Parser, Debug)]
#[command(
    name = "poisson-iterative",
    about = "Solve the 1-D Poisson finite-difference system with iterative methods"
)]
struct Cli {
    /// JSON run configuration (defaults are used for anything it omits)
    #[arg(long)]
    config: Option<String>,

    /// Number of grid points, boundaries included
    #[arg(long)]
    points: Option<usize>,

    /// Maximum number of iterations per method
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Absolute tolerance on the residual norm
    #[arg(long)]
    tolerance: Option<f64>,

    /// Method to run (repeatable; default: all)
    #[arg(long, value_enum)]
    method: Vec<CliMethod>,

    /// Preconditioner for steepest descent and CG
    #[arg(long, value_enum)]
    preconditioner: Option<CliPreconditioner>,

    /// Write a JSON report to this path
    #[arg(long)]
    report: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliMethod {
    Jacobi,
    GaussSeidel,
    Gradient,
    Cg,
}

impl From<CliMethod> for Method {
    fn from(m: CliMethod) -> Self {
        match m {
            CliMethod::Jacobi => Method::Jacobi,
            CliMethod::GaussSeidel => Method::GaussSeidel,
            CliMethod::Gradient => Method::Gradient,
            CliMethod::Cg => Method::ConjugateGradient,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CliPreconditioner {
    Identity,
    Diagonal,
    Exact,
}

impl From<CliPreconditioner> for PreconditionerKind {
    fn from(p: CliPreconditioner) -> Self {
        match p {
            CliPreconditioner::Identity => PreconditionerKind::Identity,
            CliPreconditioner::Diagonal => PreconditionerKind::Diagonal,
            CliPreconditioner::Exact => PreconditionerKind::Exact,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => RunConfig::default(),
    };

    if let Some(points) = args.points {
        config.problem.points = points;
    }
    if let Some(max_iterations) = args.max_iterations {
        config.solver.max_iterations = max_iterations;
    }
    if let Some(tolerance) = args.tolerance {
        config.solver.tolerance = tolerance;
    }
    if !args.method.is_empty() {
        config.solver.methods = args.method.iter().map(|&m| m.into()).collect();
    }
    if let Some(preconditioner) = args.preconditioner {
        config.solver.preconditioner = preconditioner.into();
    }
    if args.report.is_some() {
        config.report = args.report.clone();
    }

    let report = run(&config)?;

    println!(
        "1-D Poisson, N = {}, h = {:.4e}, tolerance = {:.1e}",
        report.points, report.spacing, config.solver.tolerance
    );
    println!(
        "{:<20} {:>10} {:>14} {:>14} {:>10}",
        "method", "iterations", "residual", "||b - Ax||", "converged"
    );
    for m in &report.methods {
        println!(
            "{:<20} {:>10} {:>14.4e} {:>14.4e} {:>10}",
            m.method.name(),
            m.iterations,
            m.residual,
            m.true_residual,
            m.converged
        );
    }

    if let Some(path) = &config.report {
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(path, json).with_context(|| format!("writing report to {}", path))?;
        println!("Report written to {}", path);
    }

    Ok(())
}
