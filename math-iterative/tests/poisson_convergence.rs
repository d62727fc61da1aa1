//! Convergence tests on the assembled 1-D Poisson system
//!
//! N = 33 points on [0, 1], f(x) = exp(x), u(0) = u(1) = 0.

use approx::assert_relative_eq;
use math_iterative::{
    DiagonalPreconditioner, DirichletValues, IdentityPreconditioner, IterationConfig,
    IterativeSolution, MatrixPreconditioner, PoissonProblem, SolverError, SourceTerm, cg,
    gauss_seidel, gradient_descent, jacobi, lu_solve, pcg, steepest_descent, zero_guess,
};
use ndarray::{Array1, Array2};

const N: usize = 33;
const EPS: f64 = 1e-10;

fn sample_problem() -> PoissonProblem<f64> {
    PoissonProblem::on_interval(
        N,
        0.0,
        1.0,
        &SourceTerm::Exponential,
        DirichletValues::homogeneous(),
    )
    .expect("sample problem should assemble")
}

fn true_residual(a: &Array2<f64>, b: &Array1<f64>, x: &Array1<f64>) -> f64 {
    (b - &a.dot(x)).iter().map(|r| r * r).sum::<f64>().sqrt()
}

/// Every method either meets the tolerance or stops exactly at the cap
fn assert_terminated(solution: &IterativeSolution<f64>, config: &IterationConfig<f64>) {
    assert!(
        solution.residual <= config.tolerance || solution.iterations == config.max_iterations,
        "residual {:e} after {} iterations",
        solution.residual,
        solution.iterations
    );
}

fn all_solutions(x0: &Array1<f64>) -> Vec<(&'static str, IterativeSolution<f64>)> {
    let (a, b) = sample_problem().system();
    let config = IterationConfig::default();
    vec![
        ("jacobi", jacobi(&a, &b, x0, &config).unwrap()),
        ("gauss_seidel", gauss_seidel(&a, &b, x0, &config).unwrap()),
        ("gradient", steepest_descent(&a, &b, x0, &config).unwrap()),
        ("cg", cg(&a, &b, x0, &config).unwrap()),
    ]
}

#[test]
fn test_all_solvers_reach_tolerance() {
    let problem = sample_problem();
    let (a, b) = problem.system();
    let config = IterationConfig::default();

    for (name, solution) in all_solutions(&zero_guess(N)) {
        assert_terminated(&solution, &config);
        assert!(solution.converged, "{} did not converge", name);
        assert!(solution.residual <= EPS, "{}: residual {:e}", name, solution.residual);
        // The reported residual is ||b - A x|| of the returned iterate
        let true_res = true_residual(&a, &b, &solution.x);
        assert!(true_res <= EPS, "{}: true residual {:e}", name, true_res);
        assert_relative_eq!(solution.residual, true_res, epsilon = 1e-15);
    }
}

#[test]
fn test_solvers_agree_with_direct_solve() {
    let problem = sample_problem();
    let exact = lu_solve(problem.matrix(), problem.rhs()).unwrap();

    for (name, solution) in all_solutions(&zero_guess(N)) {
        for (xi, ei) in solution.x.iter().zip(exact.iter()) {
            assert_relative_eq!(*xi, *ei, epsilon = 1e-10);
        }
        assert!(solution.x.iter().all(|v| v.is_finite()), "{}", name);
    }
}

#[test]
fn test_boundary_values_are_preserved() {
    for (name, solution) in all_solutions(&zero_guess(N)) {
        assert_eq!(solution.x[0], 0.0, "{}", name);
        assert_eq!(solution.x[N - 1], 0.0, "{}", name);
    }

    // A guess that violates the boundary conditions is corrected by the
    // identity rows. Steepest descent is checked separately: the decoupled
    // boundary mode has eigenvalue 1, far below the interior spectrum, which
    // slows it down by an order of magnitude.
    let (a, b) = sample_problem().system();
    let x0 = Array1::ones(N);
    let config = IterationConfig::default();
    for solution in [
        jacobi(&a, &b, &x0, &config).unwrap(),
        gauss_seidel(&a, &b, &x0, &config).unwrap(),
        cg(&a, &b, &x0, &config).unwrap(),
    ] {
        assert!(solution.converged);
        assert_relative_eq!(solution.x[0], 0.0, epsilon = EPS);
        assert_relative_eq!(solution.x[N - 1], 0.0, epsilon = EPS);
    }

    // Steepest descent still terminates cleanly and pulls the boundary
    // entries toward the prescribed values, just not to full precision.
    let sd = steepest_descent(&a, &b, &x0, &config).unwrap();
    assert_terminated(&sd, &config);
    assert!(sd.x[0].abs() < 1e-3, "x[0] = {:e}", sd.x[0]);
    assert!(sd.x[N - 1].abs() < 1e-3, "x[N-1] = {:e}", sd.x[N - 1]);
}

#[test]
fn test_nonzero_boundary_values() {
    let problem: PoissonProblem<f64> = PoissonProblem::on_interval(
        N,
        0.0,
        1.0,
        &SourceTerm::Exponential,
        DirichletValues::new(1.0, -0.5),
    )
    .unwrap();
    let (a, b) = problem.system();
    let config = IterationConfig::default();

    // Start from a guess that already satisfies the boundary values
    let mut x0 = zero_guess(N);
    x0[0] = 1.0;
    x0[N - 1] = -0.5;

    let solutions = [
        jacobi(&a, &b, &x0, &config).unwrap(),
        gauss_seidel(&a, &b, &x0, &config).unwrap(),
        steepest_descent(&a, &b, &x0, &config).unwrap(),
        cg(&a, &b, &x0, &config).unwrap(),
    ];
    for solution in &solutions {
        assert!(solution.converged);
        assert_eq!(solution.x[0], 1.0);
        assert_eq!(solution.x[N - 1], -0.5);
    }
}

#[test]
fn test_gauss_seidel_beats_jacobi() {
    let (a, b) = sample_problem().system();
    let x0 = zero_guess(N);
    let config = IterationConfig::default();

    let jac = jacobi(&a, &b, &x0, &config).unwrap();
    let gs = gauss_seidel(&a, &b, &x0, &config).unwrap();

    assert!(jac.converged && gs.converged);
    assert!(
        gs.iterations < jac.iterations,
        "Gauss-Seidel {} vs Jacobi {}",
        gs.iterations,
        jac.iterations
    );
}

#[test]
fn test_cg_converges_within_n_iterations() {
    let (a, b) = sample_problem().system();

    let solution = cg(&a, &b, &zero_guess(N), &IterationConfig::default()).unwrap();
    assert!(solution.converged);
    assert!(
        solution.iterations <= N,
        "CG took {} iterations for N = {}",
        solution.iterations,
        N
    );
}

#[test]
fn test_exact_preconditioner_converges_in_one_iteration() {
    let (a, b) = sample_problem().system();
    let precond = MatrixPreconditioner::new(&a).unwrap();
    let config = IterationConfig::default();

    let solution = gradient_descent(&a, &b, &zero_guess(N), &precond, &config).unwrap();
    assert!(solution.converged);
    assert_eq!(solution.iterations, 1);

    let solution = pcg(&a, &b, &zero_guess(N), &precond, &config).unwrap();
    assert!(solution.converged);
    assert_eq!(solution.iterations, 1);
}

#[test]
fn test_identity_preconditioner_matches_unpreconditioned_bitwise() {
    let (a, b) = sample_problem().system();
    let x0 = zero_guess(N);
    let config = IterationConfig::new(200, EPS).with_history();

    let plain = steepest_descent(&a, &b, &x0, &config).unwrap();
    let identity = gradient_descent(&a, &b, &x0, &IdentityPreconditioner, &config).unwrap();
    let identity_matrix =
        MatrixPreconditioner::new(&Array2::<f64>::eye(N)).expect("identity is nonsingular");
    let via_lu = gradient_descent(&a, &b, &x0, &identity_matrix, &config).unwrap();

    for other in [&identity, &via_lu] {
        assert_eq!(plain.x, other.x);
        assert_eq!(plain.iterations, other.iterations);
        assert_eq!(plain.residual.to_bits(), other.residual.to_bits());
        assert_eq!(plain.residual_history, other.residual_history);
    }

    let plain_cg = cg(&a, &b, &x0, &config).unwrap();
    let identity_cg = pcg(&a, &b, &x0, &identity_matrix, &config).unwrap();
    assert_eq!(plain_cg.x, identity_cg.x);
    assert_eq!(plain_cg.iterations, identity_cg.iterations);
}

#[test]
fn test_diagonal_preconditioned_cg() {
    let (a, b) = sample_problem().system();
    let precond = DiagonalPreconditioner::from_dense(&a).unwrap();

    let solution = pcg(&a, &b, &zero_guess(N), &precond, &IterationConfig::default()).unwrap();
    assert!(solution.converged);
    assert!(solution.iterations <= N);
}

#[test]
fn test_iteration_cap_is_not_an_error() {
    let (a, b) = sample_problem().system();
    let x0 = zero_guess(N);
    let config = IterationConfig::new(10, EPS);

    for solution in [
        jacobi(&a, &b, &x0, &config).unwrap(),
        gauss_seidel(&a, &b, &x0, &config).unwrap(),
        steepest_descent(&a, &b, &x0, &config).unwrap(),
    ] {
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 10);
        assert!(solution.residual > EPS);
        assert_terminated(&solution, &config);
    }
}

#[test]
fn test_residual_history_is_recorded() {
    let (a, b) = sample_problem().system();
    let config = IterationConfig::default().with_history();

    let solution = gauss_seidel(&a, &b, &zero_guess(N), &config).unwrap();
    assert_eq!(solution.residual_history.len(), solution.iterations + 1);
    assert_eq!(solution.residual_history.last(), Some(&solution.residual));

    let first = solution.residual_history[0];
    assert!(solution.residual < first * 1e-6);
}

#[test]
fn test_zero_diagonal_fails_fast() {
    let (mut a, b) = sample_problem().system();
    a[[5, 5]] = 0.0;
    let x0 = zero_guess(N);
    let config = IterationConfig::default();

    for result in [
        jacobi(&a, &b, &x0, &config),
        gauss_seidel(&a, &b, &x0, &config),
    ] {
        assert!(matches!(
            result,
            Err(SolverError::ZeroDiagonal { row: 5, .. })
        ));
    }
}

#[test]
fn test_single_precision() {
    let problem: PoissonProblem<f32> = PoissonProblem::on_interval(
        N,
        0.0,
        1.0,
        &SourceTerm::Exponential,
        DirichletValues::homogeneous(),
    )
    .unwrap();
    let (a, b) = problem.system();
    let config = IterationConfig::new(200, 1e-3_f32);

    let solution = cg(&a, &b, &zero_guess(N), &config).unwrap();
    assert!(solution.converged);
}
