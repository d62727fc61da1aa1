//! Vector kernels shared by the iterative solvers
//!
//! Inner products, norms, axpy updates and the residual `b - A x`.
//! Loops are written out so the summation order is fixed, which keeps
//! solver runs reproducible bit for bit.

use crate::traits::{LinearOperator, RealField};
use ndarray::Array1;

/// Compute inner product (x, y) = Σ x_i * y_i
#[inline]
pub fn inner_product<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> T {
    assert_eq!(
        x.len(),
        y.len(),
        "Vector lengths must match for inner product"
    );
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        sum += *xi * *yi;
    }
    sum
}

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ x_i^2)
#[inline]
pub fn vector_norm<T: RealField>(x: &Array1<T>) -> T {
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2 = Σ x_i^2
#[inline]
pub fn vector_norm_sqr<T: RealField>(x: &Array1<T>) -> T {
    let mut sum = T::zero();
    for xi in x.iter() {
        sum += *xi * *xi;
    }
    sum
}

/// Compute axpy: y = α * x + y
#[inline]
pub fn axpy<T: RealField>(alpha: T, x: &Array1<T>, y: &mut Array1<T>) {
    for (xi, yi) in x.iter().zip(y.iter_mut()) {
        *yi += alpha * *xi;
    }
}

/// Compute the residual r = b - A * x
pub fn residual<T, A>(operator: &A, b: &Array1<T>, x: &Array1<T>) -> Array1<T>
where
    T: RealField,
    A: LinearOperator<T> + ?Sized,
{
    let ax = operator.apply(x);
    let mut r = b.clone();
    for (ri, axi) in r.iter_mut().zip(ax.iter()) {
        *ri -= *axi;
    }
    r
}

/// Compute ||b - A * x||_2 from scratch
///
/// Every solver reports its final residual through this, so the value
/// can be reproduced from the returned iterate.
pub fn residual_norm<T, A>(operator: &A, b: &Array1<T>, x: &Array1<T>) -> T
where
    T: RealField,
    A: LinearOperator<T> + ?Sized,
{
    vector_norm(&residual(operator, b, x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_inner_product_real() {
        let x = array![1.0_f64, 2.0, 3.0];
        let y = array![4.0_f64, 5.0, 6.0];

        let ip = inner_product(&x, &y);
        assert_relative_eq!(ip, 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_vector_norm_real() {
        let x = array![3.0_f64, 4.0];

        let norm = vector_norm(&x);
        assert_relative_eq!(norm, 5.0, epsilon = 1e-10);
        assert_relative_eq!(vector_norm_sqr(&x), 25.0, epsilon = 1e-10);
    }

    #[test]
    fn test_vector_norm_zero() {
        let x = array![0.0_f64, 0.0, 0.0];

        let norm = vector_norm(&x);
        assert_relative_eq!(norm, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_axpy() {
        let alpha = 2.0_f64;
        let x = array![1.0_f64, 2.0, 3.0];
        let mut y = array![1.0_f64, 1.0, 1.0];

        axpy(alpha, &x, &mut y);

        assert_relative_eq!(y[0], 3.0, epsilon = 1e-10);
        assert_relative_eq!(y[1], 5.0, epsilon = 1e-10);
        assert_relative_eq!(y[2], 7.0, epsilon = 1e-10);
    }

    #[test]
    fn test_residual_and_norm() {
        let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
        let b = array![1.0_f64, 2.0];
        let x = array![0.5_f64, -0.5];

        // A x = [1.5, -1.0], r = [-0.5, 3.0]
        let r = residual(&a, &b, &x);
        assert_relative_eq!(r[0], -0.5, epsilon = 1e-12);
        assert_relative_eq!(r[1], 3.0, epsilon = 1e-12);

        let norm = residual_norm(&a, &b, &x);
        assert_relative_eq!(norm, 9.25_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(norm, vector_norm(&r));
    }
}
