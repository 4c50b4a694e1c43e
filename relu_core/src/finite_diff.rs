//! Finite difference utilities for derivative verification.
//!
//! Provides numerical derivative estimates for testing the closed-form rule.

/// Estimate the derivative of `f` at `x` using a central finite difference.
///
/// # Arguments
/// * `f` - Function of one variable
/// * `x` - The point at which to estimate the derivative
/// * `eps` - Step size (typically 1e-7 to 1e-5)
///
/// # Example
/// ```
/// use relu_core::central_diff;
///
/// // f(x) = x^2, f'(x) = 2x
/// let d = central_diff(|x| x * x, 3.0, 1e-7);
/// assert!((d - 6.0).abs() < 1e-5);
/// ```
pub fn central_diff<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    // Central difference: (f(x + eps) - f(x - eps)) / (2 * eps)
    (f(x + eps) - f(x - eps)) / (2.0 * eps)
}

/// Compute the maximum absolute difference between two sampled curves.
///
/// Useful for comparing a closed-form derivative against finite difference
/// estimates over a whole sample range.
pub fn max_abs_error(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
