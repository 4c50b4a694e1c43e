//! Elementwise rectifier operations over tensors.
//!
//! Each operation maps over the flat data and returns a new tensor of the
//! same shape. The inner loops run through the SIMD kernels.

use crate::simd;
use crate::tensor::Tensor;

/// Elementwise rectified linear unit: `y[i] = max(x[i], 0)`.
pub fn relu(x: &Tensor) -> Tensor {
    let mut out = vec![0.0f32; x.numel()];
    simd::max0_f32(x.as_slice(), &mut out);
    Tensor::new(out, x.shape().clone())
}

/// Elementwise derivative of [`relu`]: `1.0` where `x > 0`, else `0.0`.
///
/// Uses the convention `relu'(0) = 0`. The mask is computed by comparison,
/// never as the quotient `relu(x)/x`, so the value at 0 is an exact 0.0.
pub fn relu_prime(x: &Tensor) -> Tensor {
    // d(relu(x))/dx = 1 if x > 0 else 0
    let mut out = vec![0.0f32; x.numel()];
    simd::step_f32(x.as_slice(), &mut out);
    Tensor::new(out, x.shape().clone())
}

/// Forward-mode evaluation of the rectifier over a batch.
///
/// Propagates a tangent tensor alongside the primal input: returns
/// `(relu(x), x_dot * relu_prime(x))` elementwise. Both arguments must have
/// the same shape.
pub fn relu_jvp(x: &Tensor, x_dot: &Tensor) -> (Tensor, Tensor) {
    assert_eq!(
        x.shape(),
        x_dot.shape(),
        "Tangent shape {:?} doesn't match primal shape {:?}",
        x_dot.shape(),
        x.shape()
    );

    let primal = relu(x);

    let mask = relu_prime(x);
    let mut tangent = vec![0.0f32; x.numel()];
    simd::mul_f32(x_dot.as_slice(), mask.as_slice(), &mut tangent);

    (primal, Tensor::new(tangent, x.shape().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_relu_values() {
        let x = Tensor::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0], Shape::new(vec![5]));
        let y = relu(&x);
        assert_eq!(y.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0]);
        assert_eq!(y.shape(), x.shape());
    }

    #[test]
    fn test_relu_prime_values() {
        let x = Tensor::new(vec![-2.0, -1.0, 0.0, 1.0, 2.0], Shape::new(vec![5]));
        let d = relu_prime(&x);
        assert_eq!(d.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_relu_2d_preserves_layout() {
        let x = Tensor::new(
            vec![1.0, -2.0, -3.0, 4.0, 5.0, -6.0],
            Shape::new(vec![2, 3]),
        );
        let y = relu(&x);
        assert_eq!(y.shape().dims(), &[2, 3]);
        assert_eq!(y.get(&[0, 0]), 1.0);
        assert_eq!(y.get(&[0, 1]), 0.0);
        assert_eq!(y.get(&[1, 0]), 4.0);
        assert_eq!(y.get(&[1, 2]), 0.0);
    }

    #[test]
    fn test_relu_scalar_tensor() {
        let x = Tensor::scalar(-1.5);
        assert_eq!(relu(&x).item(), 0.0);
        assert_eq!(relu_prime(&x).item(), 0.0);

        let y = Tensor::scalar(1.5);
        assert_eq!(relu(&y).item(), 1.5);
        assert_eq!(relu_prime(&y).item(), 1.0);
    }

    #[test]
    fn test_relu_jvp_unit_tangent() {
        let x = Tensor::new(vec![-2.0, -0.1, 0.0, 0.1, 2.0], Shape::new(vec![5]));
        let dx = Tensor::ones(x.shape());

        let (y, dy) = relu_jvp(&x, &dx);
        assert_eq!(y.as_slice(), &[0.0, 0.0, 0.0, 0.1, 2.0]);
        // A unit tangent recovers the derivative mask itself.
        assert_eq!(dy.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_relu_jvp_scales_tangent() {
        let x = Tensor::new(vec![-1.0, 2.0, 3.0], Shape::new(vec![3]));
        let dx = Tensor::new(vec![10.0, -0.5, 2.0], Shape::new(vec![3]));

        let (_, dy) = relu_jvp(&x, &dx);
        assert_eq!(dy.as_slice(), &[0.0, -0.5, 2.0]);
    }

    #[test]
    fn test_relu_jvp_no_nan_at_kink() {
        let x = Tensor::new(vec![0.0], Shape::new(vec![1]));
        let dx = Tensor::new(vec![1.0], Shape::new(vec![1]));

        let (_, dy) = relu_jvp(&x, &dx);
        assert!(!dy.as_slice()[0].is_nan());
        assert_eq!(dy.as_slice()[0], 0.0);
    }

    #[test]
    fn test_tensor_methods_delegate() {
        let x = Tensor::new(vec![-1.0, 1.0], Shape::new(vec![2]));
        assert_eq!(x.relu().as_slice(), relu(&x).as_slice());
        assert_eq!(x.relu_prime().as_slice(), relu_prime(&x).as_slice());
    }
}
