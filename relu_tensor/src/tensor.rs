//! Contiguous tensor storage and constructors.

use crate::shape::{Shape, Strides};

/// Dense row-major tensor of f32 values.
///
/// Plain data with no graph or lifecycle attached; operations take references
/// and return new tensors.
#[derive(Clone, Debug)]
pub struct Tensor {
    data: Vec<f32>,
    shape: Shape,
    strides: Strides,
}

impl Tensor {
    /// Create a new tensor from data and shape.
    pub fn new(data: Vec<f32>, shape: Shape) -> Self {
        let strides = shape.contiguous_strides();
        assert_eq!(
            data.len(),
            shape.numel(),
            "Data length {} doesn't match shape {:?} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Tensor { data, shape, strides }
    }

    /// Create a 0-dimensional tensor holding a single value.
    pub fn scalar(value: f32) -> Self {
        Tensor::new(vec![value], Shape::scalar())
    }

    /// Create a tensor filled with zeros.
    pub fn zeros(shape: &Shape) -> Self {
        Tensor::new(vec![0.0; shape.numel()], shape.clone())
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &Shape) -> Self {
        Tensor::new(vec![1.0; shape.numel()], shape.clone())
    }

    /// Create a tensor filled with the given value.
    pub fn full(shape: &Shape, value: f32) -> Self {
        Tensor::new(vec![value; shape.numel()], shape.clone())
    }

    /// Evenly spaced values in `[start, stop)` with the given step, as a
    /// 1-dimensional tensor.
    ///
    /// The step may be negative (with `stop < start`). An empty range yields
    /// a tensor of zero elements.
    pub fn arange(start: f32, stop: f32, step: f32) -> Self {
        assert!(step != 0.0, "arange step must be nonzero");
        let span = (stop - start) / step;
        let n = if span > 0.0 { span.ceil() as usize } else { 0 };
        // Scale from the start each time instead of accumulating, so rounding
        // error does not grow with the index.
        let data: Vec<f32> = (0..n).map(|i| start + step * i as f32).collect();
        Tensor::new(data, Shape::new(vec![n]))
    }

    /// The tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The tensor's row-major strides.
    pub fn strides(&self) -> &Strides {
        &self.strides
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// The underlying data in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Value at the given multi-dimensional indices.
    pub fn get(&self, indices: &[usize]) -> f32 {
        self.data[self.strides.index(indices)]
    }

    /// Extract the single value of a one-element tensor.
    pub fn item(&self) -> f32 {
        assert_eq!(
            self.numel(),
            1,
            "item() requires a one-element tensor, shape is {:?}",
            self.shape
        );
        self.data[0]
    }

    /// Elementwise rectifier; see [`crate::ops::relu`].
    pub fn relu(&self) -> Tensor {
        crate::ops::relu(self)
    }

    /// Elementwise rectifier derivative; see [`crate::ops::relu_prime`].
    pub fn relu_prime(&self) -> Tensor {
        crate::ops::relu_prime(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tensor_creation() {
        let t = Tensor::zeros(&Shape::new(vec![2, 3]));
        assert_eq!(t.shape().dims(), &[2, 3]);
        assert_eq!(t.as_slice(), &[0.0; 6]);

        let t2 = Tensor::ones(&Shape::new(vec![2, 3]));
        assert_eq!(t2.as_slice(), &[1.0; 6]);

        let t3 = Tensor::full(&Shape::new(vec![4]), 2.5);
        assert_eq!(t3.as_slice(), &[2.5; 4]);

        let s = Tensor::scalar(42.0);
        assert!(s.shape().is_scalar());
        assert_eq!(s.item(), 42.0);
    }

    #[test]
    fn test_get_2d() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(vec![2, 3]));
        assert_eq!(t.get(&[0, 0]), 1.0);
        assert_eq!(t.get(&[0, 2]), 3.0);
        assert_eq!(t.get(&[1, 0]), 4.0);
        assert_eq!(t.get(&[1, 2]), 6.0);
    }

    #[test]
    fn test_arange_unit_step() {
        let t = Tensor::arange(0.0, 5.0, 1.0);
        assert_eq!(t.shape().dims(), &[5]);
        assert_eq!(t.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_arange_fractional_step() {
        // The range the demo samples by default.
        let t = Tensor::arange(-3.0, 3.0, 0.1);
        assert_eq!(t.numel(), 60);
        assert_eq!(t.as_slice()[0], -3.0);
        assert!((t.as_slice()[30]).abs() < 1e-5);
        assert!((t.as_slice()[59] - 2.9).abs() < 1e-5);
    }

    #[test]
    fn test_arange_negative_step() {
        let t = Tensor::arange(2.0, 0.0, -0.5);
        assert_eq!(t.as_slice(), &[2.0, 1.5, 1.0, 0.5]);
    }

    #[test]
    fn test_arange_empty() {
        let t = Tensor::arange(1.0, 1.0, 0.1);
        assert_eq!(t.numel(), 0);

        // Step pointing away from the stop also yields nothing.
        let t2 = Tensor::arange(0.0, 5.0, -1.0);
        assert_eq!(t2.numel(), 0);
    }
}
