//! # relu_tensor - Rectifier over Contiguous f32 Tensors
//!
//! Batch counterpart of `relu_core`: the rectifier, its derivative mask, and
//! forward-mode tangent propagation, elementwise over dense row-major f32
//! tensors, with SIMD kernels (AVX2 on x86_64, NEON on aarch64) behind the
//! elementwise loops.
//!
//! ## Overview
//!
//! - [`Shape`] and [`Strides`] - Tensor shape and memory layout
//! - [`Tensor`] - Dense row-major f32 storage with constructors
//!   ([`Tensor::zeros`], [`Tensor::ones`], [`Tensor::full`],
//!   [`Tensor::scalar`], [`Tensor::arange`])
//! - [`ops`] - Elementwise [`ops::relu`], [`ops::relu_prime`],
//!   [`ops::relu_jvp`]
//!
//! All operations return new tensors of the same shape; there is no graph,
//! no broadcasting, and no mutation of inputs. The derivative mask uses the
//! convention `relu'(0) = 0` and is computed by comparison, so it is exact
//! (and never NaN) at the kink.
//!
//! ## Example
//!
//! ```
//! use relu_tensor::prelude::*;
//!
//! let x = Tensor::new(vec![-2.0, -0.1, 0.0, 0.1, 2.0], Shape::new(vec![5]));
//!
//! let y = ops::relu(&x);
//! assert_eq!(y.as_slice(), &[0.0, 0.0, 0.0, 0.1, 2.0]);
//!
//! // Pushing a unit tangent through recovers the derivative mask
//! let (_, dy) = ops::relu_jvp(&x, &Tensor::ones(x.shape()));
//! assert_eq!(dy.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0]);
//! ```

pub mod ops;
pub mod shape;
mod simd;
pub mod tensor;

pub use shape::{Shape, Strides};
pub use tensor::Tensor;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::ops;
    pub use crate::shape::{Shape, Strides};
    pub use crate::tensor::Tensor;
}
