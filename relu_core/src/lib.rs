//! # relu_core - Rectified Linear Unit with a Custom Derivative Rule
//!
//! This crate provides the scalar (f64) rectifier `relu(x) = max(x, 0)` together
//! with its derivative under the convention `relu'(0) = 0`, and a forward-mode
//! entry point that propagates a tangent through the function in one call.
//!
//! ## Overview
//!
//! The rectifier is piecewise linear with a kink at zero. Away from the kink the
//! derivative is the indicator of positivity; at the kink the true derivative
//! does not exist, so a one-sided value has to be picked. This crate picks 0,
//! which keeps the derivative equal to `1 if x > 0 else 0` everywhere.
//!
//! Algebraically that indicator equals `relu(x) / x` for nonzero `x`, but the
//! quotient form evaluates to `0/0 = NaN` at the kink. No function in this crate
//! ever forms that quotient; the comparison is used instead, so the derivative
//! is exact (and finite) at every input.
//!
//! ## Quick Start
//!
//! ```
//! use relu_core::{relu, relu_prime, relu_jvp};
//!
//! assert_eq!(relu(2.0), 2.0);
//! assert_eq!(relu(-3.0), 0.0);
//!
//! // The derivative is the indicator of positivity, with relu'(0) = 0
//! assert_eq!(relu_prime(2.0), 1.0);
//! assert_eq!(relu_prime(-3.0), 0.0);
//! assert_eq!(relu_prime(0.0), 0.0);
//!
//! // Forward mode: primal output and tangent in one call
//! let (y, dy) = relu_jvp(1.5, 2.0);
//! assert_eq!(y, 1.5);
//! assert_eq!(dy, 2.0);
//!
//! // At the kink the tangent is 0, never NaN
//! let (y0, dy0) = relu_jvp(0.0, 1.0);
//! assert_eq!(y0, 0.0);
//! assert_eq!(dy0, 0.0);
//! ```
//!
//! ## Functions
//!
//! | Function | Definition |
//! |----------|------------|
//! | [`relu`] | `max(x, 0)` |
//! | [`relu_prime`] | `1` if `x > 0`, else `0` |
//! | [`relu_jvp`] | `(relu(x), x_dot * relu_prime(x))` |
//! | [`central_diff`] | numerical derivative for validation |
//!
//! ## Architecture
//!
//! - The three rectifier functions are independent pure functions; there is no
//!   registration or tape machinery tying the derivative to the primal.
//! - **[`central_diff`]**: Utility for validating the closed-form derivative
//!   against numerical differentiation.

mod finite_diff;

pub use finite_diff::{central_diff, max_abs_error};

/// Rectified linear unit: `max(x, 0)`.
///
/// Defined for every float. Infinities follow the comparison (`relu(inf) = inf`,
/// `relu(-inf) = 0`); a NaN input follows whatever [`f64::max`] does with NaN.
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Derivative of [`relu`]: `1.0` if `x > 0`, else `0.0`.
///
/// The rectifier is not differentiable at 0; this uses the convention
/// `relu'(0) = 0`. The value at the kink is an exact 0, never NaN, because the
/// indicator is computed by comparison rather than as the quotient `relu(x)/x`.
pub fn relu_prime(x: f64) -> f64 {
    // d(relu(x))/dx = 1 if x > 0 else 0
    if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Forward-mode evaluation of the rectifier.
///
/// Given a primal input `x` and a tangent (perturbation) `x_dot`, returns the
/// primal output `relu(x)` and the propagated tangent `x_dot * relu_prime(x)`.
pub fn relu_jvp(x: f64, x_dot: f64) -> (f64, f64) {
    (relu(x), x_dot * relu_prime(x))
}
