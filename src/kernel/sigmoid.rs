//! Sigmoid (hyperbolic tangent) kernel implementation
//!
//! K(x, y) = tanh(γ * <x, y> + r)
//!
//! Non-stationary, bounded to [-1, 1], and not positive semi-definite for
//! every parameter choice; kept because it is part of the fixed runtime
//! kernel set.

use crate::core::Point;
use crate::kernel::Kernel;

/// Sigmoid (hyperbolic tangent) kernel
#[derive(Debug, Clone, Copy)]
pub struct SigmoidKernel {
    /// Scaling parameter for the dot product (positive)
    pub gamma: f64,
    /// Bias/offset parameter
    pub coef0: f64,
}

impl SigmoidKernel {
    /// Creates a new sigmoid kernel
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64, coef0: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma, coef0 }
    }
}

impl Kernel for SigmoidKernel {
    fn compute(&self, x: Point, y: Point) -> f64 {
        (self.gamma * x.dot(y) + self.coef0).tanh()
    }
}
