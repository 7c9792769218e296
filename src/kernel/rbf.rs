//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) controls the kernel width.

use crate::core::Point;
use crate::kernel::Kernel;

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The session default. The gamma parameter controls the reach of each
/// training point:
/// - High gamma: only close points influence the boundary (tight islands)
/// - Low gamma: distant points still matter (smooth boundary)
#[derive(Debug, Clone, Copy)]
pub struct RbfKernel {
    gamma: f64,
}

impl RbfKernel {
    /// Create a new RBF kernel with the specified gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for RbfKernel {
    /// Default RBF kernel with the session default gamma = 0.5
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl Kernel for RbfKernel {
    fn compute(&self, x: Point, y: Point) -> f64 {
        (-self.gamma * x.distance_squared(y)).exp()
    }
}
