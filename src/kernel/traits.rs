//! Kernel trait definition

use crate::core::Point;

/// Kernel function trait
///
/// A kernel function K(x, y) must satisfy Mercer's condition to be valid for
/// SVM training (the sigmoid kernel is a well-known partial exception and is
/// kept for parity with the usual classifier toolkits).
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    fn compute(&self, x: Point, y: Point) -> f64;
}
