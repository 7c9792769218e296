//! Linear kernel implementation

use crate::core::Point;
use crate::kernel::Kernel;

/// Linear kernel: K(x, y) = x^T * y
///
/// The simplest kernel, computing the plain dot product of the two
/// coordinates. Produces straight-line decision boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl LinearKernel {
    /// Create a new linear kernel
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for LinearKernel {
    fn compute(&self, x: Point, y: Point) -> f64 {
        x.dot(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_kernel_basic() {
        let kernel = LinearKernel::new();
        let x = Point::new(1.0, 2.0);
        let y = Point::new(3.0, 4.0);
        assert_eq!(kernel.compute(x, y), 11.0);
    }

    #[test]
    fn test_linear_kernel_identical() {
        let kernel = LinearKernel::new();
        let x = Point::new(1.0, 2.0);
        // x^T * x = 1 + 4 = 5
        assert_eq!(kernel.compute(x, x), 5.0);
    }

    #[test]
    fn test_linear_kernel_orthogonal() {
        let kernel = LinearKernel::new();
        let x = Point::new(1.0, 0.0);
        let y = Point::new(0.0, 1.0);
        assert_eq!(kernel.compute(x, y), 0.0);
    }

    #[test]
    fn test_linear_kernel_symmetry() {
        let kernel = LinearKernel::new();
        let x = Point::new(-2.5, 0.5);
        let y = Point::new(1.5, 3.0);
        assert_eq!(kernel.compute(x, y), kernel.compute(y, x));
    }
}
