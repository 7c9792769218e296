//! Polynomial kernel implementation
//!
//! K(x, y) = (γ * <x, y> + r)^d
//!
//! - γ (gamma): scaling factor for the dot product
//! - r (coef0): independent term
//! - d (degree): polynomial degree

use crate::core::Point;
use crate::kernel::Kernel;

/// Polynomial kernel with configurable degree, gamma, and coefficient
#[derive(Debug, Clone, Copy)]
pub struct PolynomialKernel {
    /// Scaling factor for the dot product
    pub gamma: f64,
    /// Independent term in the polynomial
    pub coef0: f64,
    /// Degree of the polynomial
    pub degree: u32,
}

impl PolynomialKernel {
    /// Creates a new polynomial kernel
    ///
    /// # Panics
    /// Panics if degree is zero or gamma is not positive
    pub fn new(degree: u32, gamma: f64, coef0: f64) -> Self {
        assert!(degree > 0, "Polynomial degree must be positive");
        assert!(gamma > 0.0, "Gamma must be positive");
        Self {
            gamma,
            coef0,
            degree,
        }
    }

    /// Cubic kernel with unit coef0, the classifier-toolkit default shape:
    /// (γ·<x,y> + 1)³
    pub fn cubic(gamma: f64) -> Self {
        Self::new(3, gamma, 1.0)
    }

    /// Quadratic kernel: (γ·<x,y> + 1)²
    pub fn quadratic(gamma: f64) -> Self {
        Self::new(2, gamma, 1.0)
    }
}

impl Kernel for PolynomialKernel {
    fn compute(&self, x: Point, y: Point) -> f64 {
        (self.gamma * x.dot(y) + self.coef0).powi(self.degree as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial_kernel_creation() {
        let kernel = PolynomialKernel::new(2, 0.5, 1.0);
        assert_eq!(kernel.degree, 2);
        assert_eq!(kernel.gamma, 0.5);
        assert_eq!(kernel.coef0, 1.0);

        let cubic = PolynomialKernel::cubic(1.0);
        assert_eq!(cubic.degree, 3);
        assert_eq!(cubic.coef0, 1.0);

        let quad = PolynomialKernel::quadratic(1.0);
        assert_eq!(quad.degree, 2);
    }

    #[test]
    #[should_panic(expected = "Polynomial degree must be positive")]
    fn test_polynomial_kernel_zero_degree() {
        PolynomialKernel::new(0, 1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "Gamma must be positive")]
    fn test_polynomial_kernel_invalid_gamma() {
        PolynomialKernel::new(2, 0.0, 1.0);
    }

    #[test]
    fn test_polynomial_kernel_quadratic_value() {
        let kernel = PolynomialKernel::quadratic(1.0);
        let x = Point::new(1.0, 1.0);
        let y = Point::new(2.0, 0.0);
        // (1 * 2 + 1)² = 9
        assert_relative_eq!(kernel.compute(x, y), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polynomial_kernel_degree_one_matches_shifted_linear() {
        let kernel = PolynomialKernel::new(1, 1.0, 0.0);
        let x = Point::new(1.5, -2.0);
        let y = Point::new(0.5, 4.0);
        assert_relative_eq!(kernel.compute(x, y), x.dot(y), epsilon = 1e-12);
    }

    #[test]
    fn test_polynomial_kernel_symmetry() {
        let kernel = PolynomialKernel::cubic(0.7);
        let x = Point::new(1.0, 2.0);
        let y = Point::new(-1.0, 3.0);
        assert_eq!(kernel.compute(x, y), kernel.compute(y, x));
    }
}
