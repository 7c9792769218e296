//! Runtime kernel selection
//!
//! The session picks its kernel from widget events, so the concrete kernel
//! is only known at runtime. `SessionKernel` is the enum over the fixed set,
//! built from validated `SvmParams` (the widget path must never hit the
//! constructor asserts).

use crate::core::{KernelKind, Point, Result, SvmParams};
use crate::kernel::{Kernel, LinearKernel, PolynomialKernel, RbfKernel, SigmoidKernel};

/// Polynomial degree used when the poly kernel is selected
const POLY_DEGREE: u32 = 3;
/// coef0 for the poly kernel
const POLY_COEF0: f64 = 1.0;
/// coef0 for the sigmoid kernel
const SIGMOID_COEF0: f64 = 0.0;

/// A kernel chosen at runtime from the fixed enumerated set
#[derive(Debug, Clone, Copy)]
pub enum SessionKernel {
    Linear(LinearKernel),
    Rbf(RbfKernel),
    Poly(PolynomialKernel),
    Sigmoid(SigmoidKernel),
}

impl SessionKernel {
    /// Build the kernel described by the session parameters
    pub fn from_params(params: &SvmParams) -> Result<Self> {
        params.validate()?;
        Ok(match params.kernel {
            KernelKind::Linear => SessionKernel::Linear(LinearKernel::new()),
            KernelKind::Rbf => SessionKernel::Rbf(RbfKernel::new(params.gamma)),
            KernelKind::Poly => SessionKernel::Poly(PolynomialKernel::new(
                POLY_DEGREE,
                params.gamma,
                POLY_COEF0,
            )),
            KernelKind::Sigmoid => {
                SessionKernel::Sigmoid(SigmoidKernel::new(params.gamma, SIGMOID_COEF0))
            }
        })
    }

    /// Which member of the fixed set this is
    pub fn kind(&self) -> KernelKind {
        match self {
            SessionKernel::Linear(_) => KernelKind::Linear,
            SessionKernel::Rbf(_) => KernelKind::Rbf,
            SessionKernel::Poly(_) => KernelKind::Poly,
            SessionKernel::Sigmoid(_) => KernelKind::Sigmoid,
        }
    }
}

impl Kernel for SessionKernel {
    fn compute(&self, x: Point, y: Point) -> f64 {
        match self {
            SessionKernel::Linear(k) => k.compute(x, y),
            SessionKernel::Rbf(k) => k.compute(x, y),
            SessionKernel::Poly(k) => k.compute(x, y),
            SessionKernel::Sigmoid(k) => k.compute(x, y),
        }
    }
}
