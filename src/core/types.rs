//! Core type definitions for the interactive trainer

use serde::{Deserialize, Serialize};

/// A point in the 2D feature plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with another point
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Binary class label as presented to the user (0 or 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Zero,
    One,
}

impl Label {
    /// Signed label used by the solver: Zero -> -1.0, One -> +1.0
    pub fn signed(&self) -> f64 {
        match self {
            Label::Zero => -1.0,
            Label::One => 1.0,
        }
    }

    /// Map a signed decision back to a user-facing label
    pub fn from_signed(value: f64) -> Self {
        if value >= 0.0 {
            Label::One
        } else {
            Label::Zero
        }
    }
}

/// A training point with its class label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub point: Point,
    pub label: Label,
}

impl LabeledPoint {
    pub fn new(point: Point, label: Label) -> Self {
        Self { point, label }
    }
}

/// The fixed set of kernels selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    Linear,
    Rbf,
    Poly,
    Sigmoid,
}

impl std::fmt::Display for KernelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KernelKind::Linear => "linear",
            KernelKind::Rbf => "rbf",
            KernelKind::Poly => "poly",
            KernelKind::Sigmoid => "sigmoid",
        };
        write!(f, "{name}")
    }
}

/// Classifier parameters set by the widget events
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmParams {
    /// Kernel choice (radio-button set)
    pub kernel: KernelKind,
    /// Regularization strength C (positive)
    pub c: f64,
    /// Kernel width gamma (positive)
    pub gamma: f64,
}

impl SvmParams {
    pub fn new(kernel: KernelKind, c: f64, gamma: f64) -> Self {
        Self { kernel, c, gamma }
    }

    /// Check that both continuous parameters are positive
    pub fn validate(&self) -> crate::core::Result<()> {
        if !(self.c > 0.0) || !self.c.is_finite() {
            return Err(crate::core::TrainerError::InvalidParameter(format!(
                "C must be a positive finite number, got: {}",
                self.c
            )));
        }
        if !(self.gamma > 0.0) || !self.gamma.is_finite() {
            return Err(crate::core::TrainerError::InvalidParameter(format!(
                "gamma must be a positive finite number, got: {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

impl Default for SvmParams {
    /// The documented session defaults: rbf kernel, C = 100, gamma = 0.5
    fn default() -> Self {
        Self {
            kernel: KernelKind::Rbf,
            c: 100.0,
            gamma: 0.5,
        }
    }
}

/// Solver configuration, independent of the widget-driven parameters
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Tolerance for KKT conditions
    pub epsilon: f64,
    /// Maximum number of outer SMO iterations
    pub max_iterations: usize,
    /// Kernel cache capacity in entries
    pub cache_entries: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.001,
            max_iterations: 10_000,
            cache_entries: 65_536,
        }
    }
}

/// Prediction result containing label and decision value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class
    pub label: Label,
    /// Raw decision function value
    pub decision_value: f64,
}

impl Prediction {
    pub fn new(label: Label, decision_value: f64) -> Self {
        Self {
            label,
            decision_value,
        }
    }

    /// Confidence as absolute distance from the boundary
    pub fn confidence(&self) -> f64 {
        self.decision_value.abs()
    }
}

/// Raw result of the SMO optimization
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Lagrange multipliers, one per training point
    pub alpha: Vec<f64>,
    /// Bias term
    pub b: f64,
    /// Indices of support vectors (alpha above tolerance)
    pub support_indices: Vec<usize>,
    /// Outer iterations performed
    pub iterations: usize,
}
