//! Classifier fitting and query interface
//!
//! `SvmClassifier` is the builder the session uses on every retrain;
//! `FittedSvm` is the transient trained model it produces. Models are never
//! persisted — each relevant event fits a fresh instance from the current
//! point set.

use crate::cache::KernelCache;
use crate::core::{
    DecisionModel, LabeledPoint, Point, Prediction, Result, SvmParams, TrainConfig,
};
use crate::kernel::{Kernel, SessionKernel};
use crate::solver::SmoSolver;
use std::sync::Arc;

/// Builder for fitting an SVM with widget-driven parameters
#[derive(Debug, Clone)]
pub struct SvmClassifier {
    params: SvmParams,
    config: TrainConfig,
}

impl SvmClassifier {
    /// Create a classifier with the session defaults (rbf, C=100, gamma=0.5)
    pub fn new() -> Self {
        Self {
            params: SvmParams::default(),
            config: TrainConfig::default(),
        }
    }

    /// Use a full parameter set
    pub fn with_params(mut self, params: SvmParams) -> Self {
        self.params = params;
        self
    }

    /// Set the kernel choice
    pub fn with_kernel(mut self, kernel: crate::core::KernelKind) -> Self {
        self.params.kernel = kernel;
        self
    }

    /// Set regularization parameter C
    pub fn with_c(mut self, c: f64) -> Self {
        self.params.c = c;
        self
    }

    /// Set kernel width gamma
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.params.gamma = gamma;
        self
    }

    /// Set convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Set maximum solver iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// The parameters this builder will fit with
    pub fn params(&self) -> &SvmParams {
        &self.params
    }

    /// Fit on the given points with a private kernel cache
    pub fn fit(&self, points: &[LabeledPoint]) -> Result<FittedSvm> {
        let mut cache = KernelCache::new(self.config.cache_entries);
        self.fit_with_cache(points, &mut cache)
    }

    /// Fit on the given points, reusing an external kernel cache
    ///
    /// The session hands in its long-lived cache so per-tick refits of the
    /// same point set skip the kernel recomputation.
    pub fn fit_with_cache(
        &self,
        points: &[LabeledPoint],
        cache: &mut KernelCache,
    ) -> Result<FittedSvm> {
        let kernel = Arc::new(SessionKernel::from_params(&self.params)?);
        let solver = SmoSolver::new(Arc::clone(&kernel), self.params.c, self.config.clone());
        let outcome = solver.solve(points, cache)?;

        let mut support = Vec::with_capacity(outcome.support_indices.len());
        let mut alpha = Vec::with_capacity(outcome.support_indices.len());
        for &idx in &outcome.support_indices {
            support.push(points[idx]);
            alpha.push(outcome.alpha[idx]);
        }

        Ok(FittedSvm {
            kernel,
            support,
            alpha,
            bias: outcome.b,
            support_indices: outcome.support_indices,
            n_training_points: points.len(),
            iterations: outcome.iterations,
        })
    }
}

impl Default for SvmClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A fitted SVM model
pub struct FittedSvm {
    kernel: Arc<SessionKernel>,
    support: Vec<LabeledPoint>,
    alpha: Vec<f64>,
    bias: f64,
    support_indices: Vec<usize>,
    n_training_points: usize,
    iterations: usize,
}

impl FittedSvm {
    /// Predicted class for a query point
    pub fn predict(&self, point: Point) -> Prediction {
        DecisionModel::predict(self, point)
    }

    /// Probability-like score in (0, 1) for the One class
    ///
    /// A logistic squash of the decision value; stands in for Platt scaling
    /// and only feeds the filled gradient rendering.
    pub fn probability(&self, point: Point) -> f64 {
        1.0 / (1.0 + (-self.decision_value(point)).exp())
    }

    /// Training points selected as support vectors
    pub fn support_vectors(&self) -> &[LabeledPoint] {
        &self.support
    }

    /// Alpha values, one per support vector
    pub fn alpha_values(&self) -> &[f64] {
        &self.alpha
    }

    /// Indices of the support vectors in the training point set
    pub fn support_indices(&self) -> &[usize] {
        &self.support_indices
    }

    /// Bias term
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Size of the point set the model was fit on
    pub fn n_training_points(&self) -> usize {
        self.n_training_points
    }

    /// Solver iterations spent on the fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl DecisionModel for FittedSvm {
    fn decision_value(&self, point: Point) -> f64 {
        let mut result = 0.0;
        for (sv, &a) in self.support.iter().zip(&self.alpha) {
            result += a * sv.label.signed() * self.kernel.compute(sv.point, point);
        }
        result + self.bias
    }

    fn n_support_vectors(&self) -> usize {
        self.support.len()
    }
}
