//! Core traits for the trainer

use crate::core::{Point, Prediction};

/// A fitted binary classifier queried over the 2D plane
///
/// The decision surface and the pointer readout only need this seam, so they
/// can be exercised against synthetic fields in tests.
pub trait DecisionModel: Send + Sync {
    /// Continuous decision value for a query point (signed distance from the
    /// separating boundary)
    fn decision_value(&self, point: Point) -> f64;

    /// Predicted class for a query point
    fn predict(&self, point: Point) -> Prediction {
        let value = self.decision_value(point);
        Prediction::new(crate::core::Label::from_signed(value), value)
    }

    /// Number of support vectors backing the model
    fn n_support_vectors(&self) -> usize;
}
