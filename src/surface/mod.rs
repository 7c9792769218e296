//! Decision surface evaluation
//!
//! Evaluates a fitted model's decision function over a dense grid spanning
//! the visible plot bounds, and extracts level contours (zero boundary and
//! the ±1 margins) with marching squares. The plotting layer here has no
//! contour primitive, so the tessellation the original left to its plotting
//! toolkit lives in this module.

use crate::core::{DecisionModel, Point};

/// The grid a surface is evaluated over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Samples per axis
    pub resolution: usize,
}

impl GridSpec {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64, resolution: usize) -> Self {
        assert!(x_max > x_min && y_max > y_min, "degenerate grid bounds");
        assert!(resolution >= 2, "grid needs at least 2 samples per axis");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            resolution,
        }
    }

    /// Grid coordinate of sample (i, j); i indexes x, j indexes y
    pub fn point_at(&self, i: usize, j: usize) -> Point {
        Point::new(
            self.x_min + self.step_x() * i as f64,
            self.y_min + self.step_y() * j as f64,
        )
    }

    pub fn step_x(&self) -> f64 {
        (self.x_max - self.x_min) / (self.resolution - 1) as f64
    }

    pub fn step_y(&self) -> f64 {
        (self.y_max - self.y_min) / (self.resolution - 1) as f64
    }
}

impl Default for GridSpec {
    /// The visible plot bounds of the session: [-5, 5]² at 300×300
    fn default() -> Self {
        Self::new(-5.0, 5.0, -5.0, 5.0, 300)
    }
}

/// A line segment of an extracted contour, in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourSegment {
    pub a: Point,
    pub b: Point,
}

/// Dense decision-value field over a grid
#[derive(Debug, Clone)]
pub struct DecisionSurface {
    spec: GridSpec,
    /// Row-major: values[j * resolution + i]
    values: Vec<f64>,
}

impl DecisionSurface {
    /// Evaluate the model's decision function over every grid sample
    pub fn evaluate<M: DecisionModel + ?Sized>(model: &M, spec: &GridSpec) -> Self {
        let n = spec.resolution;
        let mut values = Vec::with_capacity(n * n);
        for j in 0..n {
            for i in 0..n {
                values.push(model.decision_value(spec.point_at(i, j)));
            }
        }
        Self { spec: *spec, values }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Decision value at grid sample (i, j)
    pub fn value_at(&self, i: usize, j: usize) -> f64 {
        self.values[j * self.spec.resolution + i]
    }

    /// Probability-like score at grid sample (i, j): logistic squash of the
    /// decision value, feeding the filled gradient
    pub fn probability_at(&self, i: usize, j: usize) -> f64 {
        1.0 / (1.0 + (-self.value_at(i, j)).exp())
    }

    /// Surface with every decision value multiplied by `alpha`
    ///
    /// The animation variant grows the contour toward its converged shape by
    /// sweeping alpha from 0 to 1.
    pub fn scaled(&self, alpha: f64) -> Self {
        Self {
            spec: self.spec,
            values: self.values.iter().map(|v| v * alpha).collect(),
        }
    }

    /// Extract the level contour as line segments (marching squares)
    pub fn contour_lines(&self, level: f64) -> Vec<ContourSegment> {
        let n = self.spec.resolution;
        let mut segments = Vec::new();

        for j in 0..n - 1 {
            for i in 0..n - 1 {
                let f00 = self.value_at(i, j);
                let f10 = self.value_at(i + 1, j);
                let f11 = self.value_at(i + 1, j + 1);
                let f01 = self.value_at(i, j + 1);

                let p00 = self.spec.point_at(i, j);
                let p10 = self.spec.point_at(i + 1, j);
                let p11 = self.spec.point_at(i + 1, j + 1);
                let p01 = self.spec.point_at(i, j + 1);

                // Edge crossings, present only where the sign changes
                let bottom = crossing(p00, f00, p10, f10, level);
                let right = crossing(p10, f10, p11, f11, level);
                let top = crossing(p01, f01, p11, f11, level);
                let left = crossing(p00, f00, p01, f01, level);

                let case = (u8::from(f00 >= level))
                    | (u8::from(f10 >= level) << 1)
                    | (u8::from(f11 >= level) << 2)
                    | (u8::from(f01 >= level) << 3);

                match case {
                    0b0000 | 0b1111 => {}
                    0b0001 | 0b1110 => push(&mut segments, left, bottom),
                    0b0010 | 0b1101 => push(&mut segments, bottom, right),
                    0b0100 | 0b1011 => push(&mut segments, right, top),
                    0b1000 | 0b0111 => push(&mut segments, top, left),
                    0b0011 | 0b1100 => push(&mut segments, left, right),
                    0b0110 | 0b1001 => push(&mut segments, bottom, top),
                    0b0101 => {
                        // Saddle; disambiguate with the cell center
                        let center = (f00 + f10 + f11 + f01) / 4.0;
                        if center >= level {
                            push(&mut segments, left, top);
                            push(&mut segments, bottom, right);
                        } else {
                            push(&mut segments, left, bottom);
                            push(&mut segments, right, top);
                        }
                    }
                    0b1010 => {
                        let center = (f00 + f10 + f11 + f01) / 4.0;
                        if center >= level {
                            push(&mut segments, left, bottom);
                            push(&mut segments, right, top);
                        } else {
                            push(&mut segments, left, top);
                            push(&mut segments, bottom, right);
                        }
                    }
                    _ => unreachable!("4-bit case"),
                }
            }
        }

        segments
    }
}

/// Interpolated crossing of `level` on the edge (pa, fa)-(pb, fb)
fn crossing(pa: Point, fa: f64, pb: Point, fb: f64, level: f64) -> Option<Point> {
    if (fa >= level) == (fb >= level) {
        return None;
    }
    let t = (level - fa) / (fb - fa);
    Some(Point::new(
        pa.x + t * (pb.x - pa.x),
        pa.y + t * (pb.y - pa.y),
    ))
}

fn push(segments: &mut Vec<ContourSegment>, a: Option<Point>, b: Option<Point>) {
    if let (Some(a), Some(b)) = (a, b) {
        segments.push(ContourSegment { a, b });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Prediction;
    use approx::assert_relative_eq;

    /// Synthetic linear field f(x, y) = x
    struct XField;

    impl DecisionModel for XField {
        fn decision_value(&self, point: Point) -> f64 {
            point.x
        }
        fn n_support_vectors(&self) -> usize {
            0
        }
    }

    /// Radial field f(x, y) = 1 - r²
    struct RadialField;

    impl DecisionModel for RadialField {
        fn decision_value(&self, point: Point) -> f64 {
            1.0 - (point.x * point.x + point.y * point.y)
        }
        fn n_support_vectors(&self) -> usize {
            0
        }
    }

    #[test]
    fn test_grid_spec_sampling() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 11);
        assert_relative_eq!(spec.step_x(), 1.0);
        assert_eq!(spec.point_at(0, 0), Point::new(-5.0, -5.0));
        assert_eq!(spec.point_at(10, 10), Point::new(5.0, 5.0));
        assert_eq!(spec.point_at(5, 0), Point::new(0.0, -5.0));
    }

    #[test]
    #[should_panic(expected = "degenerate grid bounds")]
    fn test_grid_spec_rejects_inverted_bounds() {
        GridSpec::new(5.0, -5.0, -5.0, 5.0, 10);
    }

    #[test]
    fn test_evaluate_linear_field() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 11);
        let surface = DecisionSurface::evaluate(&XField, &spec);
        assert_relative_eq!(surface.value_at(0, 3), -5.0);
        assert_relative_eq!(surface.value_at(10, 7), 5.0);
        assert_relative_eq!(surface.value_at(5, 5), 0.0);
    }

    #[test]
    fn test_zero_contour_of_linear_field() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 21);
        let surface = DecisionSurface::evaluate(&XField, &spec);
        let segments = surface.contour_lines(0.0);

        assert!(!segments.is_empty());
        for seg in &segments {
            // The zero crossing of f = x is the vertical line x = 0
            assert!(seg.a.x.abs() < 1e-9, "segment off the x=0 line: {:?}", seg);
            assert!(seg.b.x.abs() < 1e-9);
        }
    }

    #[test]
    fn test_nonzero_level_contour() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 41);
        let surface = DecisionSurface::evaluate(&XField, &spec);
        for seg in surface.contour_lines(1.0) {
            assert!((seg.a.x - 1.0).abs() < 1e-9);
            assert!((seg.b.x - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_radial_contour_is_unit_circle() {
        let spec = GridSpec::new(-2.0, 2.0, -2.0, 2.0, 101);
        let surface = DecisionSurface::evaluate(&RadialField, &spec);
        let segments = surface.contour_lines(0.0);

        assert!(!segments.is_empty());
        for seg in &segments {
            for p in [seg.a, seg.b] {
                let r = (p.x * p.x + p.y * p.y).sqrt();
                assert!((r - 1.0).abs() < 0.05, "contour point off circle: {:?}", p);
            }
        }
    }

    #[test]
    fn test_scaled_surface() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 11);
        let surface = DecisionSurface::evaluate(&XField, &spec);
        let half = surface.scaled(0.5);
        assert_relative_eq!(half.value_at(10, 0), 2.5);
        assert_relative_eq!(half.value_at(0, 0), -2.5);

        let flat = surface.scaled(0.0);
        assert_relative_eq!(flat.value_at(10, 0), 0.0);
    }

    #[test]
    fn test_probability_midpoint() {
        let spec = GridSpec::new(-5.0, 5.0, -5.0, 5.0, 11);
        let surface = DecisionSurface::evaluate(&XField, &spec);
        // On the boundary the probability-like score is exactly 0.5
        assert_relative_eq!(surface.probability_at(5, 5), 0.5);
        assert!(surface.probability_at(10, 5) > 0.99);
        assert!(surface.probability_at(0, 5) < 0.01);
    }

    #[test]
    fn test_flat_field_has_no_contour() {
        struct Flat;
        impl DecisionModel for Flat {
            fn decision_value(&self, _: Point) -> f64 {
                2.0
            }
            fn n_support_vectors(&self) -> usize {
                0
            }
        }
        let spec = GridSpec::new(-1.0, 1.0, -1.0, 1.0, 11);
        let surface = DecisionSurface::evaluate(&Flat, &spec);
        assert!(surface.contour_lines(0.0).is_empty());
    }

    // Keep Prediction in scope so the default DecisionModel::predict is
    // exercised through the trait object path too.
    #[test]
    fn test_default_predict_through_trait() {
        let pred: Prediction = XField.predict(Point::new(3.0, 0.0));
        assert_eq!(pred.decision_value, 3.0);
    }
}
