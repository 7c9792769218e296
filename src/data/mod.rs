//! Synthetic datasets for the visualizer
//!
//! Both generators are seeded, so a dataset produced twice with the same
//! arguments is identical point for point — `reset()` relies on this.

use crate::core::{Label, LabeledPoint, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Seed of the session's initial point set
pub const DEFAULT_SEED: u64 = 42;

/// Points per cluster in the initial two-cluster set
pub const CLUSTER_SIZE: usize = 30;

/// Cluster center offset along both axes
const CLUSTER_OFFSET: f64 = 1.5;

/// The session's initial labeled set: one Gaussian cluster around
/// (-1.5, -1.5) labeled Zero, then one around (+1.5, +1.5) labeled One
pub fn two_clusters(seed: u64) -> Vec<LabeledPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(2 * CLUSTER_SIZE);

    for _ in 0..CLUSTER_SIZE {
        let x: f64 = rng.sample(StandardNormal);
        let y: f64 = rng.sample(StandardNormal);
        points.push(LabeledPoint::new(
            Point::new(x - CLUSTER_OFFSET, y - CLUSTER_OFFSET),
            Label::Zero,
        ));
    }
    for _ in 0..CLUSTER_SIZE {
        let x: f64 = rng.sample(StandardNormal);
        let y: f64 = rng.sample(StandardNormal);
        points.push(LabeledPoint::new(
            Point::new(x + CLUSTER_OFFSET, y + CLUSTER_OFFSET),
            Label::One,
        ));
    }

    points
}

/// Concentric-circles dataset for the animation variant
///
/// `n` points split between an outer unit circle (Label::Zero) and an inner
/// circle scaled by `factor` (Label::One), with Gaussian jitter of standard
/// deviation `noise` on both coordinates.
pub fn circles(n: usize, factor: f64, noise: f64, seed: u64) -> Vec<LabeledPoint> {
    assert!(
        factor > 0.0 && factor < 1.0,
        "factor must be in (0, 1), got: {}",
        factor
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let n_outer = n / 2;
    let n_inner = n - n_outer;
    let mut points = Vec::with_capacity(n);

    for k in 0..n_outer {
        let angle = 2.0 * std::f64::consts::PI * k as f64 / n_outer as f64;
        let jx: f64 = rng.sample(StandardNormal);
        let jy: f64 = rng.sample(StandardNormal);
        points.push(LabeledPoint::new(
            Point::new(angle.cos() + noise * jx, angle.sin() + noise * jy),
            Label::Zero,
        ));
    }
    for k in 0..n_inner {
        let angle = 2.0 * std::f64::consts::PI * k as f64 / n_inner as f64;
        let jx: f64 = rng.sample(StandardNormal);
        let jy: f64 = rng.sample(StandardNormal);
        points.push(LabeledPoint::new(
            Point::new(
                factor * angle.cos() + noise * jx,
                factor * angle.sin() + noise * jy,
            ),
            Label::One,
        ));
    }

    points
}
