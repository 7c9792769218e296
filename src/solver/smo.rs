//! Sequential Minimal Optimization (SMO) solver
//!
//! Solves the C-SVM dual problem by repeatedly optimizing pairs of Lagrange
//! multipliers. Second-variable selection uses the classic max |E_i - E_j|
//! heuristic. Kernel values go through the shared `KernelCache`, which pays
//! off here because the session re-solves the same point set on every
//! animation tick.

use crate::cache::KernelCache;
use crate::core::{LabeledPoint, Result, SolveOutcome, TrainConfig, TrainerError};
use crate::kernel::Kernel;
use std::sync::Arc;

/// SMO solver for the two-class SVM dual problem
pub struct SmoSolver<K: Kernel> {
    kernel: Arc<K>,
    c: f64,
    config: TrainConfig,
}

impl<K: Kernel> SmoSolver<K> {
    /// Create a new solver with the given kernel, regularization strength,
    /// and solver configuration
    pub fn new(kernel: Arc<K>, c: f64, config: TrainConfig) -> Self {
        Self { kernel, c, config }
    }

    /// Solve the dual problem for the given training points
    ///
    /// Requires at least two points and both classes present; the session
    /// treats anything less as a degenerate set and never calls in, but the
    /// solver enforces it too.
    pub fn solve(
        &self,
        points: &[LabeledPoint],
        cache: &mut KernelCache,
    ) -> Result<SolveOutcome> {
        if points.is_empty() {
            return Err(TrainerError::EmptyTrainingSet);
        }
        if points.len() < 2 {
            return Err(TrainerError::DegenerateTrainingSet(
                "at least two points are required".to_string(),
            ));
        }
        let has_zero = points.iter().any(|p| p.label.signed() < 0.0);
        let has_one = points.iter().any(|p| p.label.signed() > 0.0);
        if !has_zero || !has_one {
            return Err(TrainerError::DegenerateTrainingSet(
                "all points share a single class".to_string(),
            ));
        }

        let n = points.len();
        let mut alpha = vec![0.0; n];

        // Error cache: E_i = output_i - y_i. All alphas start at zero, so
        // output_i = 0 and E_i = -y_i.
        let mut errors: Vec<f64> = points.iter().map(|p| -p.label.signed()).collect();

        let mut iterations = 0;
        let mut num_changed = 0;
        let mut examine_all = true;

        while (num_changed > 0 || examine_all) && iterations < self.config.max_iterations {
            num_changed = 0;

            if examine_all {
                for i in 0..n {
                    if self.examine_example(i, points, &mut alpha, &mut errors, cache)? {
                        num_changed += 1;
                    }
                }
            } else {
                for i in 0..n {
                    if alpha[i] > 0.0
                        && alpha[i] < self.c
                        && self.examine_example(i, points, &mut alpha, &mut errors, cache)?
                    {
                        num_changed += 1;
                    }
                }
            }

            if examine_all {
                examine_all = false;
            } else if num_changed == 0 {
                examine_all = true;
            }

            iterations += 1;
        }

        let b = self.calculate_bias(&alpha, &errors);

        let support_indices: Vec<usize> = alpha
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| (a > self.config.epsilon).then_some(i))
            .collect();

        Ok(SolveOutcome {
            alpha,
            b,
            support_indices,
            iterations,
        })
    }

    fn kernel_cached(
        &self,
        cache: &mut KernelCache,
        points: &[LabeledPoint],
        i: usize,
        j: usize,
    ) -> f64 {
        let kernel = &self.kernel;
        cache.fetch(i, j, || kernel.compute(points[i].point, points[j].point))
    }

    /// Examine one example for a KKT violation, and if found, try a step
    fn examine_example(
        &self,
        i: usize,
        points: &[LabeledPoint],
        alpha: &mut [f64],
        errors: &mut [f64],
        cache: &mut KernelCache,
    ) -> Result<bool> {
        let y_i = points[i].label.signed();
        let alpha_i = alpha[i];
        let e_i = errors[i];
        let r_i = e_i * y_i;

        // KKT violations:
        // - r_i < -epsilon and alpha_i < C (alpha_i can increase)
        // - r_i > epsilon and alpha_i > 0 (alpha_i can decrease)
        if (r_i < -self.config.epsilon && alpha_i < self.c)
            || (r_i > self.config.epsilon && alpha_i > 0.0)
        {
            if let Some(j) = self.select_second_variable(i, e_i, errors) {
                if self.take_step(i, j, points, alpha, errors, cache)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    /// Second-choice heuristic: maximize |E_i - E_j|
    fn select_second_variable(&self, i: usize, e_i: f64, errors: &[f64]) -> Option<usize> {
        let mut best = None;
        let mut max_diff = 0.0;

        for (j, &e_j) in errors.iter().enumerate() {
            if j == i {
                continue;
            }
            let diff = (e_i - e_j).abs();
            if diff > max_diff {
                max_diff = diff;
                best = Some(j);
            }
        }

        best
    }

    /// Analytic optimization of the (i, j) pair
    fn take_step(
        &self,
        i: usize,
        j: usize,
        points: &[LabeledPoint],
        alpha: &mut [f64],
        errors: &mut [f64],
        cache: &mut KernelCache,
    ) -> Result<bool> {
        if i == j {
            return Ok(false);
        }

        let y_i = points[i].label.signed();
        let y_j = points[j].label.signed();
        let alpha_i_old = alpha[i];
        let alpha_j_old = alpha[j];
        let e_i = errors[i];
        let e_j = errors[j];
        let s = y_i * y_j;

        // Feasible range [L, H] for the new alpha_j
        let (low, high) = if y_i != y_j {
            let diff = alpha_j_old - alpha_i_old;
            (0.0_f64.max(diff), self.c.min(self.c + diff))
        } else {
            let sum = alpha_i_old + alpha_j_old;
            (0.0_f64.max(sum - self.c), self.c.min(sum))
        };

        if low >= high {
            return Ok(false);
        }

        let k_ii = self.kernel_cached(cache, points, i, i);
        let k_ij = self.kernel_cached(cache, points, i, j);
        let k_jj = self.kernel_cached(cache, points, j, j);

        let eta = k_ii + k_jj - 2.0 * k_ij;
        if eta <= 0.0 {
            // Non positive-definite quadratic form (possible with the sigmoid
            // kernel); skip the pair rather than evaluate the objective at
            // the interval ends.
            return Ok(false);
        }

        let mut alpha_j_new = alpha_j_old + y_j * (e_i - e_j) / eta;
        alpha_j_new = alpha_j_new.clamp(low, high);

        // Insufficient progress
        if (alpha_j_new - alpha_j_old).abs()
            < self.config.epsilon * (alpha_j_new + alpha_j_old + self.config.epsilon)
        {
            return Ok(false);
        }

        let alpha_i_new = alpha_i_old + s * (alpha_j_old - alpha_j_new);

        alpha[i] = alpha_i_new;
        alpha[j] = alpha_j_new;

        // Propagate the change through the error cache
        let delta_i = alpha_i_new - alpha_i_old;
        let delta_j = alpha_j_new - alpha_j_old;

        for k in 0..points.len() {
            let k_ik = self.kernel_cached(cache, points, i, k);
            let k_jk = self.kernel_cached(cache, points, j, k);
            errors[k] += y_i * delta_i * k_ik + y_j * delta_j * k_jk;
        }

        Ok(true)
    }

    /// Bias from in-bound support vectors (0 < alpha < C), falling back to
    /// all support vectors when none sit strictly inside the box
    fn calculate_bias(&self, alpha: &[f64], errors: &[f64]) -> f64 {
        let in_bound: Vec<usize> = alpha
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| {
                (a > self.config.epsilon && a < self.c - self.config.epsilon).then_some(i)
            })
            .collect();

        let pool: Vec<usize> = if in_bound.is_empty() {
            alpha
                .iter()
                .enumerate()
                .filter_map(|(i, &a)| (a > self.config.epsilon).then_some(i))
                .collect()
        } else {
            in_bound
        };

        if pool.is_empty() {
            return 0.0;
        }

        let sum: f64 = pool.iter().map(|&i| errors[i]).sum();
        -sum / pool.len() as f64
    }
}
