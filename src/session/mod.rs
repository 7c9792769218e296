//! Interactive session controller
//!
//! Owns the labeled point set and the current classifier parameters, and
//! orchestrates retrain-and-redraw. All state that the original demo kept in
//! module-level globals lives here, created on start and dropped when the
//! session ends.

pub mod animation;
pub mod input;
pub mod script;

pub use self::animation::{AnimationDriver, Playback};
pub use self::input::{dispatch, InputEvent, MouseButton};

use crate::cache::KernelCache;
use crate::classifier::{FittedSvm, SvmClassifier};
use crate::core::{
    DecisionModel, KernelKind, Label, LabeledPoint, Point, SvmParams, TrainConfig,
};
use crate::data;
use crate::surface::{DecisionSurface, GridSpec};
use log::{debug, warn};

/// When the session retrains on its own
///
/// The observed demo wiring retrains on point mutations and animation ticks
/// but not on slider changes; both switches are explicit here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrainPolicy {
    /// Retrain immediately when a point is added
    pub on_point_added: bool,
    /// Retrain immediately when a parameter changes
    pub on_param_change: bool,
}

impl Default for RetrainPolicy {
    fn default() -> Self {
        Self {
            on_point_added: true,
            on_param_change: false,
        }
    }
}

/// The interactive classifier session
pub struct SessionController {
    points: Vec<LabeledPoint>,
    initial_points: Vec<LabeledPoint>,
    params: SvmParams,
    policy: RetrainPolicy,
    grid: GridSpec,
    train_config: TrainConfig,
    cache: KernelCache,
    model: Option<FittedSvm>,
    surface: Option<DecisionSurface>,
}

impl SessionController {
    /// Start a session on the default two-cluster set with default
    /// parameters, trained once like the original demo's startup pass
    pub fn new() -> Self {
        Self::with_points(data::two_clusters(data::DEFAULT_SEED))
    }

    /// Start a session on an explicit initial point set
    pub fn with_points(points: Vec<LabeledPoint>) -> Self {
        let train_config = TrainConfig::default();
        let mut session = Self {
            initial_points: points.clone(),
            points,
            params: SvmParams::default(),
            policy: RetrainPolicy::default(),
            grid: GridSpec::default(),
            cache: KernelCache::new(train_config.cache_entries),
            train_config,
            model: None,
            surface: None,
        };
        session.retrain();
        session
    }

    /// Override the retrain policy
    pub fn with_policy(mut self, policy: RetrainPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the surface grid (tests use a coarse one)
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self.retrain();
        self
    }

    // -- operations ---------------------------------------------------------

    /// Append a labeled point and retrain per policy
    ///
    /// Coordinates outside the plot bounds are accepted; they just render
    /// off-axis.
    pub fn add_point(&mut self, point: Point, label: Label) {
        self.points.push(LabeledPoint::new(point, label));
        if self.policy.on_point_added {
            self.retrain();
        }
    }

    /// Fit a fresh classifier on the current set and rebuild the surface
    ///
    /// With fewer than two points, or a single-class set, training is
    /// skipped and the previous render state is cleared so no stale contour
    /// survives. Fit failures degrade the same way; nothing propagates past
    /// this boundary.
    pub fn retrain(&mut self) {
        if self.is_degenerate() {
            debug!(
                "skipping retrain: degenerate point set ({} points)",
                self.points.len()
            );
            self.model = None;
            self.surface = None;
            return;
        }

        let classifier = SvmClassifier::new().with_params(self.params);
        match classifier.fit_with_cache(&self.points, &mut self.cache) {
            Ok(model) => {
                self.surface = Some(DecisionSurface::evaluate(&model, &self.grid));
                self.model = Some(model);
            }
            Err(e) => {
                warn!("fit failed, clearing surface: {e}");
                self.model = None;
                self.surface = None;
            }
        }
    }

    /// Select the kernel
    pub fn set_kernel(&mut self, kernel: KernelKind) {
        if self.params.kernel != kernel {
            self.params.kernel = kernel;
            self.cache.invalidate();
            self.maybe_retrain_on_param_change();
        }
    }

    /// Set regularization strength C
    ///
    /// C does not enter the kernel values, so the cache survives.
    pub fn set_c(&mut self, c: f64) {
        self.params.c = c;
        self.maybe_retrain_on_param_change();
    }

    /// Set kernel width gamma
    pub fn set_gamma(&mut self, gamma: f64) {
        if self.params.gamma != gamma {
            self.params.gamma = gamma;
            self.cache.invalidate();
            self.maybe_retrain_on_param_change();
        }
    }

    fn maybe_retrain_on_param_change(&mut self) {
        if self.policy.on_param_change {
            self.retrain();
        }
    }

    /// Restore the original point set and the default parameters, rebuilding
    /// the session state from scratch
    pub fn reset(&mut self) {
        self.points = self.initial_points.clone();
        self.params = SvmParams::default();
        self.cache.invalidate();
        self.model = None;
        self.surface = None;
        self.retrain();
    }

    /// Live decision-value readout for the pointer position
    ///
    /// None when no model exists or the query produces a non-finite value;
    /// the caller blanks the readout text in that case.
    pub fn decision_readout(&self, point: Point) -> Option<f64> {
        let value = self.model.as_ref()?.decision_value(point);
        value.is_finite().then_some(value)
    }

    // -- state --------------------------------------------------------------

    /// Fewer than two points, or all points in one class
    pub fn is_degenerate(&self) -> bool {
        if self.points.len() < 2 {
            return true;
        }
        let first = self.points[0].label;
        self.points.iter().all(|p| p.label == first)
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn params(&self) -> &SvmParams {
        &self.params
    }

    pub fn policy(&self) -> &RetrainPolicy {
        &self.policy
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn model(&self) -> Option<&FittedSvm> {
        self.model.as_ref()
    }

    pub fn surface(&self) -> Option<&DecisionSurface> {
        self.surface.as_ref()
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
