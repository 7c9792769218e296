//! Interactive SVM decision-boundary visualizer
//!
//! A soft-margin SVM trained with SMO, plus the session machinery of an
//! interactive demo: click to add labeled points, retrain on the spot, and
//! render the decision surface with its margins and support vectors.

pub mod cache;
pub mod classifier;
pub mod core;
pub mod data;
pub mod kernel;
pub mod render;
pub mod session;
pub mod solver;
pub mod surface;
pub mod text;

// Re-export main types for convenience
pub use crate::cache::{CacheStats, KernelCache};
pub use crate::classifier::{FittedSvm, SvmClassifier};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, TrainerError};
pub use crate::kernel::{Kernel, LinearKernel, PolynomialKernel, RbfKernel, SigmoidKernel};
pub use crate::render::{render_frame_to_png, render_scene, RenderOptions};
pub use crate::session::{
    dispatch, AnimationDriver, InputEvent, MouseButton, Playback, RetrainPolicy,
    SessionController,
};
pub use crate::surface::{ContourSegment, DecisionSurface, GridSpec};
pub use crate::text::{fa, set_farsi_font};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
