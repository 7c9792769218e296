//! Error types for the trainer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrainerError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Optimization failed: {0}")]
    OptimizationError(String),

    #[error("Empty training set")]
    EmptyTrainingSet,

    #[error("Degenerate training set: {0}")]
    DegenerateTrainingSet(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Script error: {0}")]
    ScriptError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrainerError>;
