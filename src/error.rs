//! Error types for the ampute crate

use thiserror::Error;

/// Result type alias for ampute operations
pub type Result<T> = std::result::Result<T, AmputeError>;

/// Main error type for the ampute crate
#[derive(Error, Debug)]
pub enum AmputeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("Unseen labels: {0}")]
    UnseenLabel(String),

    #[error("Encoder not fitted")]
    NotFitted,

    #[error("Training error: {0}")]
    Training(String),
}

impl From<ndarray::ShapeError> for AmputeError {
    fn from(err: ndarray::ShapeError) -> Self {
        AmputeError::ShapeMismatch {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}
