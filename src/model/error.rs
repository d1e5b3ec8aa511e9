use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cross-encoder model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load cross-encoder model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("cross-encoder inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid model configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for ModelError {
    fn from(err: candle_core::Error) -> Self {
        ModelError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
