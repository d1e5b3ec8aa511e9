use thiserror::Error;

use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("batch of {size} documents exceeds limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("scorer returned {actual} scores for {expected} pairs")]
    ScoreCountMismatch { expected: usize, actual: usize },

    #[error("scorer returned non-finite score {score} for document {index}")]
    NonFiniteScore { index: usize, score: f32 },
}
