//! Cross-encoder model loading and scoring.
//!
//! - [`CrossEncoder`] loads a BERT sequence classifier once and scores
//!   (query, document) pairs in a single batched forward pass.
//! - [`Scorer`] is the seam the HTTP layer depends on, so handlers can run
//!   against [`MockScorer`] in tests.

/// BERT sequence classifier (single-logit head).
pub mod bert;
/// Cross-encoder loader and batch scorer.
pub mod cross_encoder;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
/// Tokenizer loading helpers.
pub mod utils;

pub use cross_encoder::{CrossEncoder, CrossEncoderConfig};
pub use error::ModelError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockScorer;

/// Scores (query, document) pairs.
///
/// `score(pairs)` returns exactly one score per pair, in pair order. The score
/// of a pair does not depend on the other pairs in the batch.
pub trait Scorer: Send + Sync {
    fn score(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>, ModelError>;

    /// Checkpoint identifier, reported by `/ready`.
    fn model_id(&self) -> &str;

    /// Short device label (`cpu`, `cuda`, `metal`, `mock`).
    fn device_name(&self) -> &'static str;
}
