//! Cross-encoder reranking service (library crate used by the server binary and tests).
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - environment-backed server configuration
//! - [`CrossEncoder`], [`CrossEncoderConfig`] - model loading and batched pair scoring
//! - [`Scorer`] - the scoring seam the HTTP layer depends on
//! - [`Reranker`] - query/document pairing, top-k selection
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! [`MockScorer`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod model;
pub mod scoring;

pub use config::{Config, ConfigError};
pub use constants::{DEFAULT_PORT, DEFAULT_TOP_K, MAX_SEQ_LEN, MODEL_ID};
#[cfg(any(test, feature = "mock"))]
pub use model::MockScorer;
pub use model::{CrossEncoder, CrossEncoderConfig, ModelError, Scorer};
pub use scoring::{
    RankedDocument, RerankRequest, Reranker, ScoredDocument, ScoringError, TopKRequest,
};
