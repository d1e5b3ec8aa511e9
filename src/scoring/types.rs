use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOP_K;

/// Body of `POST /rerank`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankRequest {
    pub query: String,
    pub documents: Vec<String>,
}

/// One input document with its raw model score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: String,
    pub score: f64,
}

/// Body of `POST /rerank/top`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopKRequest {
    pub query: String,
    pub documents: Vec<String>,
    /// Max results returned. Default: `5`.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Drop results scoring below this value.
    #[serde(default)]
    pub score_threshold: Option<f64>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// A selected document, with its position in the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub document: String,
    pub score: f64,
    /// Index of the first occurrence of `document` in the request.
    pub index: usize,
}
