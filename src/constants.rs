//! Cross-cutting, shared constants.

/// Pretrained checkpoint served by this process.
///
/// Resolved to a local directory under the models root (see
/// [`Config::model_dir`](crate::config::Config::model_dir)).
pub const MODEL_ID: &str = "cross-encoder/ms-marco-MiniLM-L-6-v2";

/// Maximum tokens per (query, document) pair; longer pairs are truncated.
pub const MAX_SEQ_LEN: usize = 512;

pub const DEFAULT_PORT: u16 = 7000;

pub const DEFAULT_MODELS_DIR: &str = "./models";

/// Default `top_k` for `/rerank/top` when the request leaves it out.
pub const DEFAULT_TOP_K: usize = 5;
