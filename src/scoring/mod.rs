//! Query/document pairing and ranking on top of a [`Scorer`](crate::model::Scorer).
//!
//! [`Reranker::rerank`] is the core of `POST /rerank`: it builds one
//! `(query, document)` pair per input, scores the whole batch in a single
//! model call and zips the scores back onto the documents in input order.
//! [`Reranker::rerank_top`] adds de-duplication, descending sort, an optional
//! threshold and a `top_k` cut for `POST /rerank/top`.
//!
//! Nothing here knows about HTTP; handlers run these calls on the blocking pool.

pub mod error;
pub mod reranker;
pub mod types;


pub use error::ScoringError;
pub use reranker::{Reranker, select_top};
pub use types::{RankedDocument, RerankRequest, ScoredDocument, TopKRequest};
