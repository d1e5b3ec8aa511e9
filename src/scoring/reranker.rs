use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::model::Scorer;

use super::error::ScoringError;
use super::types::{RankedDocument, ScoredDocument, TopKRequest};

/// Pairs a query with candidate documents and scores them through a shared [`Scorer`].
///
/// Cloning shares the underlying model.
#[derive(Clone)]
pub struct Reranker {
    scorer: Arc<dyn Scorer>,
    max_batch_size: Option<usize>,
}

impl std::fmt::Debug for Reranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reranker")
            .field("model_id", &self.scorer.model_id())
            .field("device", &self.scorer.device_name())
            .field("max_batch_size", &self.max_batch_size)
            .finish()
    }
}

impl Reranker {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self {
            scorer,
            max_batch_size: None,
        }
    }

    /// Caps the number of documents per call. `None` means unlimited.
    pub fn with_max_batch_size(mut self, max_batch_size: Option<usize>) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn max_batch_size(&self) -> Option<usize> {
        self.max_batch_size
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn check_batch_size(&self, size: usize) -> Result<(), ScoringError> {
        match self.max_batch_size {
            Some(limit) if size > limit => Err(ScoringError::BatchTooLarge { size, limit }),
            _ => Ok(()),
        }
    }

    /// Scores every document against `query` in one model call.
    ///
    /// The result mirrors the input: same length, same order, no sorting.
    pub fn rerank(
        &self,
        query: &str,
        documents: Vec<String>,
    ) -> Result<Vec<ScoredDocument>, ScoringError> {
        self.check_batch_size(documents.len())?;

        if documents.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.score_batch(query, &documents)?;

        Ok(documents
            .into_iter()
            .zip(scores)
            .map(|(document, score)| ScoredDocument {
                document,
                score: f64::from(score),
            })
            .collect())
    }

    /// Scores the distinct documents, then returns the best `top_k` by descending score.
    ///
    /// Duplicate texts keep their first occurrence. Ties keep request order.
    pub fn rerank_top(&self, request: TopKRequest) -> Result<Vec<RankedDocument>, ScoringError> {
        let TopKRequest {
            query,
            documents,
            top_k,
            score_threshold,
        } = request;

        self.check_batch_size(documents.len())?;

        let (indices, unique) = dedup_documents(documents);
        if unique.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let scores = self.score_batch(&query, &unique)?;

        let ranked: Vec<RankedDocument> = unique
            .into_iter()
            .zip(indices)
            .zip(scores)
            .map(|((document, index), score)| RankedDocument {
                document,
                score: f64::from(score),
                index,
            })
            .collect();

        Ok(select_top(ranked, top_k, score_threshold))
    }

    fn score_batch(&self, query: &str, documents: &[String]) -> Result<Vec<f32>, ScoringError> {
        let pairs: Vec<(&str, &str)> = documents
            .iter()
            .map(|document| (query, document.as_str()))
            .collect();

        debug!(
            query_len = query.len(),
            num_documents = pairs.len(),
            "Scoring documents"
        );

        let scores = self.scorer.score(&pairs)?;

        if scores.len() != pairs.len() {
            return Err(ScoringError::ScoreCountMismatch {
                expected: pairs.len(),
                actual: scores.len(),
            });
        }

        if let Some((index, &score)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(ScoringError::NonFiniteScore { index, score });
        }

        Ok(scores)
    }
}

/// Drops repeated texts, returning the request index of each kept document.
fn dedup_documents(documents: Vec<String>) -> (Vec<usize>, Vec<String>) {
    let total = documents.len();
    let mut seen = HashSet::with_capacity(total);
    let mut indices = Vec::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for (index, document) in documents.into_iter().enumerate() {
        if seen.insert(document.clone()) {
            indices.push(index);
            unique.push(document);
        }
    }

    if unique.len() < total {
        debug!(
            before = total,
            after = unique.len(),
            "Removed duplicate documents"
        );
    }

    (indices, unique)
}

/// Sorts descending by score, applies the threshold, keeps at most `top_k`.
pub fn select_top(
    mut ranked: Vec<RankedDocument>,
    top_k: usize,
    score_threshold: Option<f64>,
) -> Vec<RankedDocument> {
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(threshold) = score_threshold {
        ranked.retain(|doc| doc.score >= threshold);
    }

    ranked.truncate(top_k);

    debug!(
        returned = ranked.len(),
        top_score = ranked.first().map(|d| d.score),
        "Selected top documents"
    );

    ranked
}
