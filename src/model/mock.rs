use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Scorer;
use super::error::ModelError;

const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "to", "of", "in", "for", "on", "with",
    "at", "by", "from", "as", "and", "or", "but", "if", "what", "which", "who", "how", "this",
    "that", "it", "its", "do", "does",
];

/// Deterministic scorer for tests: lexical overlap mapped onto a logit-like range.
///
/// Counts calls so tests can assert the model was (or was not) reached.
#[derive(Debug, Default)]
pub struct MockScorer {
    calls: AtomicUsize,
    pairs_scored: AtomicUsize,
    fail: bool,
}

impl MockScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scorer whose every call fails with [`ModelError::InferenceFailed`].
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of `score` invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Total pairs passed to `score` so far.
    pub fn pairs_scored(&self) -> usize {
        self.pairs_scored.load(Ordering::SeqCst)
    }

    /// Score of a single pair, independent of any batch.
    pub fn pair_score(query: &str, document: &str) -> f32 {
        let query_words = content_words(query);
        let document_words = content_words(document);

        if query_words.is_empty() {
            return -5.0;
        }

        let matches = query_words.intersection(&document_words).count();
        let recall = matches as f32 / query_words.len() as f32;

        let union = query_words.union(&document_words).count();
        let jaccard = if union > 0 {
            matches as f32 / union as f32
        } else {
            0.0
        };

        // [0, 1] -> [-5, 5], roughly the span of ms-marco logits
        10.0 * (0.6 * recall + 0.4 * jaccard) - 5.0
    }
}

fn content_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty() && !STOP_WORDS.contains(w))
        .map(|w| w.trim_end_matches('s').to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

impl Scorer for MockScorer {
    fn score(&self, pairs: &[(&str, &str)]) -> Result<Vec<f32>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pairs_scored.fetch_add(pairs.len(), Ordering::SeqCst);

        if self.fail {
            return Err(ModelError::InferenceFailed {
                reason: "mock scorer configured to fail".to_string(),
            });
        }

        Ok(pairs
            .iter()
            .map(|(query, document)| Self::pair_score(query, document))
            .collect())
    }

    fn model_id(&self) -> &str {
        "mock"
    }

    fn device_name(&self) -> &'static str {
        "mock"
    }
}
