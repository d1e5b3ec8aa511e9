use std::sync::Arc;

use crate::model::Scorer;
use crate::scoring::Reranker;

#[derive(Clone, Debug)]
pub struct HandlerState {
    pub reranker: Reranker,
}

impl HandlerState {
    pub fn new(scorer: Arc<dyn Scorer>, max_batch_size: Option<usize>) -> Self {
        Self {
            reranker: Reranker::new(scorer).with_max_batch_size(max_batch_size),
        }
    }
}
