use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::extract::JsonBody;
use crate::gateway::state::HandlerState;
use crate::scoring::{RankedDocument, RerankRequest, ScoredDocument, TopKRequest};

/// `POST /rerank`: one score per document, in request order.
///
/// Bodies that do not parse as [`RerankRequest`] are rejected with 422 by
/// [`JsonBody`] before this runs.
#[instrument(skip(state, request), fields(documents = request.documents.len()))]
pub async fn rerank_handler(
    State(state): State<HandlerState>,
    JsonBody(request): JsonBody<RerankRequest>,
) -> Result<Json<Vec<ScoredDocument>>, GatewayError> {
    let reranker = state.reranker;
    reranker.check_batch_size(request.documents.len())?;

    let results = tokio::task::spawn_blocking(move || {
        let RerankRequest { query, documents } = request;
        reranker.rerank(&query, documents)
    })
    .await
    .map_err(|e| GatewayError::InternalError(format!("scoring task failed: {}", e)))??;

    debug!(results = results.len(), "Rerank complete");

    Ok(Json(results))
}

/// `POST /rerank/top`: de-duplicated, best-first, at most `top_k` results.
#[instrument(skip(state, request), fields(documents = request.documents.len(), top_k = request.top_k))]
pub async fn rerank_top_handler(
    State(state): State<HandlerState>,
    JsonBody(request): JsonBody<TopKRequest>,
) -> Result<Json<Vec<RankedDocument>>, GatewayError> {
    let reranker = state.reranker;
    reranker.check_batch_size(request.documents.len())?;

    let results = tokio::task::spawn_blocking(move || reranker.rerank_top(request))
        .await
        .map_err(|e| GatewayError::InternalError(format!("scoring task failed: {}", e)))??;

    debug!(results = results.len(), "Top-k rerank complete");

    Ok(Json(results))
}
