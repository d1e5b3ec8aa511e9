//! HTTP gateway (Axum) exposing the reranker.
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /rerank` | [`rerank_handler`] |
//! | `POST /rerank/top` | [`rerank_top_handler`] |
//! | `GET /healthz` | [`health_handler`] |
//! | `GET /ready` | [`ready_handler`] |

pub mod error;
pub mod extract;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use extract::JsonBody;
pub use handler::{rerank_handler, rerank_top_handler};
pub use state::HandlerState;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/rerank", post(rerank_handler))
        .route("/rerank/top", post(rerank_top_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub model: String,
    pub device: String,
    pub max_batch_size: Option<usize>,
}

#[tracing::instrument]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// The model is loaded before the router exists, so a reachable router is ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Json<ReadyResponse> {
    let scorer = state.reranker.scorer();

    Json(ReadyResponse {
        status: "ok".to_string(),
        model: scorer.model_id().to_string(),
        device: scorer.device_name().to_string(),
        max_batch_size: state.reranker.max_batch_size(),
    })
}
