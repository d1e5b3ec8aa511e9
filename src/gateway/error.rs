use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request body: {0}")]
    InvalidRequest(#[from] JsonRejection),

    #[error("scoring failed: {0}")]
    ScoringFailed(#[from] ScoringError),

    #[error("internal error: {0}")]
    InternalError(String),
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            GatewayError::InvalidRequest(rejection) => {
                debug!(error = %rejection.body_text(), "Rejected request body");
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            GatewayError::ScoringFailed(inner @ ScoringError::BatchTooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, inner.to_string())
            }
            GatewayError::ScoringFailed(_) | GatewayError::InternalError(_) => {
                error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}
