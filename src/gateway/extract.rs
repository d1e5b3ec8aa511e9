use axum::extract::FromRequest;

use crate::gateway::error::GatewayError;

/// `Json` body extractor whose rejections all render as 422 [`GatewayError`]s.
///
/// Covers schema mismatches, unparseable JSON and a missing JSON content type.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(GatewayError))]
pub struct JsonBody<T>(pub T);
