use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Fault on a path with no explicit error mapping (list, create, delete).
/// Rendered as 500 with `{"error": msg}`.
#[derive(Debug)]
pub struct ApiError(pub String);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e.to_string()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.0;
        error!(error = %msg, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl From<ServiceError> for StartupError {
    fn from(e: ServiceError) -> Self { Self::Storage(e.to_string()) }
}
