use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Why a call to the translation backend did not produce usable text.
///
/// The orchestrator folds every variant into "use the fallback table";
/// the variants only exist so the logs say what actually went wrong.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no translation backend is configured")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode backend response: {0}")]
    Decode(String),

    #[error("backend returned an empty response")]
    EmptyResponse,

    #[error("model {0} is not installed on the backend")]
    ModelNotInstalled(String),
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BackendUnavailable(String),

    #[error("{0}")]
    InvalidRequest(String),

    /// The cause is logged; clients only see a generic message.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::BackendUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ApiError::InvalidRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            ApiError::Internal(cause) => {
                tracing::error!("Request failed: {}", cause);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Translation failed due to an internal error".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
