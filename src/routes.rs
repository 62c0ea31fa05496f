use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};

use crate::error::ApiError;
use crate::language::SUPPORTED_LANGUAGES;
use crate::state::AppState;
use crate::translate::{
    BackendStatus, DetectionResponse, HealthResponse, TranslationRequest, TranslationResponse,
};

pub fn create_routes(state: AppState) -> Router<AppState> {
    let status_path = format!("/{}-status", state.translation_service.backend_name());

    Router::new()
        // Health check
        .route("/", get(root))
        .route("/health", get(health_check))

        // Translation API
        .route("/translate", post(translate))
        .route("/detect-language", post(detect_language))
        .route("/supported-languages", get(supported_languages))

        // Backend status, under the backend's own name and a stable alias
        .route(&status_path, get(backend_status))
        .route("/backend-status", get(backend_status))
}

async fn root(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.translation_service.root().await)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.translation_service.health().await)
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let response = state.translation_service.translate(request).await?;
    Ok(Json(response))
}

async fn detect_language(
    State(state): State<AppState>,
    payload: Result<Json<TranslationRequest>, JsonRejection>,
) -> Result<Json<DetectionResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    Ok(Json(state.translation_service.detect(&request.text)))
}

async fn supported_languages() -> Json<&'static [&'static str]> {
    Json(SUPPORTED_LANGUAGES)
}

async fn backend_status(State(state): State<AppState>) -> Json<BackendStatus> {
    Json(state.translation_service.backend_status().await)
}
