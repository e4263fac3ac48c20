use axum::extract::State;
use axum::Json;

use crate::server::error::ApiError;
use crate::server::requests::ClassifyRequest;
use crate::server::responses::{ClassificationResponse, HealthResponse};
use crate::server::AppState;

/// `POST /classify` — run the two-stage gate on one message
pub async fn classify(
    State(state): State<AppState>,
    Json(body): Json<ClassifyRequest>,
) -> Result<Json<ClassificationResponse>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::validation("message must not be empty"));
    }

    let Some(pipeline) = state.pipeline() else {
        return Err(ApiError::unavailable("classifiers are not loaded yet"));
    };

    // Candle inference is synchronous CPU-bound work; keep it off the runtime.
    let message = body.message;
    let outcome = tokio::task::spawn_blocking(move || pipeline.classify(&message))
        .await
        .map_err(|e| ApiError::internal(format!("classification task failed: {}", e)))??;

    Ok(Json(outcome.into()))
}

/// `GET /health` — report whether both models are loaded
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_loaded(state.models_loaded()))
}
