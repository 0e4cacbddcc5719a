//! Service status handler.

use axum::{Json, extract::State};
use refinery::GenerativeModel;
use serde::Serialize;

use crate::server::state::AppState;

/// Generative capability status.
#[derive(Debug, Serialize)]
pub struct GenerativeStatus {
    /// Whether generative batches can run.
    pub available: bool,

    /// Name of the configured provider (if any).
    pub provider: Option<String>,

    /// Model identifier (if any).
    pub model: Option<String>,
}

/// Response for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub generative: GenerativeStatus,
}

/// GET /health - Report liveness and whether generative mode is configured.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = state.processor.model();

    Json(HealthResponse {
        status: "ok",
        generative: GenerativeStatus {
            available: state.generative_available(),
            provider: model.map(|m| m.name().to_string()),
            model: model.map(|m| m.config().model.clone()),
        },
    })
}
