//! Batch cleaning handler.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use refinery::{Record, ResponseEnvelope};
use serde::Deserialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for `POST /clean_enrich`.
#[derive(Debug, Deserialize)]
pub struct CleanEnrichRequest {
    /// Rows to clean.
    pub records: Vec<Record>,

    /// Strategy mode; defaults to statistical.
    #[serde(default)]
    pub mode: Option<String>,
}

/// POST /clean_enrich - Clean and optionally enrich a batch of records.
///
/// Row failures are reported inside the envelope. A missing credential in
/// generative mode is reported as a top-level `error` with a 200 status.
pub async fn clean_enrich(
    State(state): State<AppState>,
    payload: Result<Json<CleanEnrichRequest>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let Json(request) = payload?;

    // Model calls block; keep them off the async workers.
    let processor = state.processor.clone();
    let envelope = tokio::task::spawn_blocking(move || {
        processor.process(&request.records, request.mode.as_deref())
    })
    .await?;

    Ok(Json(envelope))
}
