//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::views::settings::StorageStatus;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: StorageStatus,
    pub pending_writes: usize,
}

/// `GET /api/health`: liveness plus storage status.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    let config = ctx.core.remote_config()?;
    let pending_writes = ctx.core.lock_pending()?.len();

    Ok(Json(HealthResponse {
        status: "ok",
        version: crate::config::APP_VERSION,
        storage: StorageStatus::from_config(&config),
        pending_writes,
    }))
}
