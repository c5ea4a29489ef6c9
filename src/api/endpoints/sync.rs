//! Sync endpoints.
//!
//! - `POST /api/sync`: user-triggered re-sync from the remote store
//! - `GET /api/sync/pending`: writes that have not reached the remote
//! - `POST /api/sync/retry`: re-send the pending writes

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::sync::{self, LoadOutcome, PendingWrite, RetryReport};

/// `POST /api/sync`
pub async fn resync(State(ctx): State<ApiContext>) -> Result<Json<LoadOutcome>, ApiError> {
    Ok(Json(ctx.blocking(sync::resync).await?))
}

#[derive(Serialize)]
pub struct PendingResponse {
    pub count: usize,
    /// Writes lost to the queue bound since startup.
    pub dropped: usize,
    pub writes: Vec<PendingWrite>,
}

/// `GET /api/sync/pending`
pub async fn pending(State(ctx): State<ApiContext>) -> Result<Json<PendingResponse>, ApiError> {
    let pending = ctx.core.lock_pending()?;
    Ok(Json(PendingResponse {
        count: pending.len(),
        dropped: pending.dropped(),
        writes: pending.entries().to_vec(),
    }))
}

/// `POST /api/sync/retry`
pub async fn retry(State(ctx): State<ApiContext>) -> Result<Json<RetryReport>, ApiError> {
    Ok(Json(ctx.blocking(sync::retry_pending).await?))
}
