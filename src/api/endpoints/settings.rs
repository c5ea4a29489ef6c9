//! Settings endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::sync::{self, ConnectionTest};
use crate::views::settings::StorageStatus;

/// `GET /api/settings`
pub async fn status(State(ctx): State<ApiContext>) -> Result<Json<StorageStatus>, ApiError> {
    Ok(Json(StorageStatus::from_config(&ctx.core.remote_config()?)))
}

#[derive(Debug, Deserialize)]
pub struct TestConnectionRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct TestConnectionResponse {
    #[serde(flatten)]
    pub test: ConnectionTest,
    pub storage: StorageStatus,
}

/// `POST /api/settings/test-connection`: switch to `url` and try a load.
/// A failed load is reported in the body, not as an HTTP error.
pub async fn test_connection(
    State(ctx): State<ApiContext>,
    Json(req): Json<TestConnectionRequest>,
) -> Result<Json<TestConnectionResponse>, ApiError> {
    let test = ctx
        .blocking(move |core| sync::configure_remote(core, &req.url))
        .await?;
    let storage = StorageStatus::from_config(&ctx.core.remote_config()?);
    Ok(Json(TestConnectionResponse { test, storage }))
}
