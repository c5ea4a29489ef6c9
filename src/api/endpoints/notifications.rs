//! Toast endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::notify::Notification;

#[derive(Serialize)]
pub struct LatestResponse {
    pub notification: Option<Notification>,
    /// Whether the toast is still within its display window.
    pub visible: bool,
}

/// `GET /api/notifications/latest`
pub async fn latest(State(ctx): State<ApiContext>) -> Result<Json<LatestResponse>, ApiError> {
    let notification = ctx.core.latest_notification()?;
    let visible = notification
        .as_ref()
        .is_some_and(|n| n.is_visible_at(Utc::now()));
    Ok(Json(LatestResponse {
        notification,
        visible,
    }))
}
