//! Header clock endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct ClockResponse {
    pub text: String,
}

/// `GET /api/clock`
pub async fn current(State(ctx): State<ApiContext>) -> Result<Json<ClockResponse>, ApiError> {
    Ok(Json(ClockResponse {
        text: ctx.core.clock()?,
    }))
}
