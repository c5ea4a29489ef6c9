//! Doctor endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::today;
use crate::forms;
use crate::notify::Notification;
use crate::views::doctors::{self, DoctorCards};

/// `GET /api/doctors`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DoctorCards>, ApiError> {
    let store = ctx.core.read_store()?;
    Ok(Json(doctors::render(&store, today())))
}

#[derive(Serialize)]
pub struct StubResponse {
    pub notification: Option<Notification>,
}

/// `POST /api/doctors`: not implemented yet; raises an info toast.
pub async fn create(State(ctx): State<ApiContext>) -> Result<Json<StubResponse>, ApiError> {
    forms::add_doctor(&ctx.core);
    Ok(Json(StubResponse {
        notification: ctx.core.latest_notification()?,
    }))
}
