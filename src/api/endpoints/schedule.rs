//! Schedule endpoints.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::{CoreError, CoreState};
use crate::views::schedule::{self, Schedule, WeekDirection};

fn build(core: &CoreState) -> Result<Schedule, CoreError> {
    let store = core.read_store()?;
    Ok(schedule::build(&store.doctors, &mut rand::thread_rng()))
}

/// `GET /api/schedule`
pub async fn grid(State(ctx): State<ApiContext>) -> Result<Json<Schedule>, ApiError> {
    Ok(Json(build(&ctx.core)?))
}

#[derive(Debug, Deserialize)]
pub struct WeekRequest {
    /// `-1` for the previous week, `1` for the next.
    pub offset: i32,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub direction: WeekDirection,
    pub schedule: Schedule,
}

/// `POST /api/schedule/week`: accepted, but the grid stays a placeholder.
pub async fn change_week(
    State(ctx): State<ApiContext>,
    Json(req): Json<WeekRequest>,
) -> Result<Json<WeekResponse>, ApiError> {
    let direction = WeekDirection::from_offset(req.offset);
    schedule::change_week(direction);
    Ok(Json(WeekResponse {
        direction,
        schedule: build(&ctx.core)?,
    }))
}
