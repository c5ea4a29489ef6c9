//! Department endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::{CoreError, CoreState};
use crate::views::departments::{self, DepartmentCards};

fn render(core: &CoreState) -> Result<DepartmentCards, CoreError> {
    let store = core.read_store()?;
    Ok(departments::render(&store, &mut rand::thread_rng()))
}

/// `GET /api/departments`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DepartmentCards>, ApiError> {
    Ok(Json(render(&ctx.core)?))
}
