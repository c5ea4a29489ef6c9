//! Dashboard summary endpoint.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::today;
use crate::views::dashboard::{self, Dashboard};

/// `GET /api/dashboard`: totals, recent appointments and chart series.
/// Analytics are recomputed first.
pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<Dashboard>, ApiError> {
    let mut store = ctx.core.write_store()?;
    store.update_analytics();
    Ok(Json(dashboard::build(&store, today())))
}
