//! Header search endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::core_state::{today, CoreError, CoreState};
use crate::views::SearchOutcome;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

fn run(core: &CoreState, term: &str) -> Result<SearchOutcome, CoreError> {
    let mut router = core.lock_router()?;
    let mut store = core.write_store()?;
    let config = core.remote_config()?;
    Ok(router.global_search(term, &mut store, &config, today(), &mut rand::thread_rng()))
}

/// `GET /api/search?term=`: jump to the patients view on a name match.
pub async fn global(
    State(ctx): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchOutcome>, ApiError> {
    Ok(Json(run(&ctx.core, &query.term)?))
}
