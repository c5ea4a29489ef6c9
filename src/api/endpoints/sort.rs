//! Table sort endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::listing::SortState;
use crate::models::Collection;
use crate::views::ShownView;

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub collection: Collection,
    pub column: String,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub sort: SortState,
    /// The current view, re-rendered with the new order.
    pub shown: ShownView,
}

/// `POST /api/sort`: sort a collection by column; repeating the same
/// column flips between ascending and descending.
pub async fn sort_table(
    State(ctx): State<ApiContext>,
    Json(req): Json<SortRequest>,
) -> Result<Json<SortResponse>, ApiError> {
    let sort = ctx
        .core
        .write_store()?
        .sort_table(req.collection, &req.column);
    let shown = ctx.core.refresh_current_view()?;
    Ok(Json(SortResponse { sort, shown }))
}
