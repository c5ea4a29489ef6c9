//! View switching endpoint.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::View;
use crate::views::ShownView;

/// `GET /api/views/:view`: make `view` current and return its content.
pub async fn show(
    State(ctx): State<ApiContext>,
    Path(view): Path<String>,
) -> Result<Json<ShownView>, ApiError> {
    let view: View = view
        .parse()
        .map_err(|e: crate::models::ParseEnumError| ApiError::NotFound(e.to_string()))?;
    Ok(Json(ctx.core.show_view(view)?))
}
