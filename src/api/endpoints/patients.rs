//! Patient endpoints.
//!
//! - `GET /api/patients`: filtered, paginated table
//! - `GET /api/patients/:id`: detail panel
//! - `POST /api/patients`: intake form

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, PageQuery};
use crate::forms::{self, PatientInput, Submitted};
use crate::listing::Listing;
use crate::models::{Patient, PatientFilter};
use crate::views::patients::{self, PatientDetail, PatientRow};

#[derive(Debug, Deserialize)]
pub struct PatientsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

/// `GET /api/patients?search=&status=&page=`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<PatientsQuery>,
) -> Result<Json<Listing<PatientRow>>, ApiError> {
    let page = PageQuery { page: query.page }.page();
    let filter = PatientFilter {
        search: query.search,
        status: query.status,
    };

    let mut router = ctx.core.lock_router()?;
    let store = ctx.core.read_store()?;
    Ok(Json(router.render_patients(&store, filter, page)))
}

/// `GET /api/patients/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<i64>,
) -> Result<Json<PatientDetail>, ApiError> {
    let store = ctx.core.read_store()?;
    patients::detail(&store, patient_id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Patient not found".into()))
}

/// `POST /api/patients`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<PatientInput>,
) -> Result<(StatusCode, Json<Submitted<Patient, PatientRow>>), ApiError> {
    let submitted = ctx
        .blocking(move |core| forms::add_patient(core, &input))
        .await?;
    Ok((StatusCode::CREATED, Json(submitted)))
}
