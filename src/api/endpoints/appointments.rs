//! Appointment endpoints.
//!
//! - `GET /api/appointments`: filtered, paginated table
//! - `GET /api/appointments/form-options`: booking form selects
//! - `POST /api/appointments`: booking form

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, PageQuery};
use crate::forms::{self, AppointmentFormOptions, AppointmentInput, Submitted};
use crate::listing::Listing;
use crate::models::filters::ALL;
use crate::models::{Appointment, AppointmentFilter};
use crate::views::appointments::AppointmentRow;

#[derive(Debug, Deserialize)]
pub struct AppointmentsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    /// `<select>` value; empty or `all` means any doctor.
    pub doctor_id: Option<String>,
    pub page: Option<usize>,
}

fn doctor_filter(raw: Option<&str>) -> Result<Option<i64>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") | Some(ALL) => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("Invalid doctor_id: {value}"))),
    }
}

/// `GET /api/appointments?search=&status=&doctor_id=&page=`
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Listing<AppointmentRow>>, ApiError> {
    let filter = AppointmentFilter {
        doctor_id: doctor_filter(query.doctor_id.as_deref())?,
        search: query.search,
        status: query.status,
    };
    let page = PageQuery { page: query.page }.page();

    let mut router = ctx.core.lock_router()?;
    let store = ctx.core.read_store()?;
    Ok(Json(router.render_appointments(&store, filter, page)))
}

/// `GET /api/appointments/form-options`: 422 with a warning toast when
/// there are no patients or no doctors yet.
pub async fn form_options(
    State(ctx): State<ApiContext>,
) -> Result<Json<AppointmentFormOptions>, ApiError> {
    Ok(Json(forms::open_appointment_form(&ctx.core)?))
}

/// `POST /api/appointments`
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(input): Json<AppointmentInput>,
) -> Result<(StatusCode, Json<Submitted<Appointment, AppointmentRow>>), ApiError> {
    let submitted = ctx
        .blocking(move |core| forms::add_appointment(core, &input))
        .await?;
    Ok((StatusCode::CREATED, Json(submitted)))
}
