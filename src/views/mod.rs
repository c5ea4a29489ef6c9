//! View router and per-view renderers.
//!
//! Every renderer is a pure function of the store (plus an injected RNG for
//! the placeholder views) that returns serialisable rows or cards; painting
//! them is the front end's job.

pub mod appointments;
pub mod clock;
pub mod dashboard;
pub mod departments;
pub mod doctors;
pub mod patients;
pub mod router;
pub mod schedule;
pub mod search;
pub mod settings;

use serde::Serialize;

use crate::listing::Listing;

pub use crate::models::View;
pub use router::{SearchOutcome, ShownView, ViewRouter};

/// Content of one view, tagged by view name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ViewContent {
    Dashboard(dashboard::Dashboard),
    Patients(Listing<patients::PatientRow>),
    Appointments(Listing<appointments::AppointmentRow>),
    Doctors(doctors::DoctorCards),
    Departments(departments::DepartmentCards),
    Schedule(schedule::Schedule),
    Settings(settings::StorageStatus),
}
