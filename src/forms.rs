//! Form handlers: add patient, add appointment, add-doctor stub.
//!
//! Input arrives as the raw form fields. Validation is limited to
//! required fields and the patient/doctor selection; anything that fails
//! is reported as a warning toast and leaves the store untouched.

use serde::{Deserialize, Serialize};

use crate::core_state::{CoreError, CoreState};
use crate::listing::Listing;
use crate::models::{
    Appointment, Collection, Gender, NotificationKind, Patient, NEW_PATIENT_STATUS, PENDING_STATUS,
};
use crate::store::DomainStore;
use crate::sync;
use crate::views::appointments::{AppointmentRow, SelectOption};
use crate::views::patients::PatientRow;

pub const MSG_PATIENT_ADDED: &str = "Patient added successfully!";
pub const MSG_APPOINTMENT_ADDED: &str = "Appointment scheduled successfully!";
pub const MSG_SELECT_BOTH: &str = "Please select both patient and doctor";
pub const MSG_ADD_PATIENTS_FIRST: &str = "Please add patients first before scheduling appointments";
pub const MSG_ADD_DOCTORS_FIRST: &str = "Please add doctors first before scheduling appointments";
pub const MSG_ADD_DOCTOR_STUB: &str = "Add Doctor functionality - Coming Soon!";

/// Why a form submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Please select both patient and doctor")]
    MissingSelection,
    #[error("Please add patients first before scheduling appointments")]
    NoPatients,
    #[error("Please add doctors first before scheduling appointments")]
    NoDoctors,
    #[error("Invalid number in field: {0}")]
    InvalidNumber(&'static str),
    #[error("No identifiers left for {0}")]
    IdsExhausted(&'static str),
}

// ─── Input ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub blood_group: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentInput {
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub treatment: Option<String>,
    pub notes: Option<String>,
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, FormError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(FormError::MissingField(field))
}

fn selection(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(value: &str, field: &'static str) -> Result<i64, FormError> {
    value.parse().map_err(|_| FormError::InvalidNumber(field))
}

// ─── Record synthesis ─────────────────────────────────────────────────────────

/// Validate `input` and build the patient that would be stored as `patient_id`.
pub fn build_patient(input: &PatientInput, patient_id: i64) -> Result<Patient, FormError> {
    let age = required(&input.age, "age")?;
    Ok(Patient {
        patient_id,
        first_name: required(&input.first_name, "first_name")?,
        last_name: required(&input.last_name, "last_name")?,
        age: age.parse().map_err(|_| FormError::InvalidNumber("age"))?,
        gender: Gender::from(required(&input.gender, "gender")?),
        phone: required(&input.phone, "phone")?,
        address: required(&input.address, "address")?,
        blood_group: required(&input.blood_group, "blood_group")?,
        status: NEW_PATIENT_STATUS.to_string(),
    })
}

/// Validate `input` and build the appointment that would be stored as `appt_id`.
/// The patient/doctor selection is checked before any other field.
pub fn build_appointment(input: &AppointmentInput, appt_id: i64) -> Result<Appointment, FormError> {
    let (Some(patient_id), Some(doctor_id)) =
        (selection(&input.patient_id), selection(&input.doctor_id))
    else {
        return Err(FormError::MissingSelection);
    };

    Ok(Appointment {
        appt_id,
        patient_id: parse_id(patient_id, "patient_id")?,
        doctor_id: parse_id(doctor_id, "doctor_id")?,
        date: required(&input.date, "date")?,
        time: required(&input.time, "time")?,
        treatment: required(&input.treatment, "treatment")?,
        status: PENDING_STATUS.to_string(),
        notes: Some(input.notes.clone().unwrap_or_default()),
    })
}

// ─── Handlers ─────────────────────────────────────────────────────────────────

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted<R, T> {
    pub record: R,
    /// `false` when the remote write failed and was queued.
    pub synced: bool,
    pub listing: Listing<T>,
}

fn reject(core: &CoreState, error: FormError) -> CoreError {
    tracing::debug!(%error, "Form submission rejected");
    core.notify(NotificationKind::Warning, error.to_string());
    error.into()
}

/// Register a patient: assign `max + 1`, append, push to the remote, then
/// recompute analytics and re-render the patients table.
///
/// Blocking; see `sync`.
pub fn add_patient(
    core: &CoreState,
    input: &PatientInput,
) -> Result<Submitted<Patient, PatientRow>, CoreError> {
    let patient = {
        let mut store = core.write_store()?;
        let next_id = store
            .next_patient_id()
            .ok_or(FormError::IdsExhausted("patient_id"));
        let patient = match next_id.and_then(|id| build_patient(input, id)) {
            Ok(p) => p,
            Err(e) => return Err(reject(core, e)),
        };
        store.patients.push(patient.clone());
        patient
    };
    tracing::info!(patient_id = patient.patient_id, "Patient added");

    let synced = sync::save_record(core, Collection::Patients, &patient)?;

    let listing = {
        let mut router = core.lock_router()?;
        let mut store = core.write_store()?;
        store.update_analytics();
        let filter = router.patient_filter().clone();
        router.render_patients(&store, filter, 1)
    };
    core.notify(NotificationKind::Success, MSG_PATIENT_ADDED);

    Ok(Submitted {
        record: patient,
        synced,
        listing,
    })
}

/// Book an appointment. An empty patient or doctor selection is rejected
/// with a warning before the store is touched.
///
/// Blocking; see `sync`.
pub fn add_appointment(
    core: &CoreState,
    input: &AppointmentInput,
) -> Result<Submitted<Appointment, AppointmentRow>, CoreError> {
    let appointment = {
        let mut store = core.write_store()?;
        let next_id = store
            .next_appointment_id()
            .ok_or(FormError::IdsExhausted("appt_id"));
        let appointment = match next_id.and_then(|id| build_appointment(input, id)) {
            Ok(a) => a,
            Err(e) => return Err(reject(core, e)),
        };
        store.appointments.push(appointment.clone());
        appointment
    };
    tracing::info!(appt_id = appointment.appt_id, "Appointment scheduled");

    let synced = sync::save_record(core, Collection::Appointments, &appointment)?;

    let listing = {
        let mut router = core.lock_router()?;
        let mut store = core.write_store()?;
        store.update_analytics();
        let filter = router.appointment_filter().clone();
        router.render_appointments(&store, filter, 1)
    };
    core.notify(NotificationKind::Success, MSG_APPOINTMENT_ADDED);

    Ok(Submitted {
        record: appointment,
        synced,
        listing,
    })
}

/// Select options for the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentFormOptions {
    pub patients: Vec<SelectOption>,
    pub doctors: Vec<SelectOption>,
}

/// Options for the booking form, or the reason it cannot open yet.
pub fn appointment_form_options(store: &DomainStore) -> Result<AppointmentFormOptions, FormError> {
    if store.patients.is_empty() {
        return Err(FormError::NoPatients);
    }
    if store.doctors.is_empty() {
        return Err(FormError::NoDoctors);
    }
    Ok(AppointmentFormOptions {
        patients: store
            .patients
            .iter()
            .map(|p| SelectOption {
                value: p.patient_id,
                label: p.full_name(),
            })
            .collect(),
        doctors: crate::views::appointments::doctor_filter_options(store),
    })
}

/// Open the booking form; warns when there is nobody to book.
pub fn open_appointment_form(core: &CoreState) -> Result<AppointmentFormOptions, CoreError> {
    let store = core.read_store()?;
    let options = appointment_form_options(&store);
    drop(store);
    options.map_err(|e| reject(core, e))
}

/// Doctors are read-only for now.
pub fn add_doctor(core: &CoreState) {
    core.notify(NotificationKind::Info, MSG_ADD_DOCTOR_STUB);
}
