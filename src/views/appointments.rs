//! Appointments table.

use serde::Serialize;

use crate::listing::{contains_ci, search_term, EmptyState, Listing};
use crate::models::{Appointment, AppointmentFilter};
use crate::store::DomainStore;

use super::patients::status_class;

pub const EMPTY: EmptyState = EmptyState {
    icon: "fa-calendar-plus",
    title: "No Appointments Scheduled",
    message: "Click \"+ New Appointment\" to schedule your first appointment",
};

pub const NO_MATCHES: EmptyState = EmptyState {
    icon: "fa-search",
    title: "No Matching Appointments",
    message: "Try a different search term or filter",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentRow {
    pub appt_id: i64,
    pub patient_name: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub treatment: String,
    pub status: String,
    pub status_class: String,
}

impl AppointmentRow {
    pub fn new(store: &DomainStore, appt: &Appointment) -> Self {
        Self {
            appt_id: appt.appt_id,
            patient_name: store.patient_name(appt.patient_id),
            doctor_name: store.doctor_name(appt.doctor_id),
            date: appt.date.clone(),
            time: appt.time.clone(),
            treatment: appt.treatment.clone(),
            status: appt.status.clone(),
            status_class: status_class(&appt.status),
        }
    }
}

/// Search covers the patient's names, the doctor's name and the treatment.
/// Dangling references simply never match on the missing side.
pub fn matches(store: &DomainStore, appt: &Appointment, filter: &AppointmentFilter) -> bool {
    if let Some(term) = search_term(filter.search.as_deref()) {
        let patient_hit = store.find_patient(appt.patient_id).is_some_and(|p| {
            contains_ci(&p.first_name, &term) || contains_ci(&p.last_name, &term)
        });
        let doctor_hit = store
            .find_doctor(appt.doctor_id)
            .is_some_and(|d| contains_ci(&d.name, &term));
        if !(patient_hit || doctor_hit || contains_ci(&appt.treatment, &term)) {
            return false;
        }
    }
    if let Some(status) = filter.status() {
        if appt.status != status {
            return false;
        }
    }
    filter
        .doctor_id
        .map_or(true, |doctor_id| appt.doctor_id == doctor_id)
}

pub fn render(
    store: &DomainStore,
    filter: &AppointmentFilter,
    page: usize,
) -> Listing<AppointmentRow> {
    Listing::build(
        &store.appointments,
        |a| matches(store, a, filter),
        |a| AppointmentRow::new(store, a),
        page,
        EMPTY,
        NO_MATCHES,
    )
}

/// `<option>` entry for the doctor filter and the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

pub fn doctor_filter_options(store: &DomainStore) -> Vec<SelectOption> {
    store
        .doctors
        .iter()
        .map(|d| SelectOption {
            value: d.doctor_id,
            label: d.name.clone(),
        })
        .collect()
}
