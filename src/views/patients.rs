//! Patients table and patient detail panel.

use serde::Serialize;

use crate::listing::{contains_ci, search_term, EmptyState, Listing};
use crate::models::{Patient, PatientFilter};
use crate::store::DomainStore;

pub const EMPTY: EmptyState = EmptyState {
    icon: "fa-user-injured",
    title: "No Patients Yet",
    message: "Click \"+ Add Patient\" button above to register your first patient",
};

pub const NO_MATCHES: EmptyState = EmptyState {
    icon: "fa-search",
    title: "No Matching Patients",
    message: "Try a different search term or status filter",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRow {
    pub patient_id: i64,
    pub full_name: String,
    pub age: u32,
    pub gender: &'static str,
    pub phone: String,
    pub blood_group: String,
    pub status: String,
    pub status_class: String,
}

impl From<&Patient> for PatientRow {
    fn from(p: &Patient) -> Self {
        Self {
            patient_id: p.patient_id,
            full_name: p.full_name(),
            age: p.age,
            gender: p.gender.label(),
            phone: p.phone.clone(),
            blood_group: p.blood_group.clone(),
            status: p.status.clone(),
            status_class: status_class(&p.status),
        }
    }
}

/// CSS class for a status badge: `"New Patient"` → `status-new-patient`.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase().replace(' ', "-"))
}

/// Search matches first name, last name, or the identifier's digits.
pub fn matches(patient: &Patient, filter: &PatientFilter) -> bool {
    if let Some(term) = search_term(filter.search.as_deref()) {
        let hit = contains_ci(&patient.first_name, &term)
            || contains_ci(&patient.last_name, &term)
            || patient.patient_id.to_string().contains(&term);
        if !hit {
            return false;
        }
    }
    filter
        .status()
        .map_or(true, |status| patient.status == status)
}

/// Filter and paginate the patient collection in stored order.
pub fn render(store: &DomainStore, filter: &PatientFilter, page: usize) -> Listing<PatientRow> {
    Listing::build(
        &store.patients,
        |p| matches(p, filter),
        |p| PatientRow::from(p),
        page,
        EMPTY,
        NO_MATCHES,
    )
}

/// Everything shown in the patient detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientDetail {
    pub patient_id: i64,
    pub full_name: String,
    pub age_label: String,
    pub gender: &'static str,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
    pub status: String,
    pub status_class: String,
}

pub fn detail(store: &DomainStore, patient_id: i64) -> Option<PatientDetail> {
    store.find_patient(patient_id).map(|p| PatientDetail {
        patient_id: p.patient_id,
        full_name: p.full_name(),
        age_label: format!("{} years", p.age),
        gender: p.gender.label(),
        blood_group: p.blood_group.clone(),
        phone: p.phone.clone(),
        address: p.address.clone(),
        status: p.status.clone(),
        status_class: status_class(&p.status),
    })
}
