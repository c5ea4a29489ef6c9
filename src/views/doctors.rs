//! Doctor cards.

use chrono::NaiveDate;
use serde::Serialize;

use crate::listing::EmptyState;
use crate::models::Doctor;
use crate::store::DomainStore;

pub const EMPTY: EmptyState = EmptyState {
    icon: "fa-user-md",
    title: "No Doctors Registered",
    message: "Add doctors to manage appointments and schedules",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorCard {
    pub doctor_id: i64,
    pub name: String,
    pub department: String,
    pub specialization: String,
    pub phone: String,
    pub appointments_today: usize,
    pub available: bool,
    pub availability_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DoctorCards {
    Empty { placeholder: EmptyState },
    Cards { cards: Vec<DoctorCard> },
}

pub fn availability_label(available: bool) -> &'static str {
    if available {
        "Available"
    } else {
        "Unavailable"
    }
}

fn card(store: &DomainStore, doctor: &Doctor, today: &str) -> DoctorCard {
    let appointments_today = store
        .appointments
        .iter()
        .filter(|a| a.doctor_id == doctor.doctor_id && a.date == today)
        .count();
    DoctorCard {
        doctor_id: doctor.doctor_id,
        name: doctor.name.clone(),
        department: doctor.department.clone(),
        specialization: doctor.specialization.clone(),
        phone: doctor.phone.clone(),
        appointments_today,
        available: doctor.available,
        availability_label: availability_label(doctor.available),
    }
}

pub fn render(store: &DomainStore, today: NaiveDate) -> DoctorCards {
    if store.doctors.is_empty() {
        return DoctorCards::Empty { placeholder: EMPTY };
    }
    let today = today.format("%Y-%m-%d").to_string();
    DoctorCards::Cards {
        cards: store.doctors.iter().map(|d| card(store, d, &today)).collect(),
    }
}
