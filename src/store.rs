//! In-memory domain store: the four entity collections plus derived analytics.
//!
//! The store is owned by `CoreState` for the lifetime of the process. A
//! successful remote load replaces whole collections; form submissions
//! append between loads.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics;
use crate::listing::{self, SortKey, SortState, Sortable};
use crate::models::{Analytics, Appointment, Collection, Department, Doctor, Patient};
use crate::remote::RemoteSnapshot;

/// Shown wherever a foreign key has no matching record.
pub const MISSING_REFERENCE: &str = "N/A";

#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainStore {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<Appointment>,
    pub departments: Vec<Department>,
    pub analytics: Analytics,
    #[serde(skip)]
    sort: HashMap<Collection, SortState>,
}

/// Record counts after a snapshot was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub patients: usize,
    pub doctors: usize,
    pub appointments: usize,
    pub departments: usize,
}

impl DomainStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite every collection present in `snapshot`; absent ones are kept.
    pub fn apply_snapshot(&mut self, snapshot: RemoteSnapshot) -> StoreCounts {
        if let Some(patients) = snapshot.patients {
            self.patients = patients;
            self.sort.remove(&Collection::Patients);
        }
        if let Some(doctors) = snapshot.doctors {
            self.doctors = doctors;
            self.sort.remove(&Collection::Doctors);
        }
        if let Some(appointments) = snapshot.appointments {
            self.appointments = appointments;
            self.sort.remove(&Collection::Appointments);
        }
        if let Some(departments) = snapshot.departments {
            self.departments = departments;
            self.sort.remove(&Collection::Departments);
        }
        self.counts()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            patients: self.patients.len(),
            doctors: self.doctors.len(),
            appointments: self.appointments.len(),
            departments: self.departments.len(),
        }
    }

    /// Recompute derived statistics from the current collections.
    pub fn update_analytics(&mut self) {
        self.analytics = analytics::recompute(self);
    }

    // ── Identifier assignment ───────────────────────────────

    /// `max(patient_id) + 1`, or `1` for an empty collection. `None` once
    /// the largest id is `i64::MAX`.
    pub fn next_patient_id(&self) -> Option<i64> {
        next_id(self.patients.iter().map(|p| p.patient_id))
    }

    /// `max(appt_id) + 1`, or `1` for an empty collection.
    pub fn next_appointment_id(&self) -> Option<i64> {
        next_id(self.appointments.iter().map(|a| a.appt_id))
    }

    // ── Reference lookups ───────────────────────────────────

    pub fn find_patient(&self, patient_id: i64) -> Option<&Patient> {
        self.patients.iter().find(|p| p.patient_id == patient_id)
    }

    pub fn find_doctor(&self, doctor_id: i64) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.doctor_id == doctor_id)
    }

    /// Patient full name, or `"N/A"` for a dangling reference.
    pub fn patient_name(&self, patient_id: i64) -> String {
        self.find_patient(patient_id)
            .map(Patient::full_name)
            .unwrap_or_else(|| MISSING_REFERENCE.to_string())
    }

    /// Doctor name, or `"N/A"` for a dangling reference.
    pub fn doctor_name(&self, doctor_id: i64) -> String {
        self.find_doctor(doctor_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| MISSING_REFERENCE.to_string())
    }

    // ── Table sorting ───────────────────────────────────────

    pub fn sort_state(&self, collection: Collection) -> Option<&SortState> {
        self.sort.get(&collection)
    }

    /// Sort `collection` by `column`, toggling asc/desc on repeated calls
    /// with the same column. Returns the new sort state.
    pub fn sort_table(&mut self, collection: Collection, column: &str) -> SortState {
        let order = SortState::next_order(self.sort.get(&collection), column);
        match collection {
            Collection::Patients => listing::sort_by_column(&mut self.patients, column, order),
            Collection::Doctors => listing::sort_by_column(&mut self.doctors, column, order),
            Collection::Appointments => {
                listing::sort_by_column(&mut self.appointments, column, order)
            }
            Collection::Departments => {
                listing::sort_by_column(&mut self.departments, column, order)
            }
        }
        let state = SortState {
            column: column.to_string(),
            order,
        };
        self.sort.insert(collection, state.clone());
        tracing::debug!(%collection, column, %order, "Collection sorted");
        state
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> Option<i64> {
    ids.max().map_or(Some(1), |max| max.checked_add(1))
}

// ─── Sortable columns ─────────────────────────────────────────────────────────

impl Sortable for Patient {
    fn sort_key(&self, column: &str) -> Option<SortKey> {
        Some(match column {
            "patient_id" => SortKey::Int(self.patient_id),
            "age" => SortKey::Int(i64::from(self.age)),
            "first_name" => SortKey::Text(self.first_name.clone()),
            "last_name" => SortKey::Text(self.last_name.clone()),
            "gender" => SortKey::Text(self.gender.as_str().to_string()),
            "phone" => SortKey::Text(self.phone.clone()),
            "address" => SortKey::Text(self.address.clone()),
            "blood_group" => SortKey::Text(self.blood_group.clone()),
            "status" => SortKey::Text(self.status.clone()),
            _ => return None,
        })
    }
}

impl Sortable for Doctor {
    fn sort_key(&self, column: &str) -> Option<SortKey> {
        Some(match column {
            "doctor_id" => SortKey::Int(self.doctor_id),
            "name" => SortKey::Text(self.name.clone()),
            "department" => SortKey::Text(self.department.clone()),
            "specialist" | "specialization" => SortKey::Text(self.specialization.clone()),
            "phone" => SortKey::Text(self.phone.clone()),
            "available" => SortKey::Bool(self.available),
            _ => return None,
        })
    }
}

impl Sortable for Appointment {
    fn sort_key(&self, column: &str) -> Option<SortKey> {
        Some(match column {
            "appt_id" => SortKey::Int(self.appt_id),
            "patient_id" => SortKey::Int(self.patient_id),
            "doctor_id" => SortKey::Int(self.doctor_id),
            "date" => SortKey::Text(self.date.clone()),
            "time" => SortKey::Text(self.time.clone()),
            "treatment" => SortKey::Text(self.treatment.clone()),
            "status" => SortKey::Text(self.status.clone()),
            _ => return None,
        })
    }
}

impl Sortable for Department {
    fn sort_key(&self, column: &str) -> Option<SortKey> {
        Some(match column {
            "name" => SortKey::Text(self.name.clone()),
            "description" => SortKey::Text(self.description.clone()),
            "total_doctors" => SortKey::Int(i64::from(self.total_doctors)),
            _ => return None,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::models::SortOrder;

    #[test]
    fn next_id_starts_at_one() {
        let store = DomainStore::new();
        assert_eq!(store.next_patient_id(), Some(1));
        assert_eq!(store.next_appointment_id(), Some(1));
    }

    #[test]
    fn next_id_is_max_plus_one_not_len_plus_one() {
        let mut store = DomainStore::new();
        store.patients = vec![patient(4, "A", "B", 30), patient(17, "C", "D", 40)];
        assert_eq!(store.next_patient_id(), Some(18));

        store.appointments = vec![appointment(9, 4, 1, "2026-01-01")];
        assert_eq!(store.next_appointment_id(), Some(10));
    }

    #[test]
    fn next_id_is_none_at_the_top_of_the_range() {
        let mut store = DomainStore::new();
        store.patients = vec![patient(i64::MAX, "Max", "Id", 30)];
        assert_eq!(store.next_patient_id(), None);

        store.appointments = vec![appointment(i64::MAX, 1, 1, "2026-01-01")];
        assert_eq!(store.next_appointment_id(), None);
    }

    #[test]
    fn snapshot_overwrites_only_present_collections() {
        let mut store = sample_store();
        let counts = store.apply_snapshot(RemoteSnapshot {
            patients: Some(vec![patient(42, "New", "Person", 33)]),
            doctors: None,
            appointments: Some(Vec::new()),
            departments: None,
        });

        assert_eq!(store.patients.len(), 1);
        assert_eq!(store.patients[0].patient_id, 42);
        assert_eq!(store.doctors.len(), 2);
        assert!(store.appointments.is_empty());
        assert_eq!(store.departments.len(), 3);
        assert_eq!(
            counts,
            StoreCounts {
                patients: 1,
                doctors: 2,
                appointments: 0,
                departments: 3,
            }
        );
    }

    #[test]
    fn dangling_references_display_placeholder() {
        let store = sample_store();
        assert_eq!(store.patient_name(2), "Grace Hopper");
        assert_eq!(store.patient_name(99), "N/A");
        assert_eq!(store.doctor_name(1), "Dr. Mehta");
        assert_eq!(store.doctor_name(-1), "N/A");
    }

    #[test]
    fn sort_table_toggles_order() {
        let mut store = sample_store();

        let state = store.sort_table(Collection::Patients, "age");
        assert_eq!(state.order, SortOrder::Asc);
        let ages: Vec<u32> = store.patients.iter().map(|p| p.age).collect();
        assert_eq!(ages, [10, 45, 70]);

        let state = store.sort_table(Collection::Patients, "age");
        assert_eq!(state.order, SortOrder::Desc);
        let ages: Vec<u32> = store.patients.iter().map(|p| p.age).collect();
        assert_eq!(ages, [70, 45, 10]);

        assert_eq!(
            store.sort_state(Collection::Patients).map(|s| s.order),
            Some(SortOrder::Desc)
        );
    }

    #[test]
    fn sort_table_by_text_column() {
        let mut store = sample_store();
        store.sort_table(Collection::Patients, "last_name");
        let names: Vec<&str> = store.patients.iter().map(|p| p.last_name.as_str()).collect();
        assert_eq!(names, ["Hopper", "Lovelace", "Turing"]);
    }

    #[test]
    fn snapshot_resets_sort_state() {
        let mut store = sample_store();
        store.sort_table(Collection::Doctors, "name");
        store.apply_snapshot(RemoteSnapshot {
            doctors: Some(Vec::new()),
            ..RemoteSnapshot::default()
        });
        assert!(store.sort_state(Collection::Doctors).is_none());
    }
}
