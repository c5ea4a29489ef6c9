//! Analytics aggregator: derived dashboard statistics.
//!
//! Recomputed in full on every dashboard entry and after every mutation.
//! The department join is O(departments × appointments), which is fine at
//! dashboard scale.

use std::collections::{BTreeMap, HashMap};

use crate::models::{AgeDistribution, Analytics, Patient};
use crate::store::DomainStore;

/// Lower bound (inclusive) of the Adult bucket.
pub const ADULT_FROM_AGE: u32 = 18;
/// Lower bound (inclusive) of the Elderly bucket.
pub const ELDERLY_FROM_AGE: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBucket {
    Child,
    Adult,
    Elderly,
}

impl AgeBucket {
    pub fn for_age(age: u32) -> Self {
        if age < ADULT_FROM_AGE {
            Self::Child
        } else if age < ELDERLY_FROM_AGE {
            Self::Adult
        } else {
            Self::Elderly
        }
    }
}

/// Bucket every patient exactly once.
pub fn age_distribution(patients: &[Patient]) -> AgeDistribution {
    let mut dist = AgeDistribution::default();
    for patient in patients {
        match AgeBucket::for_age(patient.age) {
            AgeBucket::Child => dist.child += 1,
            AgeBucket::Adult => dist.adult += 1,
            AgeBucket::Elderly => dist.elderly += 1,
        }
    }
    dist
}

/// Appointments per department, joined through the appointment's doctor.
///
/// Departments with no matching appointment are left out of the map.
pub fn department_distribution(store: &DomainStore) -> BTreeMap<String, u32> {
    let doctor_department: HashMap<i64, &str> = store
        .doctors
        .iter()
        .map(|d| (d.doctor_id, d.department.as_str()))
        .collect();

    let mut distribution = BTreeMap::new();
    for department in &store.departments {
        let count = store
            .appointments
            .iter()
            .filter(|a| {
                doctor_department
                    .get(&a.doctor_id)
                    .is_some_and(|dept| *dept == department.name)
            })
            .count() as u32;
        if count > 0 {
            distribution.insert(department.name.clone(), count);
        }
    }
    distribution
}

/// Full recompute. Placeholder series keep their default values.
pub fn recompute(store: &DomainStore) -> Analytics {
    Analytics {
        patient_age_distribution: age_distribution(&store.patients),
        patient_department_distribution: department_distribution(store),
        weekly_appointments: store.analytics.weekly_appointments.clone(),
        monthly_revenue: store.analytics.monthly_revenue.clone(),
    }
}
