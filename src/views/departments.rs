//! Department cards.
//!
//! The patient count on each card is display filler drawn from `rng`; it is
//! not derived from the domain model and is never persisted.

use rand::Rng;
use serde::Serialize;

use crate::listing::EmptyState;
use crate::store::DomainStore;

/// Placeholder patient counts fall in `[20, 70)`.
pub const PLACEHOLDER_PATIENTS: std::ops::Range<u32> = 20..70;

pub const EMPTY: EmptyState = EmptyState {
    icon: "fa-building",
    title: "No Departments",
    message: "Add departments to organize your hospital services",
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentCard {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub total_doctors: u32,
    pub patient_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DepartmentCards {
    Empty { placeholder: EmptyState },
    Cards { cards: Vec<DepartmentCard> },
}

pub fn render<R: Rng>(store: &DomainStore, rng: &mut R) -> DepartmentCards {
    if store.departments.is_empty() {
        return DepartmentCards::Empty { placeholder: EMPTY };
    }
    let cards = store
        .departments
        .iter()
        .map(|d| DepartmentCard {
            name: d.name.clone(),
            description: d.description.clone(),
            icon: d.icon.clone(),
            total_doctors: d.total_doctors,
            patient_count: rng.gen_range(PLACEHOLDER_PATIENTS),
        })
        .collect();
    DepartmentCards::Cards { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn cards_keep_recorded_doctor_totals() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(7);
        let DepartmentCards::Cards { cards } = render(&store, &mut rng) else {
            panic!("expected cards");
        };
        let totals: Vec<u32> = cards.iter().map(|c| c.total_doctors).collect();
        assert_eq!(totals, [4, 2, 3]);
    }

    #[test]
    fn placeholder_patient_counts_stay_in_range() {
        let store = sample_store();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let DepartmentCards::Cards { cards } = render(&store, &mut rng) else {
                panic!("expected cards");
            };
            assert!(cards
                .iter()
                .all(|c| PLACEHOLDER_PATIENTS.contains(&c.patient_count)));
        }
    }

    #[test]
    fn no_departments_shows_placeholder() {
        let mut rng = StdRng::seed_from_u64(1);
        let DepartmentCards::Empty { placeholder } = render(&DomainStore::new(), &mut rng) else {
            panic!("expected placeholder");
        };
        assert_eq!(placeholder.icon, "fa-building");
        assert_eq!(placeholder.title, "No Departments");
    }
}
