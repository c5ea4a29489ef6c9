//! Header search box.

use crate::listing::{contains_ci, search_term};
use crate::models::Patient;
use crate::store::DomainStore;

/// First patient whose first or last name contains `term`.
pub fn find_patient<'a>(store: &'a DomainStore, term: &str) -> Option<&'a Patient> {
    let term = search_term(Some(term.trim()))?;
    store
        .patients
        .iter()
        .find(|p| contains_ci(&p.first_name, &term) || contains_ci(&p.last_name, &term))
}
