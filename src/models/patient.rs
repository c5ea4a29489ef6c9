use serde::{Deserialize, Serialize};

use super::enums::Gender;
use super::lenient;

/// Status assigned to every patient registered through the intake form.
pub const NEW_PATIENT_STATUS: &str = "New Patient";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, deserialize_with = "lenient::int")]
    pub patient_id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub age: u32,
    #[serde(default, deserialize_with = "lenient::gender")]
    pub gender: Gender,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub blood_group: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
