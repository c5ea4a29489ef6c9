use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Font Awesome icon class, e.g. `fa-heartbeat`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub icon: String,
    /// As recorded in the sheet; not recomputed from the doctor list.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_doctors: u32,
}
