use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(default, deserialize_with = "lenient::int")]
    pub doctor_id: i64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    /// Informal reference to `Department::name`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub department: String,
    #[serde(rename = "specialist", default, deserialize_with = "lenient::text")]
    pub specialization: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub available: bool,
}

impl Doctor {
    /// Short name for the schedule grid: the second word of the name
    /// ("Dr. Mehta" → "Mehta"), or the whole name when it has one word.
    pub fn surname(&self) -> &str {
        self.name
            .split_whitespace()
            .nth(1)
            .unwrap_or(self.name.trim())
    }
}
