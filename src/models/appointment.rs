use serde::{Deserialize, Serialize};

use super::lenient;

/// Status assigned to every appointment booked through the form.
pub const PENDING_STATUS: &str = "Pending";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "lenient::int")]
    pub appt_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub patient_id: i64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub doctor_id: i64,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub treatment: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub notes: Option<String>,
}
