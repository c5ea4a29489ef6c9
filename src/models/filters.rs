use serde::Deserialize;

/// Value of a status `<select>` that disables the filter.
pub const ALL: &str = "all";

/// Treat `None`, `""` and `"all"` as "no filter".
fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != ALL)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PatientFilter {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl PatientFilter {
    pub fn status(&self) -> Option<&str> {
        active(&self.status)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppointmentFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub doctor_id: Option<i64>,
}

impl AppointmentFilter {
    pub fn status(&self) -> Option<&str> {
        active(&self.status)
    }
}
