use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Patient counts per age bucket: Child `[0, 18)`, Adult `[18, 60)`,
/// Elderly `[60, ∞)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDistribution {
    #[serde(rename = "Child")]
    pub child: u32,
    #[serde(rename = "Adult")]
    pub adult: u32,
    #[serde(rename = "Elderly")]
    pub elderly: u32,
}

impl AgeDistribution {
    pub fn total(&self) -> u32 {
        self.child + self.adult + self.elderly
    }

    /// `(label, count)` pairs in chart order.
    pub fn entries(&self) -> [(&'static str, u32); 3] {
        [
            ("Child", self.child),
            ("Adult", self.adult),
            ("Elderly", self.elderly),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAppointments {
    pub day: String,
    pub appointments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub income: f64,
    pub expense: f64,
}

/// Derived dashboard statistics. Never persisted remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub patient_age_distribution: AgeDistribution,
    /// Appointments per department name; departments with no
    /// appointments are absent.
    pub patient_department_distribution: BTreeMap<String, u32>,
    /// Static placeholder series, Mon–Sat.
    pub weekly_appointments: Vec<WeeklyAppointments>,
    /// Static placeholder series.
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

const WEEKDAYS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Default for Analytics {
    fn default() -> Self {
        Self {
            patient_age_distribution: AgeDistribution::default(),
            patient_department_distribution: BTreeMap::new(),
            weekly_appointments: WEEKDAYS
                .iter()
                .map(|day| WeeklyAppointments {
                    day: (*day).to_string(),
                    appointments: 0,
                })
                .collect(),
            monthly_revenue: Vec::new(),
        }
    }
}
