//! Dashboard summary: headline totals, recent appointments and chart data.

use chrono::NaiveDate;
use serde::Serialize;

use crate::listing::EmptyState;
use crate::models::{Analytics, MonthlyRevenue, WeeklyAppointments};
use crate::store::DomainStore;

use super::appointments::AppointmentRow;

/// Appointments listed under "Recent Appointments".
pub const RECENT_LIMIT: usize = 5;

pub const NO_RECENT: EmptyState = EmptyState {
    icon: "fa-calendar-times",
    title: "No Appointments Yet",
    message: "Schedule your first appointment to get started",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardTotals {
    pub patients: usize,
    pub appointments_today: usize,
    pub available_doctors: usize,
    pub departments: usize,
}

/// One labelled slice of a pie/doughnut chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub value: u32,
    /// `value / total * 100` with one decimal, e.g. `"33.3"`.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub age_distribution: Vec<ChartSlice>,
    pub department_distribution: Vec<ChartSlice>,
    pub weekly_appointments: Vec<WeeklyAppointments>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecentAppointments {
    Empty { placeholder: EmptyState },
    Rows { rows: Vec<AppointmentRow> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub totals: DashboardTotals,
    pub recent_appointments: RecentAppointments,
    pub charts: DashboardCharts,
    pub analytics: Analytics,
}

/// `"0.0"` when the series is empty.
pub fn percentage(value: u32, total: u32) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(value) / f64::from(total) * 100.0)
}

fn slices<'a>(entries: impl Iterator<Item = (&'a str, u32)> + Clone) -> Vec<ChartSlice> {
    let total: u32 = entries.clone().map(|(_, v)| v).sum();
    entries
        .map(|(label, value)| ChartSlice {
            label: label.to_string(),
            value,
            percentage: percentage(value, total),
        })
        .collect()
}

/// Build the dashboard from a store whose analytics are already current.
pub fn build(store: &DomainStore, today: NaiveDate) -> Dashboard {
    let today = today.format("%Y-%m-%d").to_string();
    let totals = DashboardTotals {
        patients: store.patients.len(),
        appointments_today: store
            .appointments
            .iter()
            .filter(|a| a.date == today)
            .count(),
        available_doctors: store.doctors.iter().filter(|d| d.available).count(),
        departments: store.departments.len(),
    };

    let recent_appointments = if store.appointments.is_empty() {
        RecentAppointments::Empty {
            placeholder: NO_RECENT,
        }
    } else {
        RecentAppointments::Rows {
            rows: store
                .appointments
                .iter()
                .take(RECENT_LIMIT)
                .map(|a| AppointmentRow::new(store, a))
                .collect(),
        }
    };

    let analytics = store.analytics.clone();
    let charts = DashboardCharts {
        age_distribution: slices(analytics.patient_age_distribution.entries().into_iter()),
        department_distribution: slices(
            analytics
                .patient_department_distribution
                .iter()
                .map(|(name, count)| (name.as_str(), *count)),
        ),
        weekly_appointments: analytics.weekly_appointments.clone(),
        monthly_revenue: analytics.monthly_revenue.clone(),
    };

    Dashboard {
        totals,
        recent_appointments,
        charts,
        analytics,
    }
}
