//! Weekly schedule grid.
//!
//! Cells are filled at random from the doctor list; nothing here is a real
//! booking. Week navigation is accepted but does not change the grid.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Doctor;

pub const DAYS: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
pub const SLOTS: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];

/// Chance that a cell shows a doctor.
pub const OCCUPANCY: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCell {
    pub day: &'static str,
    /// Doctor surname, `None` for a free slot.
    pub doctor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub time: &'static str,
    pub cells: Vec<ScheduleCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub days: [&'static str; 6],
    pub rows: Vec<ScheduleRow>,
}

pub fn build<R: Rng>(doctors: &[Doctor], rng: &mut R) -> Schedule {
    let rows = SLOTS
        .iter()
        .map(|&time| ScheduleRow {
            time,
            cells: DAYS
                .iter()
                .map(|&day| ScheduleCell {
                    day,
                    doctor: pick(doctors, rng),
                })
                .collect(),
        })
        .collect();
    Schedule { days: DAYS, rows }
}

fn pick<R: Rng>(doctors: &[Doctor], rng: &mut R) -> Option<String> {
    if !rng.gen_bool(OCCUPANCY) {
        return None;
    }
    doctors.choose(rng).map(|d| d.surname().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekDirection {
    Previous,
    Next,
}

impl WeekDirection {
    /// `-1` / `1`, as sent by the week arrows. Anything negative means back.
    pub fn from_offset(offset: i32) -> Self {
        if offset < 0 {
            Self::Previous
        } else {
            Self::Next
        }
    }
}

pub fn change_week(direction: WeekDirection) {
    tracing::info!(?direction, "Week navigation requested; schedule is static");
}
