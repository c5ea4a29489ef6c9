//! API endpoint handlers.
//!
//! Each module corresponds to a dashboard screen or action. Handlers are
//! thin: they lock `CoreState`, call the renderer or handler, and wrap
//! the result in JSON.

pub mod appointments;
pub mod clock;
pub mod dashboard;
pub mod departments;
pub mod doctors;
pub mod health;
pub mod notifications;
pub mod patients;
pub mod schedule;
pub mod search;
pub mod settings;
pub mod sort;
pub mod sync;
pub mod views;
