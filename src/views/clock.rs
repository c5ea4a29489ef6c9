//! Header clock.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};

use crate::core_state::CoreState;

pub const CLOCK_FORMAT: &str = "%b %d, %Y %I:%M %p";
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// `Oct 18, 2026 09:05 AM`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

/// Refresh the shared clock text once a minute until the runtime stops.
/// Independent of remote loads; a poisoned lock only skips a tick.
pub fn spawn_clock_refresh(core: Arc<CoreState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = core.set_clock(format_clock(&Local::now())) {
                tracing::warn!(error = %e, "Clock refresh skipped");
            }
        }
    })
}
