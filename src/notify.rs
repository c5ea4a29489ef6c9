//! Transient user notifications ("toasts").
//!
//! Only one toast is visible at a time: a new one replaces the current.
//! A bounded history is kept for the settings screen and for tests.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::NotificationKind;

/// How long a toast stays on screen.
pub const TOAST_DURATION_SECS: i64 = 3;

/// Maximum notifications kept in history.
const HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
    /// Font Awesome icon class for the toast.
    pub icon: &'static str,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            icon: icon_for(kind),
            created_at,
            expires_at: created_at + Duration::seconds(TOAST_DURATION_SECS),
        }
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

pub fn icon_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "fa-check-circle",
        NotificationKind::Error => "fa-exclamation-circle",
        NotificationKind::Warning => "fa-exclamation-triangle",
        NotificationKind::Info => "fa-info-circle",
    }
}

/// Latest toast plus a bounded history, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    history: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a notification; it becomes the visible toast.
    pub fn push(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Error => tracing::warn!(message = %notification.message, "Notify"),
            _ => tracing::debug!(kind = %notification.kind, message = %notification.message, "Notify"),
        }
        if self.history.len() == HISTORY_CAPACITY {
            self.history.pop_front();
        }
        self.history.push_back(notification);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.history.back()
    }

    /// The latest toast if it has not expired yet.
    pub fn visible_at(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.latest().filter(|n| n.is_visible_at(now))
    }

    pub fn history(&self) -> Vec<Notification> {
        self.history.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
