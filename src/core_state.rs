//! Shared application state.
//!
//! `CoreState` is the explicit container every handler receives: the
//! domain store, the remote configuration and client, the view router,
//! notifications and the pending-write queue. It is wrapped in `Arc` at
//! startup and shared by the HTTP handlers, the clock task and the
//! blocking sync workers.

use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{Local, NaiveDate};

use crate::config::RemoteConfig;
use crate::forms::FormError;
use crate::models::{NotificationKind, View};
use crate::notify::{Notification, Notifications};
use crate::remote::{RemoteError, RemoteStore, SheetsClient};
use crate::store::DomainStore;
use crate::sync::PendingWrites;
use crate::views::{clock, ShownView, ViewRouter};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

/// Process-wide state.
///
/// Lock order when more than one is held: router, then store, then
/// config. Remote I/O never runs under the store lock.
pub struct CoreState {
    store: RwLock<DomainStore>,
    config: RwLock<RemoteConfig>,
    /// Active remote client; swapped by the settings connection test.
    remote: RwLock<Arc<dyn RemoteStore>>,
    router: Mutex<ViewRouter>,
    notifications: Mutex<Notifications>,
    pending: Mutex<PendingWrites>,
    /// Header clock text, refreshed by a background task.
    clock: RwLock<String>,
}

impl CoreState {
    /// State with a `SheetsClient` for the configured endpoint.
    pub fn new(config: RemoteConfig) -> Self {
        let remote: Arc<dyn RemoteStore> = Arc::new(SheetsClient::new(&config.endpoint_url));
        Self::with_remote(config, remote)
    }

    /// State with an injected remote store.
    pub fn with_remote(config: RemoteConfig, remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            store: RwLock::new(DomainStore::new()),
            config: RwLock::new(config),
            remote: RwLock::new(remote),
            router: Mutex::new(ViewRouter::new()),
            notifications: Mutex::new(Notifications::new()),
            pending: Mutex::new(PendingWrites::new()),
            clock: RwLock::new(clock::format_clock(&Local::now())),
        }
    }

    // ── Domain store ────────────────────────────────────────

    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, DomainStore>, CoreError> {
        self.store.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, DomainStore>, CoreError> {
        self.store.write().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Remote configuration ────────────────────────────────

    /// Owned copy of the current remote configuration.
    pub fn remote_config(&self) -> Result<RemoteConfig, CoreError> {
        self.config
            .read()
            .map(|c| c.clone())
            .map_err(|_| CoreError::LockPoisoned)
    }

    pub fn set_remote_config(&self, config: RemoteConfig) -> Result<(), CoreError> {
        let mut guard = self.config.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = config;
        Ok(())
    }

    pub fn remote(&self) -> Result<Arc<dyn RemoteStore>, CoreError> {
        self.remote
            .read()
            .map(|r| Arc::clone(&r))
            .map_err(|_| CoreError::LockPoisoned)
    }

    pub fn set_remote(&self, remote: Arc<dyn RemoteStore>) -> Result<(), CoreError> {
        let mut guard = self.remote.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = remote;
        Ok(())
    }

    // ── Views ───────────────────────────────────────────────

    pub fn lock_router(&self) -> Result<MutexGuard<'_, ViewRouter>, CoreError> {
        self.router.lock().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn current_view(&self) -> Result<View, CoreError> {
        Ok(self.lock_router()?.current())
    }

    /// Make `view` current and render it against today's date.
    pub fn show_view(&self, view: View) -> Result<ShownView, CoreError> {
        let mut router = self.lock_router()?;
        let mut store = self.write_store()?;
        let config = self.remote_config()?;
        let mut rng = rand::thread_rng();
        Ok(router.show(view, &mut store, &config, today(), &mut rng))
    }

    /// Re-render whatever view is current.
    pub fn refresh_current_view(&self) -> Result<ShownView, CoreError> {
        let view = self.current_view()?;
        self.show_view(view)
    }

    // ── Notifications ───────────────────────────────────────

    /// Raise a toast. A poisoned notification lock drops the toast.
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        match self.notifications.lock() {
            Ok(mut n) => n.push(Notification::new(kind, message)),
            Err(_) => tracing::error!("Notification lock poisoned; toast dropped"),
        }
    }

    pub fn latest_notification(&self) -> Result<Option<Notification>, CoreError> {
        self.notifications
            .lock()
            .map(|n| n.latest().cloned())
            .map_err(|_| CoreError::LockPoisoned)
    }

    pub fn notification_history(&self) -> Result<Vec<Notification>, CoreError> {
        self.notifications
            .lock()
            .map(|n| n.history())
            .map_err(|_| CoreError::LockPoisoned)
    }

    // ── Pending writes ──────────────────────────────────────

    pub fn lock_pending(&self) -> Result<MutexGuard<'_, PendingWrites>, CoreError> {
        self.pending.lock().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Clock ───────────────────────────────────────────────

    pub fn clock(&self) -> Result<String, CoreError> {
        self.clock
            .read()
            .map(|c| c.clone())
            .map_err(|_| CoreError::LockPoisoned)
    }

    pub fn set_clock(&self, text: String) -> Result<(), CoreError> {
        let mut guard = self.clock.write().map_err(|_| CoreError::LockPoisoned)?;
        *guard = text;
        Ok(())
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new(RemoteConfig::default())
    }
}

/// Local calendar date used for "today" counts.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Remote store error: {0}")]
    Remote(#[from] RemoteError),
    #[error("{0}")]
    Form(#[from] FormError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MockRemoteStore, RemoteSnapshot};
    use crate::store::test_support::sample_store;

    #[test]
    fn new_state_is_empty_on_dashboard() {
        let state = CoreState::default();
        assert!(state.read_store().unwrap().patients.is_empty());
        assert_eq!(state.current_view().unwrap(), View::Dashboard);
        assert!(!state.remote_config().unwrap().is_configured());
        assert!(state.latest_notification().unwrap().is_none());
        assert!(state.lock_pending().unwrap().is_empty());
    }

    #[test]
    fn show_view_switches_current() {
        let state = CoreState::default();
        *state.write_store().unwrap() = sample_store();

        let shown = state.show_view(View::Doctors).unwrap();
        assert_eq!(shown.view, View::Doctors);
        assert_eq!(state.current_view().unwrap(), View::Doctors);

        let again = state.refresh_current_view().unwrap();
        assert_eq!(again.view, View::Doctors);
    }

    #[test]
    fn notify_keeps_latest() {
        let state = CoreState::default();
        state.notify(NotificationKind::Info, "first");
        state.notify(NotificationKind::Error, "second");
        let latest = state.latest_notification().unwrap().unwrap();
        assert_eq!(latest.message, "second");
        assert_eq!(state.notification_history().unwrap().len(), 2);
    }

    #[test]
    fn remote_can_be_swapped() {
        let state = CoreState::default();
        let mock = Arc::new(MockRemoteStore::with_snapshot(RemoteSnapshot::default()));
        state.set_remote(mock.clone()).unwrap();
        state.remote().unwrap().load().unwrap();
        assert_eq!(mock.load_calls(), 1);
    }

    #[test]
    fn clock_starts_populated_and_is_settable() {
        let state = CoreState::default();
        assert!(!state.clock().unwrap().is_empty());
        state.set_clock("Oct 18, 2026 09:00 AM".into()).unwrap();
        assert_eq!(state.clock().unwrap(), "Oct 18, 2026 09:00 AM");
    }

    #[test]
    fn core_error_display() {
        assert_eq!(CoreError::LockPoisoned.to_string(), "Internal lock error");
        let remote: CoreError = RemoteError::NotConfigured.into();
        assert_eq!(remote.to_string(), "Remote store error: Remote store not configured");
    }
}
