//! Load/save orchestration against the configured remote store, plus the
//! pending-write queue for saves the remote did not accept.
//!
//! Everything here performs blocking I/O through `RemoteStore`; async
//! callers run it on `tokio::task::spawn_blocking`. Locks are never held
//! across a remote call.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::RemoteConfig;
use crate::core_state::{CoreError, CoreState};
use crate::models::{Collection, NotificationKind};
use crate::forms::FormError;
use crate::remote::{RemoteStore, SheetsClient, WriteRequest};
use crate::store::StoreCounts;

pub const MSG_SYNCING: &str = "Syncing data from Google Sheets...";
pub const MSG_SYNCED: &str = "Data synced successfully!";
pub const MSG_LOAD_FAILED: &str = "Failed to sync data from Google Sheets";
pub const MSG_SAVE_FAILED: &str = "Failed to sync with Google Sheets";
pub const MSG_NOT_CONFIGURED: &str = "Google Sheets not configured";
pub const MSG_ENTER_URL: &str = "Please enter Google Apps Script URL";
pub const MSG_TESTING: &str = "Testing connection...";
pub const MSG_CONNECTED: &str = "Connection successful!";
pub const MSG_CONNECTION_FAILED: &str = "Connection failed. Check URL and try again.";

/// Recorded when the remote answered a write without a success flag.
const REJECTED: &str = "Remote store rejected the write";

/// Most writes kept waiting for the remote; the oldest go first.
pub const PENDING_CAPACITY: usize = 200;

// ─── Pending writes ───────────────────────────────────────────────────────────

/// A save that has not reached the remote store yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingWrite {
    pub id: Uuid,
    pub collection: Collection,
    pub request: WriteRequest,
    pub attempts: u32,
    pub last_error: String,
    pub queued_at: DateTime<Utc>,
    pub last_attempt_at: DateTime<Utc>,
}

/// Unresolved writes, oldest first, bounded by `PENDING_CAPACITY`.
#[derive(Debug, Default)]
pub struct PendingWrites {
    entries: Vec<PendingWrite>,
    /// Writes evicted to stay within capacity.
    dropped: usize,
}

impl PendingWrites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a write after its first failed attempt.
    pub fn push(&mut self, collection: Collection, request: WriteRequest, error: String) -> Uuid {
        let now = Utc::now();
        let id = Uuid::new_v4();
        self.entries.push(PendingWrite {
            id,
            collection,
            request,
            attempts: 1,
            last_error: error,
            queued_at: now,
            last_attempt_at: now,
        });
        self.enforce_capacity();
        id
    }

    pub fn entries(&self) -> &[PendingWrite] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    fn enforce_capacity(&mut self) {
        let excess = self.entries.len().saturating_sub(PENDING_CAPACITY);
        if excess == 0 {
            return;
        }
        for lost in self.entries.drain(..excess) {
            tracing::warn!(
                id = %lost.id,
                collection = %lost.collection,
                attempts = lost.attempts,
                "Pending write queue full; oldest write dropped"
            );
        }
        self.dropped += excess;
    }

    /// Remove and return every entry, for a retry pass.
    fn take_all(&mut self) -> Vec<PendingWrite> {
        std::mem::take(&mut self.entries)
    }

    /// Put back entries that failed again, ahead of anything queued
    /// while the retry pass was running.
    fn requeue(&mut self, mut failed: Vec<PendingWrite>) {
        failed.append(&mut self.entries);
        self.entries = failed;
        self.enforce_capacity();
    }
}

// ─── Load ─────────────────────────────────────────────────────────────────────

/// Result of a load attempt. Remote failures are reported through
/// notifications, not as errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Remote not configured; local data untouched.
    Skipped,
    Loaded { counts: StoreCounts },
    Failed { error: String },
}

/// Pull every collection from the remote store into the domain store.
///
/// On success the present collections are replaced, analytics are
/// recomputed and the current view is re-rendered. On failure the store
/// is left exactly as it was.
pub fn load_from_remote(core: &CoreState) -> Result<LoadOutcome, CoreError> {
    if !core.remote_config()?.is_configured() {
        tracing::info!("Remote store not configured; using local data");
        return Ok(LoadOutcome::Skipped);
    }

    core.notify(NotificationKind::Info, MSG_SYNCING);
    let remote = core.remote()?;

    match remote.load() {
        Ok(snapshot) => {
            let counts = {
                let mut store = core.write_store()?;
                let counts = store.apply_snapshot(snapshot);
                store.update_analytics();
                counts
            };
            tracing::info!(
                patients = counts.patients,
                doctors = counts.doctors,
                appointments = counts.appointments,
                departments = counts.departments,
                "Remote load complete"
            );
            core.notify(NotificationKind::Success, MSG_SYNCED);
            core.refresh_current_view()?;
            Ok(LoadOutcome::Loaded { counts })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Remote load failed; keeping local data");
            core.notify(NotificationKind::Error, MSG_LOAD_FAILED);
            Ok(LoadOutcome::Failed {
                error: e.to_string(),
            })
        }
    }
}

/// User-triggered re-sync. Warns instead of silently skipping when the
/// remote is not configured.
pub fn resync(core: &CoreState) -> Result<LoadOutcome, CoreError> {
    if !core.remote_config()?.is_configured() {
        core.notify(NotificationKind::Warning, MSG_NOT_CONFIGURED);
        return Ok(LoadOutcome::Skipped);
    }
    load_from_remote(core)
}

// ─── Save ─────────────────────────────────────────────────────────────────────

/// Push one new record to the remote store.
///
/// Returns `true` when the remote accepted it or no remote is configured.
/// A failed write stays applied locally; it is reported and queued.
pub fn save_record<T: Serialize>(
    core: &CoreState,
    collection: Collection,
    record: &T,
) -> Result<bool, CoreError> {
    if !core.remote_config()?.is_configured() {
        tracing::debug!(%collection, "Remote store not configured; save kept local");
        return Ok(true);
    }

    let request = WriteRequest::add(collection, serde_json::to_value(record)?);
    let remote = core.remote()?;
    match attempt(remote.as_ref(), &request) {
        Ok(()) => {
            tracing::info!(%collection, "Record saved to remote store");
            Ok(true)
        }
        Err(error) => {
            tracing::warn!(%collection, %error, "Remote save failed; queued for retry");
            core.notify(NotificationKind::Error, MSG_SAVE_FAILED);
            core.lock_pending()?.push(collection, request, error);
            Ok(false)
        }
    }
}

fn attempt(remote: &dyn RemoteStore, request: &WriteRequest) -> Result<(), String> {
    match remote.save(request) {
        Ok(true) => Ok(()),
        Ok(false) => Err(REJECTED.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Outcome of one pass over the pending queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetryReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub remaining: usize,
}

/// Re-send every queued write once. Successes leave the queue; failures
/// stay with their attempt count bumped.
pub fn retry_pending(core: &CoreState) -> Result<RetryReport, CoreError> {
    if !core.remote_config()?.is_configured() {
        let remaining = core.lock_pending()?.len();
        core.notify(NotificationKind::Warning, MSG_NOT_CONFIGURED);
        return Ok(RetryReport {
            attempted: 0,
            succeeded: 0,
            remaining,
        });
    }

    let batch = core.lock_pending()?.take_all();
    let attempted = batch.len();
    let remote = core.remote()?;

    let mut failed = Vec::new();
    for mut entry in batch {
        entry.attempts += 1;
        entry.last_attempt_at = Utc::now();
        match attempt(remote.as_ref(), &entry.request) {
            Ok(()) => tracing::info!(id = %entry.id, collection = %entry.collection, "Pending write delivered"),
            Err(error) => {
                tracing::warn!(id = %entry.id, attempts = entry.attempts, %error, "Pending write failed again");
                entry.last_error = error;
                failed.push(entry);
            }
        }
    }

    let succeeded = attempted - failed.len();
    let remaining = {
        let mut pending = core.lock_pending()?;
        pending.requeue(failed);
        pending.len()
    };

    if attempted > 0 {
        if remaining == 0 {
            core.notify(NotificationKind::Success, MSG_SYNCED);
        } else {
            core.notify(NotificationKind::Error, MSG_SAVE_FAILED);
        }
    }

    Ok(RetryReport {
        attempted,
        succeeded,
        remaining,
    })
}

// ─── Connection settings ──────────────────────────────────────────────────────

/// Whether the settings connection test succeeded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionTest {
    pub connected: bool,
    pub outcome: LoadOutcome,
}

/// Point the app at `url` with a `SheetsClient` and test it with a load.
pub fn configure_remote(core: &CoreState, url: &str) -> Result<ConnectionTest, CoreError> {
    let remote: Arc<dyn RemoteStore> = Arc::new(SheetsClient::new(url));
    configure_remote_with(core, url, remote)
}

/// Swap in `remote` for `url`, enable it and run a load. A failed load
/// disables the remote again.
pub fn configure_remote_with(
    core: &CoreState,
    url: &str,
    remote: Arc<dyn RemoteStore>,
) -> Result<ConnectionTest, CoreError> {
    let url = url.trim();
    if url.is_empty() {
        core.notify(NotificationKind::Warning, MSG_ENTER_URL);
        return Err(FormError::MissingField("url").into());
    }

    core.notify(NotificationKind::Info, MSG_TESTING);
    core.set_remote(remote)?;
    core.set_remote_config(RemoteConfig::new(url, true))?;
    tracing::info!(url, "Testing remote store connection");

    let outcome = load_from_remote(core)?;
    let connected = matches!(outcome, LoadOutcome::Loaded { .. });
    if connected {
        core.notify(NotificationKind::Success, MSG_CONNECTED);
    } else {
        core.set_remote_config(RemoteConfig::new(url, false))?;
        core.notify(NotificationKind::Error, MSG_CONNECTION_FAILED);
    }

    Ok(ConnectionTest { connected, outcome })
}
