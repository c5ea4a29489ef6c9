//! Scripted remote store for tests and offline runs.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{RemoteError, RemoteSnapshot, RemoteStore, WriteRequest};

/// In-process `RemoteStore` with a fixed load result and recorded writes.
pub struct MockRemoteStore {
    load_result: Mutex<Result<RemoteSnapshot, RemoteError>>,
    fail_saves: AtomicBool,
    saves: Mutex<Vec<WriteRequest>>,
    load_calls: AtomicUsize,
}

impl MockRemoteStore {
    /// Loads succeed with `snapshot`; saves succeed.
    pub fn with_snapshot(snapshot: RemoteSnapshot) -> Self {
        Self {
            load_result: Mutex::new(Ok(snapshot)),
            fail_saves: AtomicBool::new(false),
            saves: Mutex::new(Vec::new()),
            load_calls: AtomicUsize::new(0),
        }
    }

    /// Loads and saves both fail with a connection error.
    pub fn unreachable() -> Self {
        let mock = Self::with_snapshot(RemoteSnapshot::default());
        mock.set_load_result(Err(RemoteError::Connection("mock://remote".into())));
        mock.set_fail_saves(true);
        mock
    }

    pub fn set_load_result(&self, result: Result<RemoteSnapshot, RemoteError>) {
        if let Ok(mut guard) = self.load_result.lock() {
            *guard = result;
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Writes received so far, including failed ones.
    pub fn saves(&self) -> Vec<WriteRequest> {
        self.saves.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

impl RemoteStore for MockRemoteStore {
    fn load(&self) -> Result<RemoteSnapshot, RemoteError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        self.load_result
            .lock()
            .map_err(|_| RemoteError::HttpClient("mock lock poisoned".into()))?
            .clone()
    }

    fn save(&self, request: &WriteRequest) -> Result<bool, RemoteError> {
        if let Ok(mut saves) = self.saves.lock() {
            saves.push(request.clone());
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RemoteError::Connection("mock://remote".into()));
        }
        Ok(true)
    }
}
