//! Shared types for the API layer.

use std::sync::Arc;

use serde::Deserialize;

use crate::api::error::ApiError;
use crate::core_state::{CoreError, CoreState};

// ═══════════════════════════════════════════════════════════
// API context
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }

    /// Run a core operation that may block on remote I/O on the blocking
    /// pool, so the runtime keeps serving other requests meanwhile.
    pub async fn blocking<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&CoreState) -> Result<T, CoreError> + Send + 'static,
        T: Send + 'static,
    {
        let core = Arc::clone(&self.core);
        let result = tokio::task::spawn_blocking(move || op(&core)).await?;
        result.map_err(ApiError::from)
    }
}

// ═══════════════════════════════════════════════════════════
// Query strings
// ═══════════════════════════════════════════════════════════

/// `?page=` on paginated tables. Missing or `0` means the first page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<usize>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(PageQuery::default().page(), 1);
        assert_eq!(PageQuery { page: Some(0) }.page(), 1);
        assert_eq!(PageQuery { page: Some(3) }.page(), 3);
    }

    #[tokio::test]
    async fn blocking_maps_core_errors() {
        let ctx = ApiContext::new(Arc::new(CoreState::default()));
        let ok = ctx.blocking(|core| core.current_view()).await.unwrap();
        assert_eq!(ok, crate::models::View::Dashboard);

        let err = ctx
            .blocking(|_| Err::<(), _>(CoreError::LockPoisoned))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
