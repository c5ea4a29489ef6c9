use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Serialize;

/// Application-level constants
pub const APP_NAME: &str = "Carepoint";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the spreadsheet web-app URL.
pub const SHEETS_URL_ENV: &str = "CAREPOINT_SHEETS_URL";
/// Environment variable enabling the remote store (`true`/`1`/`yes`).
pub const USE_SHEETS_ENV: &str = "CAREPOINT_USE_SHEETS";
/// Environment variable overriding the API bind address.
pub const BIND_ENV: &str = "CAREPOINT_BIND";
/// Environment variable pointing at a built front-end to serve.
pub const STATIC_DIR_ENV: &str = "CAREPOINT_STATIC_DIR";

/// Port used when `CAREPOINT_BIND` is unset; the host is always loopback.
pub const DEFAULT_PORT: u16 = 7878;

/// Tracing filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "carepoint=info,carepoint_lib=info,tower_http=warn"
}

/// Remote store settings. Swappable at runtime from the settings view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RemoteConfig {
    pub endpoint_url: String,
    pub use_remote: bool,
}

impl RemoteConfig {
    pub fn new(endpoint_url: &str, use_remote: bool) -> Self {
        Self {
            endpoint_url: endpoint_url.trim().to_string(),
            use_remote,
        }
    }

    /// Read `CAREPOINT_SHEETS_URL` / `CAREPOINT_USE_SHEETS`.
    pub fn from_env() -> Self {
        let url = std::env::var(SHEETS_URL_ENV).unwrap_or_default();
        let use_remote = std::env::var(USE_SHEETS_ENV)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Self::new(&url, use_remote)
    }

    /// Remote reads and writes happen only when enabled and a URL is set.
    pub fn is_configured(&self) -> bool {
        self.use_remote && !self.endpoint_url.is_empty()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Address the dashboard API listens on.
pub fn api_bind_addr() -> SocketAddr {
    std::env::var(BIND_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_bind_addr)
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
}

/// Optional directory with the browser front-end.
pub fn static_dir() -> Option<PathBuf> {
    std::env::var(STATIC_DIR_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
