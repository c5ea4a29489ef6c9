//! Storage status shown in the header and on the settings screen.

use serde::Serialize;

use crate::config::RemoteConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageStatus {
    pub connected: bool,
    /// Header text: "Google Sheets Connected" / "Local Storage Only".
    pub label: &'static str,
    /// Settings badge: "Connected" / "Not Configured".
    pub badge: &'static str,
    pub endpoint_url: String,
}

impl StorageStatus {
    pub fn from_config(config: &RemoteConfig) -> Self {
        let connected = config.is_configured();
        Self {
            connected,
            label: if connected {
                "Google Sheets Connected"
            } else {
                "Local Storage Only"
            },
            badge: if connected { "Connected" } else { "Not Configured" },
            endpoint_url: config.endpoint_url.clone(),
        }
    }
}
