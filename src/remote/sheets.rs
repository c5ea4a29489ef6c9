//! HTTP client for the spreadsheet web app.
//!
//! Uses `reqwest::blocking`; callers on the async runtime go through
//! `tokio::task::spawn_blocking`. The client is built per call so no
//! blocking runtime outlives the request.

use serde::Deserialize;
use serde_json::Value;

use super::{RemoteError, RemoteSnapshot, RemoteStore, WriteRequest};

/// Remote store backed by a spreadsheet web-app endpoint.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    endpoint_url: String,
}

/// Response body of a write.
///
/// Either `{ "success": true }` or `{ "status": "success" }`.
#[derive(Debug, Default, Deserialize)]
struct WriteResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    status: Option<String>,
}

impl WriteResponse {
    fn succeeded(&self) -> bool {
        self.success.unwrap_or(false) || self.status.as_deref() == Some("success")
    }
}

impl SheetsClient {
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            endpoint_url: endpoint_url.trim().to_string(),
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    fn http(&self) -> Result<reqwest::blocking::Client, RemoteError> {
        if self.endpoint_url.is_empty() {
            return Err(RemoteError::NotConfigured);
        }
        reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| RemoteError::HttpClient(e.to_string()))
    }

    fn map_send_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_connect() {
            RemoteError::Connection(self.endpoint_url.clone())
        } else {
            RemoteError::HttpClient(e.to_string())
        }
    }

    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

impl RemoteStore for SheetsClient {
    fn load(&self) -> Result<RemoteSnapshot, RemoteError> {
        let client = self.http()?;

        let response = client
            .get(&self.endpoint_url)
            .query(&[("action", "load")])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let body: Value = Self::check_status(response)?
            .json()
            .map_err(|e| RemoteError::ResponseParsing(e.to_string()))?;

        RemoteSnapshot::from_json(body)
    }

    fn save(&self, request: &WriteRequest) -> Result<bool, RemoteError> {
        let client = self.http()?;

        let response = client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let parsed: WriteResponse = Self::check_status(response)?
            .json()
            .map_err(|e| RemoteError::ResponseParsing(e.to_string()))?;

        Ok(parsed.succeeded())
    }
}
