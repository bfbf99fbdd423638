//! HTTP client for the manager's control API.
//!
//! One request per invocation, hard 5-second timeout, no retries. Transport
//! and protocol failures map to [`ClientError`] so the caller can print a
//! diagnostic and exit without touching stdout.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;

pub const DEFAULT_BASE: &str = "http://127.0.0.1:6110";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure of a single control round trip.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Manager answered, but with a non-success status.
    #[error("HTTP {status} from manager: {body}")]
    Protocol { status: u16, body: String },

    /// Manager answered 2xx with a body that is not valid JSON.
    #[error("Invalid JSON from manager: {source}")]
    Decode { source: serde_json::Error },

    /// No response at all: refused, unreachable, or timed out.
    #[error(
        "Manager not reachable at {base_url}.\n\
         Start it first (e.g. `octopus-manager`) or open Tray -> Start.\n\
         Underlying error: {source}"
    )]
    Connection {
        base_url: String,
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ManagerClient {
    client: reqwest::Client,
    base_url: String,
}

impl ManagerClient {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, base_url }
    }

    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single round trip: `path` must already carry any (encoded) query string.
    async fn request(&self, method: Method, path: &str) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending control request");

        let response = self
            .client
            .request(method, &url)
            .send()
            .await
            .map_err(|e| ClientError::Connection {
                base_url: self.base_url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            // Best-effort body; the reason phrase stands in when there is none.
            let body = match response.text().await {
                Ok(b) if !b.is_empty() => b,
                _ => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(ClientError::Protocol {
                status: status.as_u16(),
                body,
            });
        }

        let raw = response.text().await.map_err(|e| ClientError::Connection {
            base_url: self.base_url.clone(),
            source: e,
        })?;

        if raw.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }
        serde_json::from_str(&raw).map_err(|e| ClientError::Decode { source: e })
    }

    /// GET /control/status
    pub async fn status(&self) -> Result<Value, ClientError> {
        self.request(Method::GET, "/control/status").await
    }

    /// POST /control/start
    pub async fn start(&self) -> Result<Value, ClientError> {
        self.request(Method::POST, "/control/start").await
    }

    /// POST /control/stop
    pub async fn stop(&self) -> Result<Value, ClientError> {
        self.request(Method::POST, "/control/stop").await
    }

    /// POST /control/restart
    pub async fn restart(&self) -> Result<Value, ClientError> {
        self.request(Method::POST, "/control/restart").await
    }

    /// GET /control/logs?service=..&tail=..
    pub async fn logs(&self, service: &str, tail: i64) -> Result<Value, ClientError> {
        self.request(Method::GET, &logs_path(service, tail)).await
    }
}

fn logs_path(service: &str, tail: i64) -> String {
    format!(
        "/control/logs?service={}&tail={}",
        urlencoding::encode(service),
        urlencoding::encode(&tail.to_string()),
    )
}
