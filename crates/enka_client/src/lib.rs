//! Asynchronous access to the Enka Network showcase endpoint.
//!
//! The client owns exactly one concern: turn a UID into the raw JSON document
//! the API served for it. The payload is handed back untouched as loosely
//! typed [`serde_json::Value`] so callers can choose how strictly to validate
//! it (the `enka-showcase-core` crate does the strict reading).

mod error;

pub use error::FetchError;

use serde_json::Value;

/// Public Enka Network API root.
pub const DEFAULT_BASE_URL: &str = "https://enka.network/api";

const USER_AGENT: &str = concat!("enka-showcase/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the player showcase API.
pub struct EnkaClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl EnkaClient {
    /// Create a client against the public API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different API root, e.g. a mirror or a
    /// local test server. Trailing slashes are tolerated.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw showcase document for `uid`.
    ///
    /// Sends a single `GET {base_url}/uid/{uid}` and does not retry. Any
    /// non-success status becomes [`FetchError::Status`] with the response
    /// body attached so rate-limit and maintenance messages survive into the
    /// error text.
    pub async fn fetch_player(&self, uid: u64) -> Result<Value, FetchError> {
        let url = format!("{}/uid/{}", self.base_url, uid);

        tracing::debug!("Fetching showcase for UID {} from {}", uid, url);

        let response = self
            .http_client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status { url, status, body });
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Decode { url, source })?;

        tracing::debug!("Showcase payload for UID {} received", uid);

        Ok(payload)
    }
}

impl Default for EnkaClient {
    fn default() -> Self {
        Self::new()
    }
}
