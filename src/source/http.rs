//! HTTP transport for the catalog endpoint.
//!
//! The transport only moves bytes: status interpretation and payload decoding
//! live in `source::catalog` so they can be tested against canned responses.

use crate::model::NetworkError;
use std::time::Duration;

/// Raw response as seen by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body decoded as UTF-8 text.
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the single GET the viewer needs.
///
/// `Send` so the fetch can run on a background thread.
pub trait CatalogTransport: Send {
    /// Issue a GET for `url` and return status plus body.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Transport` when no response could be obtained.
    /// Non-2xx statuses are NOT errors at this layer.
    fn get(&self, url: &str) -> Result<TransportResponse, NetworkError>;
}

/// `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Build a client.
    ///
    /// `timeout = None` waits indefinitely; a hung request then leaves the
    /// viewer in its loading state.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::Transport` if the TLS backend cannot be initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("cardex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl CatalogTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, NetworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| NetworkError::Transport(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

/// Transport that replays one canned outcome, for offline runs and tests.
#[derive(Debug, Clone)]
pub struct StaticTransport {
    outcome: Result<TransportResponse, NetworkError>,
}

impl StaticTransport {
    /// Always answer with `status` and `body`.
    pub fn respond(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: Ok(TransportResponse::new(status, body)),
        }
    }

    /// Always fail with `error`.
    pub fn fail(error: NetworkError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

impl CatalogTransport for StaticTransport {
    fn get(&self, _url: &str) -> Result<TransportResponse, NetworkError> {
        self.outcome.clone()
    }
}
