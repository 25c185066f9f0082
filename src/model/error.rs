//! Error types for cardex.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Startup failures before the terminal is taken over (config, logging)
//! - [`LoadError`] - Catalog fetch failures, surfaced to the user rather than propagated
//!   - [`NetworkError`] - Transport failure or non-success HTTP status
//!   - [`CatalogParseError`] - Payload could not be decoded into `{ data: [Card, ...] }`
//!
//! # Recovery Strategy
//!
//! Load errors are **terminal for the session but not for the process**: the viewer
//! moves to `CatalogState::Failed` and renders the error message verbatim. There is no
//! retry and no partial catalog. Everything else is fatal and propagates to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from the startup path in `main`. Terminal failures surface as
/// `view::TuiError`; catalog failures are shown inside the TUI instead of
/// aborting it.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// Failure of the one-shot catalog load.
///
/// The `Display` text is what the user sees in the failure panel, so every variant
/// renders a self-contained message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a usable response.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The response arrived but its body is not a catalog.
    #[error(transparent)]
    Parse(#[from] CatalogParseError),
}

/// Transport-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Connection refused, DNS failure, TLS error, timeout, broken body stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex::model::error::NetworkError;
    ///
    /// let err = NetworkError::Transport("connection refused".to_string());
    /// assert!(err.to_string().contains("connection refused"));
    /// ```
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-2xx status.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardex::model::error::NetworkError;
    ///
    /// let err = NetworkError::Status(500);
    /// assert_eq!(err.to_string(), "HTTP error! status: 500");
    /// ```
    #[error("HTTP error! status: {0}")]
    Status(u16),
}

/// The payload could not be decoded into the catalog shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogParseError {
    /// Body is not JSON, or JSON that does not match `{ data: [Card, ...] }`.
    ///
    /// `message` is the `serde_json` error text, which carries line/column and
    /// the offending field name.
    #[error("Invalid catalog payload: {message}")]
    InvalidPayload { message: String },

    /// Two cards share an id; ids key the selection, so they must be unique.
    #[error("Invalid catalog payload: duplicate card id `{id}`")]
    DuplicateId { id: String },
}

impl From<serde_json::Error> for CatalogParseError {
    fn from(err: serde_json::Error) -> Self {
        CatalogParseError::InvalidPayload {
            message: err.to_string(),
        }
    }
}
