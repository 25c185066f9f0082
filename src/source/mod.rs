//! Catalog data source.
//!
//! This module provides the one inbound data path of the viewer:
//! - `http`: the transport seam (`CatalogTransport`) and its implementations
//! - `catalog`: one-shot fetch + decode, and the background `CatalogLoader`
//! - `CatalogState`: the tri-state outcome consumed by the viewer state

use crate::model::{Card, LoadError};
use tracing::warn;

pub mod catalog;
pub mod http;

pub use catalog::{fetch_catalog, load, CatalogLoader};
pub use http::{CatalogTransport, HttpTransport, StaticTransport, TransportResponse};

/// Coarse loading status exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStatus {
    Loading,
    Loaded,
    Failed,
}

/// Outcome of the catalog load.
///
/// Sum type enforces exactly one state. Starts `Pending` and transitions
/// exactly once; after that it is immutable.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Fetch in flight.
    Pending,
    /// Full catalog in endpoint order.
    Loaded(Vec<Card>),
    /// Load failed; the message is shown to the user verbatim.
    Failed(String),
}

impl CatalogState {
    /// Map a load result to its terminal state.
    pub fn from_result(result: Result<Vec<Card>, LoadError>) -> Self {
        match result {
            Ok(cards) => CatalogState::Loaded(cards),
            Err(err) => CatalogState::Failed(err.to_string()),
        }
    }

    /// Apply a load result if still `Pending`.
    ///
    /// Returns `false` (and leaves the state untouched) when the catalog has
    /// already been resolved.
    pub fn resolve(&mut self, result: Result<Vec<Card>, LoadError>) -> bool {
        if !self.is_pending() {
            warn!("Ignoring second catalog result; catalog state is final");
            return false;
        }
        *self = Self::from_result(result);
        true
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, CatalogState::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    /// Loaded cards, or an empty slice while pending or after failure.
    pub fn cards(&self) -> &[Card] {
        match self {
            CatalogState::Loaded(cards) => cards,
            CatalogState::Pending | CatalogState::Failed(_) => &[],
        }
    }

    pub fn status(&self) -> LoadingStatus {
        match self {
            CatalogState::Pending => LoadingStatus::Loading,
            CatalogState::Loaded(_) => LoadingStatus::Loaded,
            CatalogState::Failed(_) => LoadingStatus::Failed,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            CatalogState::Pending | CatalogState::Loaded(_) => None,
        }
    }
}
