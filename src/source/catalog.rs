//! One-shot catalog loading.
//!
//! `fetch_catalog` is the whole load contract: one GET, status check, decode.
//! `CatalogLoader` runs it on a background thread so the event loop can keep
//! rendering the loading state, and hands the result back over a channel.

use crate::model::{Card, LoadError, NetworkError};
use crate::parser::parse_catalog;
use crate::source::http::CatalogTransport;
use crate::source::CatalogState;
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use tracing::{debug, info, warn};

/// Fetch and decode the catalog with exactly one request.
///
/// # Errors
///
/// - `LoadError::Network` if the transport fails or the status is not 2xx
/// - `LoadError::Parse` if the body is not `{ data: [Card, ...] }`
pub fn fetch_catalog<T>(transport: &T, endpoint: &str) -> Result<Vec<Card>, LoadError>
where
    T: CatalogTransport + ?Sized,
{
    info!(endpoint, "Fetching card catalog");

    let response = transport.get(endpoint)?;
    if !response.is_success() {
        warn!(status = response.status, "Catalog endpoint returned an error status");
        return Err(NetworkError::Status(response.status).into());
    }

    let cards = parse_catalog(&response.body)?;
    info!(count = cards.len(), "Card catalog loaded");
    Ok(cards)
}

/// Synchronous load: `Pending` is never observable from here.
pub fn load<T>(transport: &T, endpoint: &str) -> CatalogState
where
    T: CatalogTransport + ?Sized,
{
    CatalogState::from_result(fetch_catalog(transport, endpoint))
}

/// Background catalog fetch.
///
/// Dropping the loader before the fetch completes detaches the worker; its
/// eventual result is discarded instead of being applied to a stale viewer.
#[derive(Debug)]
pub struct CatalogLoader {
    rx: Receiver<Result<Vec<Card>, LoadError>>,
    finished: bool,
}

impl CatalogLoader {
    /// Start fetching `endpoint` on a named worker thread.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn spawn<T>(transport: T, endpoint: impl Into<String>) -> io::Result<Self>
    where
        T: CatalogTransport + 'static,
    {
        let endpoint = endpoint.into();
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("catalog-fetch".to_string())
            .spawn(move || {
                let result = fetch_catalog(&transport, &endpoint);
                if tx.send(result).is_err() {
                    debug!("Viewer gone before catalog arrived; discarding result");
                }
            })?;

        Ok(Self {
            rx,
            finished: false,
        })
    }

    /// Non-blocking check for the fetch result.
    ///
    /// Returns `Some` exactly once. A worker that died without reporting
    /// (panic) is surfaced as a transport error so the viewer never stays
    /// `Pending` because of it.
    pub fn poll(&mut self) -> Option<Result<Vec<Card>, LoadError>> {
        if self.finished {
            return None;
        }

        match self.rx.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(NetworkError::Transport(
                    "catalog fetch ended without a response".to_string(),
                )
                .into()))
            }
        }
    }

    /// True once `poll` has delivered the result.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
