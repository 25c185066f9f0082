//! Card viewer core: the single writer of catalog, query, page and selection.
//!
//! Every callback mutates the inputs and, where the query changed, reconciles
//! the selection before returning. `view()` then derives a consistent
//! snapshot. Callbacks are ignored until the catalog is loaded, and forever
//! after a failed load.

use crate::model::{Card, LoadError};
use crate::source::CatalogState;
use crate::state::pagination::Paginator;
use crate::state::search;
use crate::state::selection::{self, Selection};
use crate::state::view_state::{derive_view_state, ViewState};
use std::num::NonZeroUsize;
use tracing::{debug, info};

/// One viewer instance. Instances share nothing.
#[derive(Debug, Clone)]
pub struct CardViewer {
    catalog: CatalogState,
    query: String,
    paginator: Paginator,
    selection: Selection,
    suggestions_dismissed: bool,
}

impl CardViewer {
    /// New viewer waiting for its catalog.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            catalog: CatalogState::Pending,
            query: String::new(),
            paginator: Paginator::new(page_size),
            selection: Selection::NoSelection,
            suggestions_dismissed: false,
        }
    }

    /// Viewer over an already-resolved catalog.
    pub fn with_catalog(page_size: NonZeroUsize, result: Result<Vec<Card>, LoadError>) -> Self {
        let mut viewer = Self::new(page_size);
        viewer.apply_catalog(result);
        viewer
    }

    /// Apply the one catalog load result.
    ///
    /// On success the first card is selected. Returns false if the catalog
    /// was already resolved.
    pub fn apply_catalog(&mut self, result: Result<Vec<Card>, LoadError>) -> bool {
        if !self.catalog.resolve(result) {
            return false;
        }

        match &self.catalog {
            CatalogState::Loaded(cards) => {
                info!(count = cards.len(), "Catalog ready");
                self.selection = selection::initial(cards);
            }
            CatalogState::Failed(message) => {
                info!(error = %message, "Catalog unavailable for this session");
            }
            CatalogState::Pending => {}
        }
        true
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn page(&self) -> usize {
        self.paginator.page()
    }

    /// Replace the query.
    ///
    /// Setting the current value again is not a change. A real change resets
    /// the page, brings suggestions back, and reconciles the selection.
    /// Returns true if anything changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if !self.catalog.is_loaded() || query == self.query {
            return false;
        }

        debug!(query = %query, "Query changed");
        self.query = query;
        self.suggestions_dismissed = false;
        self.paginator.reset();

        let filtered = search::filter(self.catalog.cards(), &self.query);
        self.selection = selection::reconcile(&filtered, &self.query, &self.selection);
        true
    }

    /// Explicitly select `card` (click on a result).
    ///
    /// Ignored unless `card` is in the loaded catalog. Returns true if applied.
    pub fn select_card(&mut self, card: &Card) -> bool {
        match selection::explicit(self.catalog.cards(), card) {
            Some(selected) => {
                debug!(card = %card.id, "Card selected");
                self.selection = selected;
                true
            }
            None => false,
        }
    }

    /// Explicitly select a suggestion.
    ///
    /// Selects the card, copies its name into the query and hides suggestions.
    /// The query change here does not trigger reconciliation; the explicit
    /// choice stands until the user edits the query again.
    pub fn select_suggestion(&mut self, card: &Card) -> bool {
        let Some(selected) = selection::explicit(self.catalog.cards(), card) else {
            return false;
        };

        debug!(card = %card.id, "Suggestion selected");
        self.selection = selected;
        self.query = card.name.clone();
        self.suggestions_dismissed = true;
        self.paginator.reset();
        true
    }

    /// Next page of results. No-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.catalog.is_loaded() {
            return false;
        }
        let count = self.filtered_count();
        self.paginator.next(count)
    }

    /// Previous page of results. No-op on the first page.
    pub fn prev_page(&mut self) -> bool {
        if !self.catalog.is_loaded() {
            return false;
        }
        let count = self.filtered_count();
        self.paginator.prev(count)
    }

    /// Derive the current snapshot.
    pub fn view(&self) -> ViewState<'_> {
        derive_view_state(
            &self.catalog,
            &self.query,
            self.paginator.page(),
            self.paginator.page_size(),
            &self.selection,
            self.suggestions_dismissed,
        )
    }

    fn filtered_count(&self) -> usize {
        search::filter(self.catalog.cards(), &self.query).len()
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
