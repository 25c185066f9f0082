//! Read-only snapshot consumed by the presentation layer.
//!
//! `derive_view_state` is the single place where filtered results,
//! suggestions, pagination and the selected card are computed. The viewer
//! calls it after every mutation, so the three derived views always come from
//! the same inputs and can never disagree.

use crate::model::Card;
use crate::source::{CatalogState, LoadingStatus};
use crate::state::pagination::{self, Page};
use crate::state::search;
use crate::state::selection::Selection;
use crate::state::suggestion;
use std::num::NonZeroUsize;

/// Snapshot of everything the UI renders.
///
/// Borrows the catalog; card references point into `CatalogState::Loaded`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<'a> {
    pub loading_status: LoadingStatus,
    pub error_message: Option<&'a str>,
    /// Every card matching the query, catalog order.
    pub filtered_cards: Vec<&'a Card>,
    pub suggestions: Vec<&'a Card>,
    pub selected_card: Option<&'a Card>,
    /// 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: NonZeroUsize,
}

impl<'a> ViewState<'a> {
    /// Cards on the current page.
    pub fn page_cards(&self) -> &[&'a Card] {
        self.page().items
    }

    fn page(&self) -> Page<'_, &'a Card> {
        pagination::paginate(&self.filtered_cards, self.current_page, self.page_size)
    }

    /// True if `card` is the selected one.
    pub fn is_selected(&self, card: &Card) -> bool {
        self.selected_card.is_some_and(|selected| selected.id == card.id)
    }
}

/// Compute the view for the given inputs.
///
/// Pure: same inputs, same snapshot. While the catalog is pending or failed
/// every list is empty and nothing is selected. `suggestions_dismissed`
/// hides suggestions after one was picked, until the query changes again.
pub fn derive_view_state<'a>(
    catalog: &'a CatalogState,
    query: &str,
    page: usize,
    page_size: NonZeroUsize,
    selection: &Selection,
    suggestions_dismissed: bool,
) -> ViewState<'a> {
    let cards = catalog.cards();

    let filtered_cards = search::filter(cards, query);
    let suggestions = if suggestions_dismissed {
        Vec::new()
    } else {
        suggestion::suggest(cards, query)
    };
    let total_pages = pagination::total_pages(filtered_cards.len(), page_size);

    ViewState {
        loading_status: catalog.status(),
        error_message: catalog.error_message(),
        filtered_cards,
        suggestions,
        selected_card: selection.resolve(cards),
        current_page: page.clamp(1, total_pages),
        total_pages,
        page_size,
    }
}
