//! Selection state machine.
//!
//! Decides which single card the detail panel shows. Reconciliation runs on
//! every query change and applies these rules in order:
//!
//! 1. A card whose name or id equals the query exactly is selected.
//! 2. Otherwise, if the current selection no longer matches, the first
//!    result is selected.
//! 3. With no results, the selection is cleared.
//! 4. A selection that still matches is kept, so the detail panel does not
//!    jump around while the user keeps typing.
//!
//! Explicit selection (clicking a result or a suggestion) bypasses these rules
//! and holds until the next query change.

use crate::model::{Card, CardId};
use crate::state::search;

/// Sum type: either nothing is selected or exactly one card is.
///
/// Holds the card id rather than a reference so the selection can outlive any
/// particular derived view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(CardId),
}

impl Selection {
    /// Select `card`.
    pub fn of(card: &Card) -> Self {
        Selection::Selected(card.id.clone())
    }

    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Selection::Selected(id) => Some(id),
            Selection::NoSelection => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    /// Look the selected card up in `cards`.
    ///
    /// Returns None for `NoSelection` and for ids not present in `cards`.
    pub fn resolve<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        let id = self.card_id()?;
        cards.iter().find(|card| &card.id == id)
    }
}

/// Re-evaluate `current` after the query changed.
///
/// `filtered` must be `search::filter(catalog, query)`.
pub fn reconcile(filtered: &[&Card], query: &str, current: &Selection) -> Selection {
    // Rule 1: exact match wins.
    if let Some(exact) = search::exact_match(filtered.iter().copied(), query) {
        return Selection::of(exact);
    }

    // Rule 3: nothing to show.
    let Some(first) = filtered.first() else {
        return Selection::NoSelection;
    };

    match current {
        // Rule 4: still a result, keep it.
        Selection::Selected(id) if filtered.iter().any(|card| &card.id == id) => current.clone(),
        // Rule 2: first of results.
        Selection::Selected(_) | Selection::NoSelection => Selection::of(first),
    }
}

/// Selection right after the catalog loads with an empty query.
pub fn initial(cards: &[Card]) -> Selection {
    cards.first().map(Selection::of).unwrap_or_default()
}

/// Explicit user selection of `card`.
///
/// Returns None when `card` is not part of `catalog`; a selection must always
/// reference a loaded card.
pub fn explicit(catalog: &[Card], card: &Card) -> Option<Selection> {
    catalog
        .iter()
        .any(|candidate| candidate.id == card.id)
        .then(|| Selection::of(card))
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
