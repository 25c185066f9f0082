//! Autosuggestion candidates for the search bar.

use crate::model::Card;
use crate::state::search::SearchQuery;

/// Upper bound on suggestions shown under the search bar.
pub const MAX_SUGGESTIONS: usize = 10;

/// Up to `MAX_SUGGESTIONS` cards whose name starts with `query`.
///
/// Catalog order, no ranking. A blank query yields no suggestions (not the
/// whole catalog). Every suggestion is also a `search::filter` result, since a
/// name prefix is a name substring.
pub fn suggest<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let Some(query) = SearchQuery::new(query) else {
        return Vec::new();
    };

    cards
        .iter()
        .filter(|card| query.is_name_prefix_of(card))
        .take(MAX_SUGGESTIONS)
        .collect()
}
