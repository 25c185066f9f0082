//! Card search over the loaded catalog.
//!
//! Matching is case-insensitive substring containment over a card's name and
//! id. No index is kept between calls: catalogs are hundreds of cards, and a
//! linear scan is O(n·m) per keystroke.

use crate::model::Card;

// ===== SearchQuery =====

/// Validated, normalized search query. Never blank.
/// Smart constructor enforces the non-blank invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
}

impl SearchQuery {
    /// Smart constructor: returns None if query is empty or whitespace-only.
    ///
    /// The raw text is kept as typed; surrounding whitespace is significant
    /// for matching once the query is non-blank.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            let normalized = normalize(&raw);
            Some(Self { raw, normalized })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lower-cased form used for all comparisons.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Substring predicate: name or id contains the query.
    pub fn matches(&self, card: &Card) -> bool {
        normalize(&card.name).contains(&self.normalized)
            || normalize(card.id.as_str()).contains(&self.normalized)
    }

    /// Equality predicate: name or id is exactly the query.
    pub fn matches_exactly(&self, card: &Card) -> bool {
        normalize(&card.name) == self.normalized || normalize(card.id.as_str()) == self.normalized
    }

    /// Prefix predicate on the name only.
    pub fn is_name_prefix_of(&self, card: &Card) -> bool {
        normalize(&card.name).starts_with(&self.normalized)
    }
}

/// Lower-case for comparison.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

// ===== Search Execution =====

/// Cards whose name or id contains `query`, in catalog order.
///
/// A blank query returns every card unchanged.
pub fn filter<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    match SearchQuery::new(query) {
        Some(query) => cards.iter().filter(|card| query.matches(card)).collect(),
        None => cards.iter().collect(),
    }
}

/// First card whose normalized name or id equals the normalized query.
///
/// Blank queries never match exactly.
pub fn exact_match<'a, I>(cards: I, query: &str) -> Option<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let query = SearchQuery::new(query)?;
    cards.into_iter().find(|card| query.matches_exactly(card))
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
