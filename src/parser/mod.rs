//! Catalog payload parser.
//!
//! Pure decoding of the endpoint's JSON body into validated `Card`s. The
//! payload shape is `{ "data": [Card, ...] }`; any other top-level fields
//! (paging metadata, counts) are ignored.

use crate::model::{Card, CatalogParseError};
use serde::Deserialize;
use std::collections::HashSet;

/// Raw JSON envelope around the card list.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    data: Vec<Card>,
}

/// Parse a catalog response body.
///
/// Card order is preserved exactly as delivered; downstream filtering relies
/// on catalog order being stable.
///
/// # Errors
///
/// Returns `CatalogParseError::InvalidPayload` when the body is not JSON, when
/// `data` is missing or not an array, or when any card lacks a required field
/// (`id`, `name`, `set.name`) or has an empty id.
///
/// Returns `CatalogParseError::DuplicateId` when two cards share an id.
pub fn parse_catalog(body: &str) -> Result<Vec<Card>, CatalogParseError> {
    let raw: RawCatalog = serde_json::from_str(body)?;

    let mut seen = HashSet::with_capacity(raw.data.len());
    if let Some(dup) = raw.data.iter().find(|card| !seen.insert(card.id.as_str())) {
        return Err(CatalogParseError::DuplicateId {
            id: dup.id.as_str().to_string(),
        });
    }

    Ok(raw.data)
}
