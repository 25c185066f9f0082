//! Card records as delivered by the catalog endpoint.
//!
//! Only `id`, `name` and `set.name` are required. Everything else is optional
//! in the payload and stays an `Option` here, so rendering has to branch on
//! presence instead of relying on silent fallbacks.

use serde::Deserialize;
use std::fmt;

// ===== CardId =====

/// Unique key of a card (e.g. `"base1-58"`).
/// Smart constructor rejects empty ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct CardId(String);

impl CardId {
    /// Smart constructor: validates non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidCardId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidCardId)
        } else {
            Ok(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CardId {
    type Error = InvalidCardId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returned when a card id is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("card id must not be empty")]
pub struct InvalidCardId;

// ===== Card =====

/// A single trading card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub set: CardSet,
    #[serde(default)]
    pub images: Option<CardImages>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub hp: Option<StatValue>,
    #[serde(default)]
    pub attacks: Option<Vec<Attack>>,
}

impl Card {
    /// Minimal card with only the required fields populated.
    pub fn new(id: CardId, name: impl Into<String>, set_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            set: CardSet {
                name: set_name.into(),
            },
            images: None,
            rarity: None,
            types: None,
            hp: None,
            attacks: None,
        }
    }

    /// URL of the small card image, if the payload carried one.
    pub fn small_image(&self) -> Option<&str> {
        self.images.as_ref().and_then(|i| i.small.as_deref())
    }

    /// Display line used in result lists: `"<name> - <set name>"`.
    pub fn list_label(&self) -> String {
        format!("{} - {}", self.name, self.set.name)
    }
}

/// Expansion set a card belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSet {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// One attack line. Damage is absent for status-only attacks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub damage: Option<StatValue>,
}

// ===== StatValue =====

/// A numeric stat the catalog sends either as a string (`"60"`, `"30+"`)
/// or as a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Text(String),
    Number(i64),
}

impl StatValue {
    /// True for values that carry nothing worth rendering (`""`).
    pub fn is_blank(&self) -> bool {
        matches!(self, StatValue::Text(s) if s.trim().is_empty())
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Text(s) => f.write_str(s),
            StatValue::Number(n) => write!(f, "{}", n),
        }
    }
}
