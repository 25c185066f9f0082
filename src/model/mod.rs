//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod card;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use card::{Attack, Card, CardId, CardImages, CardSet, InvalidCardId, StatValue};
pub use error::{AppError, CatalogParseError, LoadError, NetworkError};
pub use key_action::KeyAction;
