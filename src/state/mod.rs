//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod pagination;
pub mod search;
pub mod search_input_handler;
pub mod selection;
pub mod suggestion;
pub mod view_state;
pub mod viewer;

// Re-export for convenience
pub use app_state::{AppState, FocusPane};
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
pub use search::SearchQuery;
pub use search_input_handler::QueryEditor;
pub use selection::Selection;
pub use view_state::{derive_view_state, ViewState};
pub use viewer::CardViewer;
