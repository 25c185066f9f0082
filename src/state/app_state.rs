//! Application state and transitions.
//!
//! AppState is the root state type: the `CardViewer` core plus the UI-only
//! bits the terminal shell needs (focus, search cursor, list highlights).
//! All state transitions are pure functions following Elm architecture.

use crate::model::{Card, KeyAction, LoadError};
use crate::state::search_input_handler::{self, QueryEditor};
use crate::state::viewer::CardViewer;
use std::num::NonZeroUsize;

// ===== FocusPane =====

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Search bar: printable keys edit the query.
    #[default]
    Search,
    /// Suggestion list under the search bar.
    Suggestions,
    /// Results list for the current page.
    Results,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Catalog**: Pending → Loaded | Failed, once (owned by `CardViewer`)
/// - **Focus**: Search → Suggestions (only while suggestions exist) → Results → Search
/// - **Highlights**: reset to the top whenever the list they index changes
/// - **Results scroll**: `results_offset` follows `results_highlight` so the
///   highlighted row always lies inside the rows the pane can show
#[derive(Debug, Clone)]
pub struct AppState {
    viewer: CardViewer,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Search bar cursor, in characters.
    cursor: usize,

    /// Highlighted row in the suggestion list.
    pub suggestion_highlight: usize,

    /// Highlighted row on the current results page.
    pub results_highlight: usize,

    /// First page row drawn in the results pane.
    results_offset: usize,

    /// Rows the results pane can show; 0 until the first frame is laid out.
    results_rows: usize,

    /// Query to apply once the catalog arrives (`--search`).
    initial_query: Option<String>,
}

impl AppState {
    /// Create new AppState waiting for the catalog.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            viewer: CardViewer::new(page_size),
            focus: FocusPane::Search,
            cursor: 0,
            suggestion_highlight: 0,
            results_highlight: 0,
            results_offset: 0,
            results_rows: 0,
            initial_query: None,
        }
    }

    /// Seed the query applied right after a successful load.
    pub fn with_initial_query(mut self, query: Option<String>) -> Self {
        self.initial_query = query.filter(|q| !q.is_empty());
        self
    }

    pub fn viewer(&self) -> &CardViewer {
        &self.viewer
    }

    /// Search bar cursor, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First page row drawn in the results pane.
    pub fn results_offset(&self) -> usize {
        self.results_offset
    }

    /// Record how many result rows fit on screen, then re-clamp the scroll.
    pub fn set_results_rows(&mut self, rows: usize) {
        self.results_rows = rows;
        self.scroll_results_to_highlight();
    }

    /// Hand the catalog result to the viewer, then apply any initial query.
    pub fn apply_catalog(&mut self, result: Result<Vec<Card>, LoadError>) {
        if !self.viewer.apply_catalog(result) {
            return;
        }
        if let Some(query) = self.initial_query.take() {
            self.edit_query(|_| QueryEditor::at_end(query));
        }
    }

    /// Run a search bar edit and push the resulting text into the viewer.
    ///
    /// No-op until the catalog is loaded: there is nothing to search yet.
    pub fn edit_query(&mut self, edit: impl FnOnce(QueryEditor) -> QueryEditor) {
        if !self.viewer.catalog().is_loaded() {
            return;
        }

        let editor = QueryEditor {
            text: self.viewer.query().to_string(),
            cursor: self.cursor,
        };
        let edited = edit(editor);
        self.cursor = edited.cursor;
        if self.viewer.set_query(edited.text) {
            self.suggestion_highlight = 0;
            self.results_highlight = 0;
            self.scroll_results_to_highlight();
        }
    }

    /// Type a character into the search bar.
    pub fn type_char(&mut self, ch: char) {
        self.edit_query(|editor| search_input_handler::handle_char_input(editor, ch));
    }

    /// Select the card on the current page at `row`.
    pub fn select_result(&mut self, row: usize) {
        let card = self.viewer.view().page_cards().get(row).map(|c| (*c).clone());
        if let Some(card) = card {
            if self.viewer.select_card(&card) {
                self.results_highlight = row;
                self.scroll_results_to_highlight();
            }
        }
    }

    /// Select the suggestion at `row`: fills the query with its name.
    pub fn select_suggestion(&mut self, row: usize) {
        let card = self.viewer.view().suggestions.get(row).map(|c| (*c).clone());
        if let Some(card) = card {
            if self.viewer.select_suggestion(&card) {
                self.cursor = card.name.chars().count();
                self.suggestion_highlight = 0;
                self.results_highlight = 0;
                self.scroll_results_to_highlight();
                if self.focus == FocusPane::Suggestions {
                    self.focus = FocusPane::Results;
                }
            }
        }
    }

    pub fn next_page(&mut self) {
        if self.viewer.next_page() {
            self.results_highlight = 0;
            self.scroll_results_to_highlight();
        }
    }

    pub fn prev_page(&mut self) {
        if self.viewer.prev_page() {
            self.results_highlight = 0;
            self.scroll_results_to_highlight();
        }
    }

    /// Cycle focus: Search → Suggestions → Results → Search.
    /// Suggestions are skipped while the list is empty.
    pub fn cycle_focus(&mut self) {
        let has_suggestions = !self.viewer.view().suggestions.is_empty();
        self.focus = match self.focus {
            FocusPane::Search if has_suggestions => FocusPane::Suggestions,
            FocusPane::Search | FocusPane::Suggestions => FocusPane::Results,
            FocusPane::Results => FocusPane::Search,
        };
    }

    /// Move the highlight in the focused list by one row, clamped to the list.
    pub fn move_highlight(&mut self, down: bool) {
        let view = self.viewer.view();
        let (highlight, len) = match self.focus {
            FocusPane::Suggestions => (&mut self.suggestion_highlight, view.suggestions.len()),
            FocusPane::Results => (&mut self.results_highlight, view.page_cards().len()),
            FocusPane::Search => return,
        };

        let last = len.saturating_sub(1);
        *highlight = if down {
            (*highlight + 1).min(last)
        } else {
            highlight.saturating_sub(1).min(last)
        };
        self.scroll_results_to_highlight();
    }

    /// Move `results_offset` the least distance that puts the highlight in view.
    ///
    /// Also pulls the offset back when the page shrank below it. The offset
    /// stays 0 while the pane height is unknown.
    fn scroll_results_to_highlight(&mut self) {
        if self.results_rows == 0 {
            self.results_offset = 0;
            return;
        }

        let page_len = self.viewer.view().page_cards().len();
        let max_offset = page_len.saturating_sub(self.results_rows);
        let highlight = self.results_highlight;

        let mut offset = self.results_offset.min(max_offset);
        if highlight < offset {
            offset = highlight;
        } else if highlight >= offset + self.results_rows {
            offset = highlight + 1 - self.results_rows;
        }
        self.results_offset = offset;
    }

    /// Apply a bound action. Returns true if the app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::FocusSearch => self.focus = FocusPane::Search,
            KeyAction::FocusResults => self.focus = FocusPane::Results,
            KeyAction::CycleFocus => self.cycle_focus(),
            KeyAction::MoveUp => self.move_highlight(false),
            KeyAction::MoveDown => self.move_highlight(true),
            KeyAction::NextPage => self.next_page(),
            KeyAction::PrevPage => self.prev_page(),
            KeyAction::Select => self.select_highlighted(),
        }
        false
    }

    /// Enter on the focused pane.
    ///
    /// From the search bar this picks the highlighted suggestion when there is
    /// one, otherwise it just moves focus to the results.
    fn select_highlighted(&mut self) {
        match self.focus {
            FocusPane::Search => {
                if self.viewer.view().suggestions.is_empty() {
                    self.focus = FocusPane::Results;
                } else {
                    self.select_suggestion(self.suggestion_highlight);
                }
            }
            FocusPane::Suggestions => self.select_suggestion(self.suggestion_highlight),
            FocusPane::Results => self.select_result(self.results_highlight),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
