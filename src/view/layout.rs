//! Screen layout.
//!
//! Pure layout logic: `calculate_areas` splits the frame, `render_layout`
//! draws every pane into those areas. The event loop keeps the last areas
//! for mouse hit testing.

use crate::source::LoadingStatus;
use crate::state::{AppState, FocusPane, ViewState};
use crate::view::detail::CardDetail;
use crate::view::results::{self, ResultsList};
use crate::view::search_input::SearchInput;
use crate::view::styles::ViewerStyles;
use crate::view::suggestions::SuggestionList;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub const HEADER_TEXT: &str = "Cardex — trading card catalog";
pub const FOOTER_TEXT: &str = "Card data provided by the Pokémon TCG API (pokemontcg.io)";

/// Where each pane goes for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    /// `None` while there are no suggestions to show.
    pub suggestions: Option<Rect>,
    pub results: Rect,
    pub detail: Rect,
    pub status: Rect,
    pub footer: Rect,
}

/// Split the frame for a view with `suggestion_count` suggestions.
///
/// Vertical: header, search bar, suggestions (sized to fit), content,
/// status bar, footer. Content splits horizontally into results and detail.
pub fn calculate_areas(area: Rect, suggestion_count: usize) -> ScreenAreas {
    let suggestion_height = if suggestion_count == 0 {
        0
    } else {
        // Two border rows around the list.
        u16::try_from(suggestion_count).unwrap_or(u16::MAX).saturating_add(2)
    };

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Header
            Constraint::Length(3),                 // Search bar
            Constraint::Length(suggestion_height), // Suggestions
            Constraint::Min(0),                    // Results + detail
            Constraint::Length(1),                 // Status bar
            Constraint::Length(1),                 // Footer
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical_chunks[3]);

    ScreenAreas {
        header: vertical_chunks[0],
        search: vertical_chunks[1],
        suggestions: (suggestion_count > 0).then_some(vertical_chunks[2]),
        results: content_chunks[0],
        detail: content_chunks[1],
        status: vertical_chunks[4],
        footer: vertical_chunks[5],
    }
}

/// Map a click at (`column`, `row`) to a list row inside a bordered pane.
///
/// Returns `None` on the border or outside the pane.
pub fn list_row_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    let inside = column >= inner.left()
        && column < inner.right()
        && row >= inner.top()
        && row < inner.bottom();

    inside.then(|| usize::from(row - inner.y))
}

/// Status bar text for a view.
pub fn status_line(view: &ViewState<'_>) -> String {
    match view.loading_status {
        LoadingStatus::Loading => results::LOADING_TEXT.to_string(),
        LoadingStatus::Failed => results::failure_text(view.error_message.unwrap_or("unknown error")),
        LoadingStatus::Loaded => {
            let count = view.filtered_cards.len();
            let noun = if count == 1 { "card" } else { "cards" };
            format!(
                "Page {}/{} · {} {}",
                view.current_page, view.total_pages, count, noun
            )
        }
    }
}

/// Render every pane of the viewer.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ViewerStyles) {
    let view = state.viewer().view();
    let areas = calculate_areas(frame.area(), view.suggestions.len());

    frame.render_widget(
        Paragraph::new(Line::from(HEADER_TEXT)).style(styles.header),
        areas.header,
    );

    frame.render_widget(
        SearchInput::new(
            state.viewer().query(),
            state.cursor(),
            state.focus == FocusPane::Search,
            styles,
        ),
        areas.search,
    );

    if let Some(suggestion_area) = areas.suggestions {
        frame.render_widget(
            SuggestionList::new(
                &view.suggestions,
                state.suggestion_highlight,
                state.focus == FocusPane::Suggestions,
                styles,
            ),
            suggestion_area,
        );
    }

    frame.render_widget(
        ResultsList::new(
            &view,
            state.results_highlight,
            state.focus == FocusPane::Results,
            styles,
        )
        .with_offset(state.results_offset()),
        areas.results,
    );

    frame.render_widget(CardDetail::new(view.selected_card, styles), areas.detail);

    let status_style = if view.loading_status == LoadingStatus::Failed {
        styles.error
    } else {
        styles.muted
    };
    frame.render_widget(
        Paragraph::new(Line::from(status_line(&view))).style(status_style),
        areas.status,
    );

    frame.render_widget(
        Paragraph::new(Line::from(FOOTER_TEXT)).style(styles.muted),
        areas.footer,
    );
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
