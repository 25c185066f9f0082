//! Search input widget for rendering the search bar.

use crate::view::styles::ViewerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in the empty search bar while it does not have focus.
const PLACEHOLDER: &str = "Search by name or id (press /)";

/// Search input widget.
///
/// Draws the cursor as a reversed cell while the bar has focus.
pub struct SearchInput<'a> {
    query: &'a str,
    cursor: usize,
    focused: bool,
    styles: &'a ViewerStyles,
}

impl<'a> SearchInput<'a> {
    /// `cursor` counts characters, not bytes.
    pub fn new(query: &'a str, cursor: usize, focused: bool, styles: &'a ViewerStyles) -> Self {
        Self {
            query,
            cursor,
            focused,
            styles,
        }
    }

    /// Line for an inner area `width` cells wide.
    ///
    /// While focused, the text scrolls left so the cursor cell stays inside
    /// the last column.
    fn line(&self, width: usize) -> Line<'a> {
        if !self.focused {
            if self.query.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.styles.muted));
            }
            return Line::from(self.query);
        }

        let start = self.cursor.saturating_sub(width.saturating_sub(1));
        let before: String = self
            .query
            .chars()
            .skip(start)
            .take(self.cursor - start)
            .collect();
        let mut rest = self.query.chars().skip(self.cursor);
        let cursor_char = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                cursor_char,
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(self.styles.border_for(self.focused));

        let inner_width = usize::from(area.width.saturating_sub(2));
        Paragraph::new(self.line(inner_width))
            .block(block)
            .render(area, buf);
    }
}
