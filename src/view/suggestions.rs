//! Suggestion list shown under the search bar.

use crate::model::Card;
use crate::view::styles::ViewerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Card names whose name starts with the query. Row `i` is `suggestions[i]`.
pub struct SuggestionList<'v, 'a> {
    suggestions: &'v [&'a Card],
    highlight: usize,
    focused: bool,
    styles: &'v ViewerStyles,
}

impl<'v, 'a> SuggestionList<'v, 'a> {
    pub fn new(
        suggestions: &'v [&'a Card],
        highlight: usize,
        focused: bool,
        styles: &'v ViewerStyles,
    ) -> Self {
        Self {
            suggestions,
            highlight,
            focused,
            styles,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        self.suggestions
            .iter()
            .enumerate()
            .map(|(row, card)| {
                let style = if self.focused && row == self.highlight {
                    self.styles.highlight
                } else {
                    Style::default()
                };
                Line::from(Span::styled(card.name.as_str(), style))
            })
            .collect()
    }
}

impl Widget for SuggestionList<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Suggestions")
            .border_style(self.styles.border_for(self.focused));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
