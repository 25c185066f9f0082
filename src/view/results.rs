//! Results list for the current page.

use crate::source::LoadingStatus;
use crate::state::ViewState;
use crate::view::styles::ViewerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LOADING_TEXT: &str = "Loading cards...";
pub const NO_MATCHES_TEXT: &str = "No cards match your search.";

/// Message shown in place of the list when the catalog failed to load.
pub fn failure_text(message: &str) -> String {
    format!("Failed to load cards: {}", message)
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

/// One row per card on the current page, in page order, starting at `offset`.
///
/// Row `i` of the inner area is `page_cards()[offset + i]`; mouse hit
/// testing relies on that.
pub struct ResultsList<'v, 'a> {
    view: &'v ViewState<'a>,
    highlight: usize,
    offset: usize,
    focused: bool,
    styles: &'v ViewerStyles,
}

impl<'v, 'a> ResultsList<'v, 'a> {
    pub fn new(
        view: &'v ViewState<'a>,
        highlight: usize,
        focused: bool,
        styles: &'v ViewerStyles,
    ) -> Self {
        Self {
            view,
            highlight,
            offset: 0,
            focused,
            styles,
        }
    }

    /// Start drawing at page row `offset`.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    fn lines(&self, max_width: usize) -> Vec<Line<'static>> {
        match self.view.loading_status {
            LoadingStatus::Loading => {
                return vec![Line::from(Span::styled(LOADING_TEXT, self.styles.muted))]
            }
            LoadingStatus::Failed => {
                let message = self.view.error_message.unwrap_or("unknown error");
                return vec![Line::from(Span::styled(
                    failure_text(message),
                    self.styles.error,
                ))];
            }
            LoadingStatus::Loaded => {}
        }

        let cards = self.view.page_cards();
        if cards.is_empty() {
            return vec![Line::from(Span::styled(NO_MATCHES_TEXT, self.styles.muted))];
        }

        cards
            .iter()
            .enumerate()
            .skip(self.offset)
            .map(|(row, card)| {
                let selected = self.view.is_selected(card);
                let marker = if selected { "> " } else { "  " };
                let mut style = if selected {
                    self.styles.selected
                } else {
                    ratatui::style::Style::default()
                };
                if self.focused && row == self.highlight {
                    style = style.patch(self.styles.highlight);
                }
                let label = truncate_to_width(&format!("{}{}", marker, card.list_label()), max_width);
                Line::from(Span::styled(label, style))
            })
            .collect()
    }
}

impl Widget for ResultsList<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Results")
            .border_style(self.styles.border_for(self.focused));

        // Only the failure message wraps; card rows must stay one line each.
        let inner_width = usize::from(area.width.saturating_sub(2));
        let mut paragraph = Paragraph::new(self.lines(inner_width)).block(block);
        if self.view.loading_status == LoadingStatus::Failed {
            paragraph = paragraph.wrap(Wrap { trim: true });
        }
        paragraph.render(area, buf);
    }
}
