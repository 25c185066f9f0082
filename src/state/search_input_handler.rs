//! Search bar editing (pure state transitions).
//!
//! The cursor is a character index, not a byte index, so multi-byte names
//! ("Flabébé", "Nidoran♀") edit correctly. All functions are pure - no side
//! effects, testable without TUI.

/// Query text plus cursor position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryEditor {
    pub text: String,
    /// Character offset, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl QueryEditor {
    /// Editor with cursor at the end of `text`.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Byte offset of the `char_index`-th character, or `text.len()` past the end.
fn byte_offset(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Insert `ch` at the cursor and advance the cursor.
pub fn handle_char_input(editor: QueryEditor, ch: char) -> QueryEditor {
    let QueryEditor { mut text, cursor } = editor;
    let cursor = cursor.min(text.chars().count());
    text.insert(byte_offset(&text, cursor), ch);
    QueryEditor {
        text,
        cursor: cursor + 1,
    }
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(editor: QueryEditor) -> QueryEditor {
    let cursor = editor.cursor.min(editor.char_len());
    if cursor == 0 {
        return QueryEditor { cursor, ..editor };
    }

    let mut text = editor.text;
    text.remove(byte_offset(&text, cursor - 1));
    QueryEditor {
        text,
        cursor: cursor - 1,
    }
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(editor: QueryEditor) -> QueryEditor {
    QueryEditor {
        cursor: editor.cursor.saturating_sub(1),
        ..editor
    }
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(editor: QueryEditor) -> QueryEditor {
    let max_cursor = editor.char_len();
    QueryEditor {
        cursor: (editor.cursor + 1).min(max_cursor),
        ..editor
    }
}

/// Clear the query (Ctrl+u in the search bar).
pub fn handle_clear(_editor: QueryEditor) -> QueryEditor {
    QueryEditor::default()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
