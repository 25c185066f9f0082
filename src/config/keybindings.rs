//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Bindings for printable keys only fire outside the search bar; see
/// [`KeyAction::available_while_typing`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let none = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        let mut bindings = HashMap::new();

        // Focus
        bindings.insert(none(KeyCode::Char('/')), KeyAction::FocusSearch);
        bindings.insert(none(KeyCode::Esc), KeyAction::FocusResults);
        bindings.insert(none(KeyCode::Tab), KeyAction::CycleFocus);

        // List navigation
        bindings.insert(none(KeyCode::Up), KeyAction::MoveUp);
        bindings.insert(none(KeyCode::Char('k')), KeyAction::MoveUp);
        bindings.insert(none(KeyCode::Down), KeyAction::MoveDown);
        bindings.insert(none(KeyCode::Char('j')), KeyAction::MoveDown);
        bindings.insert(none(KeyCode::Enter), KeyAction::Select);

        // Pagination
        bindings.insert(none(KeyCode::PageDown), KeyAction::NextPage);
        bindings.insert(none(KeyCode::Char(']')), KeyAction::NextPage);
        bindings.insert(ctrl('n'), KeyAction::NextPage);
        bindings.insert(none(KeyCode::PageUp), KeyAction::PrevPage);
        bindings.insert(none(KeyCode::Char('[')), KeyAction::PrevPage);
        bindings.insert(ctrl('p'), KeyAction::PrevPage);

        // Application
        bindings.insert(none(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(ctrl('c'), KeyAction::Quit);

        Self { bindings }
    }
}
