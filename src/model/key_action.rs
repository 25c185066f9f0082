//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
///
/// Text entry into the search bar is not an action: while the search bar has
/// focus, printable characters edit the query directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus navigation
    /// Focus the search bar. Default: /
    FocusSearch,
    /// Leave the search bar and focus the results list. Default: Esc
    FocusResults,
    /// Cycle focus: Search → Suggestions (when shown) → Results. Default: Tab
    CycleFocus,

    // List navigation
    /// Move the highlight one row up in the focused list. Default: k/↑
    MoveUp,
    /// Move the highlight one row down in the focused list. Default: j/↓
    MoveDown,
    /// Select the highlighted suggestion or card. Default: Enter
    Select,

    // Pagination
    /// Show the next page of results. Default: ]/Page Down/Ctrl+n
    NextPage,
    /// Show the previous page of results. Default: [/Page Up/Ctrl+p
    PrevPage,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// Actions that stay bound while the search bar has focus.
    ///
    /// Everything else is shadowed by text entry (typing `q` must not quit).
    pub fn available_while_typing(self) -> bool {
        matches!(
            self,
            KeyAction::FocusResults
                | KeyAction::CycleFocus
                | KeyAction::NextPage
                | KeyAction::PrevPage
                | KeyAction::Select
        )
    }
}
