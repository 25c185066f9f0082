//! Color and emphasis styles for the viewer panes.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ViewerStyles =====

/// Styles shared by every pane.
///
/// With colors disabled, emphasis falls back to modifiers (bold, reversed)
/// so highlights stay visible on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerStyles {
    pub header: Style,
    pub focused_border: Style,
    pub border: Style,
    /// Row under the keyboard highlight.
    pub highlight: Style,
    /// The selected card in the results list.
    pub selected: Style,
    pub label: Style,
    pub error: Style,
    pub muted: Style,
}

impl ViewerStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                focused_border: Style::default().fg(Color::Yellow),
                border: Style::default().fg(Color::Gray),
                highlight: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
                selected: Style::default().fg(Color::Green),
                label: Style::default().fg(Color::Cyan),
                error: Style::default().fg(Color::Red),
                muted: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD),
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                border: Style::default(),
                highlight: Style::default().add_modifier(Modifier::REVERSED),
                selected: Style::default().add_modifier(Modifier::BOLD),
                label: Style::default(),
                error: Style::default(),
                muted: Style::default(),
            }
        }
    }

    /// Border style for a pane, depending on focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.border
        }
    }
}

impl Default for ViewerStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
