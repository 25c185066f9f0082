//! TUI rendering and terminal management (impure shell)

mod detail;
mod layout;
mod results;
mod search_input;
mod styles;
mod suggestions;

pub use detail::{detail_rows, CardDetail, MISSING};
pub use layout::{
    calculate_areas, list_row_at, render_layout, status_line, ScreenAreas, FOOTER_TEXT,
    HEADER_TEXT,
};
pub use results::{failure_text, ResultsList, LOADING_TEXT};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, ViewerStyles};
pub use suggestions::SuggestionList;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::NetworkError;
use crate::source::{CatalogLoader, HttpTransport};
use crate::state::{search_input_handler, AppState, FocusPane};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] NetworkError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    /// In-flight catalog fetch; `None` once its result has been applied.
    loader: Option<CatalogLoader>,
    key_bindings: KeyBindings,
    styles: ViewerStyles,
    /// Areas of the last rendered frame (for mouse click detection)
    last_areas: Option<ScreenAreas>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        app_state: AppState,
        loader: CatalogLoader,
        styles: ViewerStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            Some(loader),
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, on resize,
    /// and when the catalog result arrives; otherwise idles on the timer.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Catalog poll interval while the fetch is in flight
        const TIMER_INTERVAL: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            if event::poll(TIMER_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.poll_catalog() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        loader: Option<CatalogLoader>,
        key_bindings: KeyBindings,
        styles: ViewerStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            loader,
            key_bindings,
            styles,
            last_areas: None,
        }
    }

    /// Apply the catalog result if it has arrived.
    ///
    /// Returns true when the state changed and a redraw is due.
    fn poll_catalog(&mut self) -> bool {
        let Some(result) = self.loader.as_mut().and_then(CatalogLoader::poll) else {
            return false;
        };

        self.loader = None;
        self.app_state.apply_catalog(result);
        true
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && ctrl {
            return true;
        }

        // Text entry takes precedence over bindings in the search bar
        if self.app_state.focus == FocusPane::Search {
            match key.code {
                KeyCode::Char('u') if ctrl => {
                    self.app_state.edit_query(search_input_handler::handle_clear);
                    return false;
                }
                KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    self.app_state.type_char(ch);
                    return false;
                }
                KeyCode::Backspace => {
                    self.app_state.edit_query(search_input_handler::handle_backspace);
                    return false;
                }
                KeyCode::Left => {
                    self.app_state.edit_query(search_input_handler::handle_cursor_left);
                    return false;
                }
                KeyCode::Right => {
                    self.app_state.edit_query(search_input_handler::handle_cursor_right);
                    return false;
                }
                _ => {}
            }
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if self.app_state.focus == FocusPane::Search && !action.available_while_typing() {
            return false;
        }

        self.app_state.handle_action(action)
    }

    /// Handle a single mouse event
    ///
    /// Left-click on a suggestion or result row selects it; the wheel moves
    /// the highlight in the focused list.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.app_state.move_highlight(false);
                return;
            }
            MouseEventKind::ScrollDown => {
                self.app_state.move_highlight(true);
                return;
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return,
        }

        let Some(areas) = self.last_areas else {
            return;
        };

        if let Some(row) = areas
            .suggestions
            .and_then(|area| list_row_at(area, mouse.column, mouse.row))
        {
            self.app_state.select_suggestion(row);
            return;
        }

        if let Some(row) = list_row_at(areas.results, mouse.column, mouse.row) {
            let row = self.app_state.results_offset() + row;
            self.app_state.focus = FocusPane::Results;
            self.app_state.select_result(row);
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Calculate areas before rendering (for mouse click detection)
        let size = self.terminal.size()?;
        let frame_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
        let suggestion_count = self.app_state.viewer().view().suggestions.len();
        let areas = calculate_areas(frame_area, suggestion_count);
        // Inner rows between the top and bottom border.
        self.app_state
            .set_results_rows(usize::from(areas.results.height.saturating_sub(2)));
        self.last_areas = Some(areas);

        let app_state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, app_state, styles);
        })?;

        Ok(())
    }
}

/// Startup options that are not part of the resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Query applied once the catalog loads (`--search`).
    pub initial_query: Option<String>,
    pub colors: Option<ColorConfig>,
}

/// Initialize and run the TUI application.
///
/// Starts the catalog fetch, sets up the terminal, runs the event loop, and
/// restores the terminal on exit even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig, options: LaunchOptions) -> Result<(), TuiError> {
    info!(endpoint = %config.endpoint, page_size = config.page_size.get(), "Starting viewer");

    let transport = HttpTransport::new(config.request_timeout)?;
    let loader = CatalogLoader::spawn(transport, config.endpoint.clone())?;

    let app_state = AppState::new(config.page_size).with_initial_query(options.initial_query);
    let colors = options
        .colors
        .unwrap_or_else(|| ColorConfig::from_env_and_args(false));
    let styles = ViewerStyles::with_color_config(colors);

    let mut app = match TuiApp::new(app_state, loader, styles) {
        Ok(app) => app,
        Err(err) => {
            // Raw mode may already be on
            let _ = restore_terminal();
            return Err(err);
        }
    };

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
