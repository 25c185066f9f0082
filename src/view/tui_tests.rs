//! Tests for the TUI shell: key routing, mouse hit testing, rendering.

use super::*;
use crate::model::{Card, CardId};
use crate::source::StaticTransport;
use ratatui::backend::TestBackend;
use std::num::NonZeroUsize;
use std::time::Instant;

fn cards() -> Vec<Card> {
    vec![
        Card::new(CardId::new("base1-4").unwrap(), "Charizard", "Base"),
        Card::new(CardId::new("base1-5").unwrap(), "Charmeleon", "Base"),
        Card::new(CardId::new("base1-58").unwrap(), "Pikachu", "Base"),
        Card::new(CardId::new("base1-46").unwrap(), "Charmander", "Base"),
        Card::new(CardId::new("base1-16").unwrap(), "Zapdos", "Base"),
    ]
}

fn monochrome() -> ViewerStyles {
    ViewerStyles::with_color_config(ColorConfig::new(false))
}

fn create_test_app(state: AppState) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    TuiApp::with_terminal(terminal, state, None, KeyBindings::default(), monochrome())
}

fn loaded_app() -> TuiApp<TestBackend> {
    let mut state = AppState::new(NonZeroUsize::new(3).unwrap());
    state.apply_catalog(Ok(cards()));
    create_test_app(state)
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn click(app: &mut TuiApp<TestBackend>, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.draw().unwrap();
    buffer_to_string(app.terminal.backend().buffer())
}

/// Text of the inner rows of `area`, trailing blanks trimmed.
fn inner_rows(app: &TuiApp<TestBackend>, area: ratatui::layout::Rect) -> Vec<String> {
    let buffer = app.terminal.backend().buffer();
    (area.y + 1..area.bottom().saturating_sub(1))
        .map(|y| {
            let row: String = (area.x + 1..area.right().saturating_sub(1))
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}

fn pidgey_app() -> TuiApp<TestBackend> {
    let cards = (0..12)
        .map(|n| {
            Card::new(
                CardId::new(format!("base1-{}", 100 + n)).unwrap(),
                format!("Pidgey {}", n),
                "Base",
            )
        })
        .collect();
    let mut state = AppState::new(NonZeroUsize::new(10).unwrap());
    state.apply_catalog(Ok(cards));
    create_test_app(state)
}

fn selected_name(app: &TuiApp<TestBackend>) -> Option<String> {
    app.app_state
        .viewer()
        .view()
        .selected_card
        .map(|c| c.name.clone())
}

// ===== Errors =====

#[test]
fn tui_error_from_network_error() {
    let tui_err: TuiError = NetworkError::Transport("no TLS backend".to_string()).into();
    assert!(matches!(tui_err, TuiError::Client(_)));
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

// ===== Keys =====

#[test]
fn ctrl_c_quits_even_while_typing() {
    let mut app = loaded_app();
    assert_eq!(app.app_state.focus, FocusPane::Search);

    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(key));
}

#[test]
fn q_is_typed_in_search_bar_not_quit() {
    let mut app = loaded_app();
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.app_state.viewer().query(), "q");
}

#[test]
fn q_quits_outside_search_bar() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.app_state.focus, FocusPane::Results);
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn typing_and_editing_update_query() {
    let mut app = loaded_app();
    type_text(&mut app, "pikx");
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "a");

    assert_eq!(app.app_state.viewer().query(), "pika");
    assert_eq!(selected_name(&app), Some("Pikachu".to_string()));
}

#[test]
fn cursor_keys_move_insertion_point() {
    let mut app = loaded_app();
    type_text(&mut app, "zpdos");
    for _ in 0..4 {
        press(&mut app, KeyCode::Left);
    }
    type_text(&mut app, "a");

    assert_eq!(app.app_state.viewer().query(), "zapdos");
}

#[test]
fn ctrl_u_clears_query() {
    let mut app = loaded_app();
    type_text(&mut app, "char");
    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));

    assert_eq!(app.app_state.viewer().query(), "");
    assert_eq!(app.app_state.cursor(), 0);
}

#[test]
fn slash_refocuses_search() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.app_state.focus, FocusPane::Search);
}

#[test]
fn j_and_enter_select_from_results() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(selected_name(&app), Some("Charmeleon".to_string()));
}

#[test]
fn paging_keys_work_from_search_bar() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.app_state.viewer().page(), 2);

    app.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
    assert_eq!(app.app_state.viewer().page(), 1);
}

#[test]
fn bracket_keys_page_outside_search_bar() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.app_state.viewer().page(), 2);
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.app_state.viewer().page(), 1);
}

#[test]
fn keys_before_load_do_not_quit_or_type() {
    let mut app = create_test_app(AppState::new(NonZeroUsize::new(3).unwrap()));
    type_text(&mut app, "pika");
    assert_eq!(app.app_state.viewer().query(), "");
}

// ===== Mouse =====

#[test]
fn click_on_result_row_selects_card() {
    let mut app = loaded_app();
    app.draw().unwrap();

    // Results pane starts at y=4 without suggestions; row 0 is at y=5.
    click(&mut app, 5, 7);

    assert_eq!(selected_name(&app), Some("Pikachu".to_string()));
    assert_eq!(app.app_state.focus, FocusPane::Results);
}

#[test]
fn click_on_suggestion_fills_query() {
    let mut app = loaded_app();
    type_text(&mut app, "char");
    app.draw().unwrap();

    // Suggestions pane sits under the search bar at y=4; second row at y=6.
    click(&mut app, 5, 6);

    assert_eq!(app.app_state.viewer().query(), "Charmeleon");
    assert_eq!(selected_name(&app), Some("Charmeleon".to_string()));
    assert!(app.app_state.viewer().view().suggestions.is_empty());
}

#[test]
fn click_on_border_is_ignored() {
    let mut app = loaded_app();
    app.draw().unwrap();
    click(&mut app, 5, 4);
    assert_eq!(selected_name(&app), Some("Charizard".to_string()));
}

#[test]
fn results_scroll_to_keep_highlight_on_screen() {
    let mut app = pidgey_app();
    type_text(&mut app, "pid");
    screen(&mut app);

    // Ten suggestions leave four result rows on an 80x24 screen.
    let results = app.last_areas.unwrap().results;
    assert_eq!(inner_rows(&app, results).len(), 4);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.app_state.focus, FocusPane::Results);
    for _ in 0..9 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    screen(&mut app);

    assert_eq!(selected_name(&app), Some("Pidgey 9".to_string()));
    assert_eq!(
        inner_rows(&app, results),
        vec![
            "  Pidgey 6 - Base".to_string(),
            "  Pidgey 7 - Base".to_string(),
            "  Pidgey 8 - Base".to_string(),
            "> Pidgey 9 - Base".to_string(),
        ]
    );
}

#[test]
fn click_on_scrolled_results_selects_visible_card() {
    let mut app = pidgey_app();
    type_text(&mut app, "pid");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    for _ in 0..9 {
        press(&mut app, KeyCode::Down);
    }
    screen(&mut app);

    let results = app.last_areas.unwrap().results;
    click(&mut app, results.x + 2, results.y + 1);

    assert_eq!(selected_name(&app), Some("Pidgey 6".to_string()));
}

#[test]
fn paging_scrolls_results_back_to_top() {
    let mut app = pidgey_app();
    type_text(&mut app, "pid");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    for _ in 0..9 {
        press(&mut app, KeyCode::Down);
    }
    screen(&mut app);
    press(&mut app, KeyCode::Char(']'));
    screen(&mut app);

    let results = app.last_areas.unwrap().results;
    let rows = inner_rows(&app, results);
    assert_eq!(rows[0], "  Pidgey 10 - Base");
    assert_eq!(rows[1], "  Pidgey 11 - Base");
}

// ===== Catalog polling =====

#[test]
fn poll_catalog_applies_result_once() {
    let transport = StaticTransport::respond(
        200,
        r#"{"data": [{"id": "base1-58", "name": "Pikachu", "set": {"name": "Base"}}]}"#,
    );
    let loader = CatalogLoader::spawn(transport, "http://catalog.test/v2/cards").unwrap();
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = TuiApp::with_terminal(
        terminal,
        AppState::new(NonZeroUsize::new(3).unwrap()),
        Some(loader),
        KeyBindings::default(),
        monochrome(),
    );

    let deadline = Instant::now() + Duration::from_secs(5);
    while !app.poll_catalog() {
        assert!(Instant::now() < deadline, "Catalog never arrived");
        std::thread::sleep(Duration::from_millis(5));
    }

    assert!(app.loader.is_none());
    assert!(!app.poll_catalog());
    assert_eq!(selected_name(&app), Some("Pikachu".to_string()));
}

// ===== Rendering =====

#[test]
fn loading_screen_shows_loading_text() {
    let mut app = create_test_app(AppState::new(NonZeroUsize::new(3).unwrap()));
    let screen = screen(&mut app);

    assert!(screen.contains(HEADER_TEXT));
    assert!(screen.contains("Loading cards..."));
    assert!(screen.contains(FOOTER_TEXT));
}

#[test]
fn loaded_screen_shows_results_detail_and_status() {
    let mut app = loaded_app();
    let screen = screen(&mut app);

    assert!(screen.contains("> Charizard - Base"));
    assert!(screen.contains("Charmeleon - Base"));
    assert!(!screen.contains("Zapdos - Base"), "Zapdos is on page 2");
    assert!(screen.contains("base1-4"));
    assert!(screen.contains("Page 1/2 · 5 cards"));
}

#[test]
fn failed_screen_shows_error() {
    let mut state = AppState::new(NonZeroUsize::new(3).unwrap());
    state.apply_catalog(Err(NetworkError::Status(500).into()));
    let mut app = create_test_app(state);

    let screen = screen(&mut app);
    assert!(screen.contains("Failed to load cards: HTTP error! status: 500"));
}
