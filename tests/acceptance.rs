//! Acceptance scenarios for the card viewer, driven through the public API
//! the way the TUI drives it: a transport, a load, then viewer callbacks.

use cardex::model::{Card, CardId};
use cardex::source::{self, LoadingStatus, StaticTransport};
use cardex::state::{CardViewer, Selection};
use std::num::NonZeroUsize;

const CATALOG: &str = include_str!("fixtures/catalog.json");
const ENDPOINT: &str = "http://catalog.test/v2/cards";

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn viewer_over(transport: &StaticTransport, page_size: usize) -> CardViewer {
    let result = source::fetch_catalog(transport, ENDPOINT);
    CardViewer::with_catalog(size(page_size), result)
}

fn fixture_viewer() -> CardViewer {
    viewer_over(&StaticTransport::respond(200, CATALOG), 10)
}

fn ids(cards: &[&Card]) -> Vec<String> {
    cards.iter().map(|c| c.id.to_string()).collect()
}

#[test]
fn fixture_catalog_loads_all_cards_in_order() {
    let viewer = fixture_viewer();
    let view = viewer.view();

    assert_eq!(view.loading_status, LoadingStatus::Loaded);
    assert_eq!(
        ids(&view.filtered_cards),
        vec!["base1-4", "base1-580", "base1-58", "base1-46", "base1-16"]
    );
    assert_eq!(view.selected_card.map(|c| c.name.as_str()), Some("Charizard"));
}

#[test]
fn scenario_a_substring_query_selects_first_result() {
    let mut viewer = fixture_viewer();
    viewer.set_query("pika");

    let view = viewer.view();
    assert_eq!(ids(&view.filtered_cards), vec!["base1-58"]);
    assert_eq!(view.selected_card.map(|c| c.name.as_str()), Some("Pikachu"));
}

#[test]
fn scenario_b_exact_id_match_wins_over_first_result() {
    let mut viewer = fixture_viewer();
    viewer.set_query("base1-58");

    let view = viewer.view();
    // "base1-580" also contains the query and comes first in catalog order.
    assert_eq!(ids(&view.filtered_cards), vec!["base1-580", "base1-58"]);
    assert_eq!(view.selected_card.map(|c| c.id.as_str()), Some("base1-58"));
}

#[test]
fn scenario_c_no_match_clears_selection() {
    let mut viewer = fixture_viewer();
    viewer.set_query("zzz");

    let view = viewer.view();
    assert!(view.filtered_cards.is_empty());
    assert_eq!(view.selected_card, None);
    assert_eq!(viewer.selection(), &Selection::NoSelection);
    assert_eq!((view.current_page, view.total_pages), (1, 1));
}

#[test]
fn scenario_d_paging_stops_at_last_page() {
    let cards: Vec<Card> = (1..=7)
        .map(|n| Card::new(CardId::new(format!("neo1-{}", n)).unwrap(), format!("Card {}", n), "Neo"))
        .collect();
    let mut viewer = CardViewer::with_catalog(size(3), Ok(cards));

    assert_eq!(viewer.view().current_page, 1);
    assert_eq!(viewer.view().total_pages, 3);

    assert!(viewer.next_page());
    assert!(viewer.next_page());
    assert_eq!(viewer.view().current_page, 3);

    assert!(!viewer.next_page());
    assert_eq!(viewer.view().current_page, 3);
    assert_eq!(ids(viewer.view().page_cards()), vec!["neo1-7"]);
}

#[test]
fn scenario_e_http_500_fails_and_freezes() {
    let mut viewer = viewer_over(&StaticTransport::respond(500, "oops"), 10);

    let view = viewer.view();
    assert_eq!(view.loading_status, LoadingStatus::Failed);
    assert!(view.error_message.is_some_and(|m| m.contains("500")));
    assert!(view.filtered_cards.is_empty());

    let before = format!("{:?}", viewer.view());
    let pikachu = Card::new(CardId::new("base1-58").unwrap(), "Pikachu", "Base");
    assert!(!viewer.set_query("pika"));
    assert!(!viewer.select_card(&pikachu));
    assert!(!viewer.select_suggestion(&pikachu));
    assert!(!viewer.next_page());
    assert!(!viewer.prev_page());
    assert_eq!(format!("{:?}", viewer.view()), before);
}

#[test]
fn malformed_payload_fails_with_parse_message() {
    let viewer = viewer_over(&StaticTransport::respond(200, r#"{"cards": []}"#), 10);
    let view = viewer.view();

    assert_eq!(view.loading_status, LoadingStatus::Failed);
    assert!(view
        .error_message
        .is_some_and(|m| m.starts_with("Invalid catalog payload")));
}

#[test]
fn suggestion_click_then_edit_flow() {
    let mut viewer = fixture_viewer();
    viewer.set_query("char");

    let suggested: Vec<String> = viewer
        .view()
        .suggestions
        .iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(suggested, vec!["Charizard", "Charmander"]);

    let charmander = viewer.view().suggestions[1].clone();
    viewer.select_suggestion(&charmander);

    let view = viewer.view();
    assert_eq!(viewer.query(), "Charmander");
    assert!(view.suggestions.is_empty());
    assert_eq!(view.selected_card.map(|c| c.id.as_str()), Some("base1-46"));

    // Optional fields survive the round trip through the payload.
    let card = view.selected_card.unwrap();
    assert_eq!(card.rarity, None);
    assert_eq!(card.attacks.as_ref().map(Vec::len), Some(2));
}
