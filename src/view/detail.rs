//! Detail panel for the selected card.

use crate::model::{Attack, Card};
use crate::view::styles::ViewerStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Rendered for any field the card does not carry.
pub const MISSING: &str = "—";

const NO_SELECTION_TEXT: &str = "No card selected";

/// Label/value rows for a card, in display order.
pub fn detail_rows(card: &Card) -> Vec<(&'static str, String)> {
    vec![
        ("ID", card.id.to_string()),
        ("Name", card.name.clone()),
        ("Set", card.set.name.clone()),
        ("Rarity", or_missing(card.rarity.clone())),
        (
            "Types",
            or_missing(
                card.types
                    .as_ref()
                    .filter(|types| !types.is_empty())
                    .map(|types| types.join(", ")),
            ),
        ),
        (
            "HP",
            or_missing(card.hp.as_ref().filter(|hp| !hp.is_blank()).map(|hp| hp.to_string())),
        ),
        (
            "Attacks",
            or_missing(
                card.attacks
                    .as_ref()
                    .filter(|attacks| !attacks.is_empty())
                    .map(|attacks| attacks.iter().map(attack_label).collect::<Vec<_>>().join("; ")),
            ),
        ),
        ("Image", or_missing(card.small_image().map(str::to_string))),
    ]
}

fn or_missing(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `"Thunder Jolt (30)"`, or just the name for attacks without damage.
fn attack_label(attack: &Attack) -> String {
    match &attack.damage {
        Some(damage) if !damage.is_blank() => format!("{} ({})", attack.name, damage),
        _ => attack.name.clone(),
    }
}

pub struct CardDetail<'a> {
    card: Option<&'a Card>,
    styles: &'a ViewerStyles,
}

impl<'a> CardDetail<'a> {
    pub fn new(card: Option<&'a Card>, styles: &'a ViewerStyles) -> Self {
        Self { card, styles }
    }
}

impl Widget for CardDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Card")
            .border_style(self.styles.border);

        let lines: Vec<Line> = match self.card {
            Some(card) => detail_rows(card)
                .into_iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{:<8}", label), self.styles.label),
                        Span::raw(value),
                    ])
                })
                .collect(),
            None => vec![Line::from(Span::styled(NO_SELECTION_TEXT, self.styles.muted))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardId, CardImages, StatValue};

    fn render_rows(card: &Card) -> String {
        detail_rows(card)
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn full_card_renders_every_field() {
        let mut card = Card::new(CardId::new("base1-58").unwrap(), "Pikachu", "Base");
        card.rarity = Some("Common".to_string());
        card.types = Some(vec!["Lightning".to_string()]);
        card.hp = Some(StatValue::Text("40".to_string()));
        card.attacks = Some(vec![
            Attack {
                name: "Gnaw".to_string(),
                damage: Some(StatValue::Text("10".to_string())),
            },
            Attack {
                name: "Thunder Jolt".to_string(),
                damage: Some(StatValue::Number(30)),
            },
        ]);
        card.images = Some(CardImages {
            small: Some("https://images.pokemontcg.io/base1/58.png".to_string()),
            large: None,
        });

        insta::assert_snapshot!(render_rows(&card), @r"
        ID: base1-58
        Name: Pikachu
        Set: Base
        Rarity: Common
        Types: Lightning
        HP: 40
        Attacks: Gnaw (10); Thunder Jolt (30)
        Image: https://images.pokemontcg.io/base1/58.png
        ");
    }

    #[test]
    fn missing_fields_render_placeholder() {
        let mut card = Card::new(CardId::new("xy7-54").unwrap(), "Shaymin", "Ancient Origins");
        card.types = Some(Vec::new());
        card.hp = Some(StatValue::Text(String::new()));
        card.attacks = Some(vec![Attack {
            name: "Leech Seed".to_string(),
            damage: Some(StatValue::Text(String::new())),
        }]);

        insta::assert_snapshot!(render_rows(&card), @r"
        ID: xy7-54
        Name: Shaymin
        Set: Ancient Origins
        Rarity: —
        Types: —
        HP: —
        Attacks: Leech Seed
        Image: —
        ");
    }
}
