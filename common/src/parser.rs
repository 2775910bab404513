//! Ingredient grammar parser
//!
//! Recipe sources annotate their required ingredients with the pattern
//! `#[Text|Schlüssel, ...]`. Each occurrence is one requirement slot whose
//! comma-separated alternatives are interchangeable; the optional `|` part
//! separates the display text from the matching key. The parser replaces
//! every occurrence with its display texts joined by a connector word, so
//! downstream rendering never sees the raw grammar.

use crate::types::{AlternativeGroup, IngredientAlternative, ParsedRecipe};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // #[Möhren|Möhre,Äpfel|Apfel]
    static ref GROUP_RE: Regex = Regex::new(r"#\[([^\]]+)\]").unwrap();
}

/// Connector word placed between display texts.
pub const DEFAULT_CONNECTOR: &str = "oder";

/// Extracts all ingredient groups from a recipe source.
///
/// Returns the cleaned text and the groups in document order. Malformed
/// occurrences (unterminated bracket, empty payload) are left as literal
/// text and contribute no group. Pure function, no I/O.
pub fn parse_recipe(source: &str, connector: &str) -> ParsedRecipe {
    let mut groups: Vec<AlternativeGroup> = Vec::new();
    let mut text = String::with_capacity(source.len());
    let mut last = 0;

    for caps in GROUP_RE.captures_iter(source) {
        let (occurrence, payload) = match (caps.get(0), caps.get(1)) {
            (Some(occurrence), Some(payload)) => (occurrence, payload),
            _ => continue,
        };

        let group = parse_group(payload.as_str());
        if group.is_empty() {
            // Nothing usable between the brackets: treated like a malformed
            // bracket, the occurrence stays literal.
            continue;
        }

        text.push_str(&source[last..occurrence.start()]);
        text.push_str(&join_display(&group, connector));
        last = occurrence.end();
        groups.push(group);
    }
    text.push_str(&source[last..]);

    ParsedRecipe { text, groups }
}

/// Splits one bracket payload into alternatives. Alternatives without a
/// display text are dropped; a missing or empty key falls back to the
/// display text.
fn parse_group(payload: &str) -> AlternativeGroup {
    let mut group = Vec::new();
    for part in payload.split(',') {
        let mut halves = part.splitn(2, '|');
        let text = halves.next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let key = match halves.next().map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => text,
        };
        group.push(IngredientAlternative {
            text: text.to_string(),
            key: key.to_string(),
        });
    }
    group
}

fn join_display(group: &[IngredientAlternative], connector: &str) -> String {
    let texts: Vec<&str> = group.iter().map(|a| a.text.as_str()).collect();
    texts.join(&format!(" {} ", connector))
}
