use tracing::warn;

use crate::core::{document::Node, errors::AppResult};

pub const ENGLISH: &str = "en";
pub const MISSING_TEXT: &str = "No English text available.";

/// Picks the text of the first English entry in a list of locale-tagged entries.
///
/// Each entry is shaped `{ <text_key>: "...", "language": { "name": "<tag>" } }`.
/// Without an English entry the first entry of any locale is used; an empty list
/// yields [`MISSING_TEXT`].
pub fn english_text(entries: &[Node<'_>], text_key: &str) -> AppResult<String> {
    let english = entries
        .iter()
        .find(|entry| matches!(entry.str_field("language.name"), Ok(tag) if tag == ENGLISH));

    let chosen = match english.or_else(|| entries.first()) {
        Some(entry) => entry,
        None => {
            warn!(field = text_key, "no localized entries, using placeholder text");
            return Ok(MISSING_TEXT.to_string());
        }
    };
    if english.is_none() {
        warn!(
            field = text_key,
            locale = chosen.str_field("language.name").unwrap_or("unknown"),
            "no english entry, falling back to first locale"
        );
    }

    Ok(flatten_line_breaks(chosen.str_field(text_key)?))
}

pub fn flatten_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r', '\u{c}'], " ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::document::Document;

    fn entries_doc(entries: serde_json::Value) -> Document {
        Document::from_value(json!({ "flavor_text_entries": entries })).expect("object")
    }

    #[test]
    fn picks_first_english_entry_and_flattens() {
        let doc = entries_doc(json!([
            {"flavor_text": "Une attaque.", "language": {"name": "fr"}},
            {"flavor_text": "a\nb", "language": {"name": "en"}},
            {"flavor_text": "later", "language": {"name": "en"}}
        ]));
        let entries = doc.root().items("flavor_text_entries").unwrap();
        assert_eq!(english_text(&entries, "flavor_text").unwrap(), "a b");
    }

    #[test]
    fn falls_back_to_first_locale_then_placeholder() {
        let doc = entries_doc(json!([
            {"flavor_text": "Eine\u{c}Attacke.", "language": {"name": "de"}}
        ]));
        let entries = doc.root().items("flavor_text_entries").unwrap();
        assert_eq!(english_text(&entries, "flavor_text").unwrap(), "Eine Attacke.");

        assert_eq!(english_text(&[], "flavor_text").unwrap(), MISSING_TEXT);
    }

    #[test]
    fn windows_line_endings_become_one_space() {
        assert_eq!(flatten_line_breaks("x\r\ny\nz"), "x y z");
    }
}
