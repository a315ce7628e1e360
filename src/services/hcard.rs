// src/services/hcard.rs

//! Representative h-card resolution.
//!
//! Picks the card a document nominates as canonically describing a URL:
//!
//! 1. a card whose `uid` and `url` both contain the URL
//! 2. a card with a `url` that is also a `rel=me` link
//! 3. the only card whose `url` contains the URL

use crate::models::{Document, H_CARD, Item};
use crate::services::traversal::find_all_entries;

/// Find the representative h-card for `url`, or `None` when the document
/// has no card for it or several equally plausible ones.
pub fn representative_hcard<'a>(document: &'a Document, url: &str) -> Option<&'a Item> {
    let hcards = find_all_entries(document, &[H_CARD], true);

    if let Some(card) = hcards
        .iter()
        .copied()
        .find(|card| card.property_contains("uid", url) && card.property_contains("url", url))
    {
        log::debug!("Representative h-card for {url}: uid and url match");
        return Some(card);
    }

    let rel_mes = document.rel("me");
    if let Some(card) = hcards.iter().copied().find(|card| {
        card.property("url")
            .iter()
            .filter_map(|value| value.plain_text())
            .any(|card_url| rel_mes.iter().any(|me| me == card_url))
    }) {
        log::debug!("Representative h-card for {url}: url matches rel=me");
        return Some(card);
    }

    let mut matching = hcards
        .into_iter()
        .filter(|card| card.property_contains("url", url));
    match (matching.next(), matching.next()) {
        (Some(card), None) => Some(card),
        (Some(_), Some(_)) => {
            log::debug!("Representative h-card for {url}: ambiguous url match");
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::H_FEED;

    fn doc_with_cards(nested: Item, top: Item) -> Document {
        Document {
            items: vec![Item::new([H_FEED]).with_property("prop1", nested), top],
            ..Document::default()
        }
    }

    #[test]
    fn test_uid_alone_is_not_enough() {
        let document = doc_with_cards(
            Item::new([H_CARD]).with_property("uid", "some_url"),
            Item::new([H_CARD]),
        );
        assert!(representative_hcard(&document, "some_url").is_none());
    }

    #[test]
    fn test_ambiguous_url_match() {
        let document = doc_with_cards(
            Item::new([H_CARD]).with_property("url", "some_url"),
            Item::new([H_CARD]).with_property("url", "some_url"),
        );
        assert!(representative_hcard(&document, "some_url").is_none());
    }

    #[test]
    fn test_uid_and_url_match() {
        let document = doc_with_cards(
            Item::new([H_CARD])
                .with_property("uid", "some_url")
                .with_property("url", "some_url"),
            Item::new([H_CARD]),
        );
        let card = representative_hcard(&document, "some_url").unwrap();
        assert_eq!(card.plain_text("uid"), Some("some_url"));
    }

    #[test]
    fn test_uid_and_url_match_wins_over_ambiguity() {
        let document = doc_with_cards(
            Item::new([H_CARD]).with_property("url", "some_url"),
            Item::new([H_CARD])
                .with_property("name", "Right")
                .with_property("uid", "some_url")
                .with_property("url", "some_url"),
        );
        let card = representative_hcard(&document, "some_url").unwrap();
        assert_eq!(card.plain_text("name"), Some("Right"));
    }

    #[test]
    fn test_uid_and_url_match_beats_earlier_rel_me() {
        // the top-level card is visited before the one nested in the feed
        let mut document = doc_with_cards(
            Item::new([H_CARD])
                .with_property("name", "Uid")
                .with_property("uid", "some_url")
                .with_property("url", "some_url"),
            Item::new([H_CARD])
                .with_property("name", "RelMe")
                .with_property("url", "me_url"),
        );
        document
            .rels
            .insert("me".to_string(), vec!["me_url".to_string()]);
        let card = representative_hcard(&document, "some_url").unwrap();
        assert_eq!(card.plain_text("name"), Some("Uid"));
    }

    #[test]
    fn test_rel_me_match() {
        let mut document = doc_with_cards(
            Item::new([H_CARD])
                .with_property("url", "stupid_url")
                .with_property("url", "some_url"),
            Item::new([H_CARD]),
        );
        document.rels.insert(
            "me".to_string(),
            vec!["another_url".to_string(), "some_url".to_string()],
        );
        let card = representative_hcard(&document, "some_url").unwrap();
        assert_eq!(card.property("url").len(), 2);
    }

    #[test]
    fn test_single_url_match() {
        let document = doc_with_cards(
            Item::new([H_CARD]).with_property("url", "some_url"),
            Item::new([H_CARD]).with_property("url", "another_url"),
        );
        let card = representative_hcard(&document, "some_url").unwrap();
        assert_eq!(card.plain_text("url"), Some("some_url"));
    }
}
