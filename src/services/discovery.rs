// src/services/discovery.rs

//! Post-type and response-type discovery
//! (<https://www.w3.org/TR/post-type-discovery/>).

use crate::models::{H_EVENT, Item, PostType, ResponseType};
use crate::utils::{is_name_a_title, is_uri};

const RSVP_VALUES: [&str; 4] = ["yes", "no", "maybe", "interested"];

/// Properties that imply a response, in precedence order.
const RESPONSE_PROPERTIES: [(&str, ResponseType, PostType); 4] = [
    ("repost-of", ResponseType::Repost, PostType::Repost),
    ("like-of", ResponseType::Like, PostType::Like),
    ("bookmark-of", ResponseType::Bookmark, PostType::Bookmark),
    ("in-reply-to", ResponseType::Reply, PostType::Reply),
];

/// Properties that imply a media kind, checked after responses.
const MEDIA_PROPERTIES: [(&str, PostType); 2] =
    [("video", PostType::Video), ("photo", PostType::Photo)];

fn is_rsvp(item: &Item) -> bool {
    item.property("rsvp")
        .iter()
        .filter_map(|value| value.plain_text())
        .any(|value| RSVP_VALUES.contains(&value))
}

/// Property is present and its first plain-text value is a URI.
fn has_uri_property(item: &Item, name: &str) -> bool {
    item.plain_text(name).is_some_and(is_uri)
}

/// The response an item makes, as both classifications.
fn implied_response(item: &Item) -> Option<(ResponseType, PostType)> {
    if is_rsvp(item) {
        return Some((ResponseType::Rsvp, PostType::Rsvp));
    }
    RESPONSE_PROPERTIES
        .iter()
        .find(|(name, _, _)| has_uri_property(item, name))
        .map(|(_, response, post)| (*response, *post))
}

/// Classify an item as event, rsvp, repost, like, bookmark, reply, video,
/// photo, article, or note.
pub fn post_type_discovery(item: &Item) -> PostType {
    if item.has_type(H_EVENT) {
        return PostType::Event;
    }
    if let Some((_, kind)) = implied_response(item) {
        return kind;
    }
    if let Some((_, kind)) = MEDIA_PROPERTIES
        .iter()
        .find(|(name, _)| has_uri_property(item, name))
    {
        return *kind;
    }

    let name = item.plain_text("name");
    let content = item
        .plain_text("content")
        .or_else(|| item.plain_text("summary"));
    match (name, content) {
        (Some(_), Some(_)) if is_name_a_title(name, content) => PostType::Article,
        _ => PostType::Note,
    }
}

/// Classify a response as rsvp, repost, like, bookmark, reply, or mention.
pub fn response_type_discovery(item: &Item) -> ResponseType {
    implied_response(item).map_or(ResponseType::Mention, |(kind, _)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{H_CITE, H_ENTRY};

    fn entry() -> Item {
        Item::new([H_ENTRY])
    }

    #[test]
    fn test_event_wins_over_everything() {
        let item = Item::new([H_ENTRY, H_EVENT])
            .with_property("rsvp", "yes")
            .with_property("like-of", "https://example.com");
        assert_eq!(post_type_discovery(&item), PostType::Event);
    }

    #[test]
    fn test_rsvp_values() {
        for value in ["yes", "no", "maybe", "interested"] {
            let item = entry().with_property("rsvp", value);
            assert_eq!(post_type_discovery(&item), PostType::Rsvp);
            assert_eq!(response_type_discovery(&item), ResponseType::Rsvp);
        }
        let item = entry().with_property("rsvp", "whatever");
        assert_ne!(post_type_discovery(&item), PostType::Rsvp);
    }

    #[test]
    fn test_implied_responses() {
        let cases = [
            ("repost-of", PostType::Repost),
            ("like-of", PostType::Like),
            ("bookmark-of", PostType::Bookmark),
            ("in-reply-to", PostType::Reply),
            ("video", PostType::Video),
            ("photo", PostType::Photo),
        ];
        for (property, expected) in cases {
            let item = entry().with_property(property, "https://example.com/x");
            assert_eq!(post_type_discovery(&item), expected, "{property}");
        }
    }

    #[test]
    fn test_precedence_repost_before_reply() {
        let item = entry()
            .with_property("in-reply-to", "https://example.com/a")
            .with_property("repost-of", "https://example.com/b");
        assert_eq!(post_type_discovery(&item), PostType::Repost);
    }

    #[test]
    fn test_non_uri_property_is_ignored() {
        let item = entry()
            .with_property("like-of", "not a uri")
            .with_property("content", "hello");
        assert_eq!(post_type_discovery(&item), PostType::Note);
    }

    #[test]
    fn test_nested_cite_value_counts_as_uri() {
        let mut cite = Item::new([H_CITE]);
        cite.value = Some("https://example.com/original".to_string());
        let item = entry().with_property("in-reply-to", cite);
        assert_eq!(post_type_discovery(&item), PostType::Reply);
        assert_eq!(response_type_discovery(&item), ResponseType::Reply);
    }

    #[test]
    fn test_article() {
        let item = entry()
            .with_property("name", "this is the title")
            .with_property("content", "this is an awesome article");
        assert_eq!(post_type_discovery(&item), PostType::Article);
    }

    #[test]
    fn test_article_against_summary() {
        let item = entry()
            .with_property("name", "this is the title")
            .with_property("summary", "a short summary");
        assert_eq!(post_type_discovery(&item), PostType::Article);
    }

    #[test]
    fn test_note_without_title() {
        let item = entry().with_property("content", "this is an awesome note");
        assert_eq!(post_type_discovery(&item), PostType::Note);
    }

    #[test]
    fn test_note_when_name_echoes_content() {
        let item = entry()
            .with_property("name", "this is an awesome note")
            .with_property("content", "this is an awesome note");
        assert_eq!(post_type_discovery(&item), PostType::Note);

        let item = entry()
            .with_property("name", "This is an awesome note!")
            .with_property("content", "this is an awesome note");
        assert_eq!(post_type_discovery(&item), PostType::Note);
    }

    #[test]
    fn test_mention_default() {
        let item = entry().with_property("photo", "https://example.com/p.jpg");
        assert_eq!(response_type_discovery(&item), ResponseType::Mention);
    }
}
