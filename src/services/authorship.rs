// src/services/authorship.rs

//! Authorship discovery (<https://indieweb.org/authorship>).
//!
//! Resolution order:
//!
//! 1. the entry's own `author` property
//! 2. the `author` property of the h-feed that structurally contains it
//! 3. the document's `rel=author` link, as an author page
//!
//! A bare URL from steps 1-2 is also treated as an author page. With a
//! fetcher available the author page is retrieved and searched for a card
//! that authoritatively represents it; without one the URL alone is
//! returned.

use std::ptr;

use crate::error::Result;
use crate::fetch::DocumentFetcher;
use crate::models::{AuthorInfo, Document, H_CARD, H_ENTRY, H_FEED, Item, PropertyValue};
use crate::services::traversal::{Entries, find_all_entries, find_first_entry};
use crate::utils::url_equal;

/// Interpret one `author` value: an embedded card, a URL, or a name.
///
/// Returns `None` when the value yields nothing usable.
pub fn parse_author(value: &PropertyValue) -> Option<AuthorInfo> {
    let author = match value {
        PropertyValue::Item(card) => author_from_card(card),
        PropertyValue::Text(text) => author_from_scalar(text),
        PropertyValue::Rendered(rendered) => author_from_scalar(&rendered.value),
    };
    (!author.is_empty()).then_some(author)
}

fn author_from_card(card: &Item) -> AuthorInfo {
    AuthorInfo {
        name: card.plain_text("name").map(str::to_string),
        photo: card.plain_text("photo").map(str::to_string),
        url: card.plain_text("url").map(str::to_string),
    }
}

fn author_from_scalar(text: &str) -> AuthorInfo {
    if text.is_empty() {
        AuthorInfo::default()
    } else if text.starts_with("http://") || text.starts_with("https://") {
        AuthorInfo::from_url(text)
    } else {
        AuthorInfo::from_name(text)
    }
}

fn item_author(item: &Item) -> Option<AuthorInfo> {
    item.property("author").first().and_then(parse_author)
}

/// Author of the h-feed whose children include `entry`.
fn parent_feed_author(document: &Document, entry: &Item) -> Option<AuthorInfo> {
    Entries::new(document, &[H_FEED], false)
        .find(|feed| feed.children.iter().any(|child| ptr::eq(child, entry)))
        .and_then(item_author)
}

/// Determine an entry's author.
///
/// `entry` defaults to the first h-entry of the document. The fetcher is
/// called at most once, and its errors are returned as-is.
pub async fn find_author(
    document: &Document,
    entry: Option<&Item>,
    fetcher: Option<&dyn DocumentFetcher>,
) -> Result<Option<AuthorInfo>> {
    let Some(entry) = entry.or_else(|| find_first_entry(document, &[H_ENTRY])) else {
        return Ok(None);
    };

    let author_page = match item_author(entry).or_else(|| parent_feed_author(document, entry)) {
        Some(author) => match author.url_only() {
            Some(url) => url.to_string(),
            None => return Ok(Some(author)),
        },
        None => match document.rel("author").first() {
            Some(url) => url.clone(),
            None => return Ok(None),
        },
    };

    let Some(fetcher) = fetcher else {
        return Ok(Some(AuthorInfo::from_url(author_page)));
    };

    log::debug!("Resolving author page {author_page}");
    let page = fetcher.fetch(&author_page).await?;
    Ok(author_from_page(&page, &author_page))
}

/// Pick the card on a fetched author page that represents the author.
fn author_from_page(page: &Document, author_page: &str) -> Option<AuthorInfo> {
    let hcards = find_all_entries(page, &[H_CARD], true);

    // url == uid == author page
    let by_uid = hcards.iter().find(|card| {
        match (card.plain_text("url"), card.plain_text("uid")) {
            (Some(url), Some(uid)) => url == uid && url_equal(url, author_page),
            _ => false,
        }
    });
    if let Some(card) = by_uid {
        log::debug!("Author card for {author_page}: url and uid match");
        return Some(author_from_card(card));
    }

    let rel_mes = page.rel("me");
    let by_rel_me = hcards.iter().find(|card| {
        card.plain_text("url")
            .is_some_and(|url| rel_mes.iter().any(|me| me == url))
    });
    if let Some(card) = by_rel_me {
        log::debug!("Author card for {author_page}: url matches rel=me");
        return Some(author_from_card(card));
    }

    let by_url = hcards.iter().find(|card| {
        card.plain_text("url")
            .is_some_and(|url| url_equal(url, author_page))
    });
    if let Some(card) = by_url {
        log::debug!("Author card for {author_page}: url matches author page");
        return Some(author_from_card(card));
    }

    log::debug!("No deterministic author card on {author_page}");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::fetch::MemoryFetcher;
    use crate::models::RenderedText;

    fn card(name: &str, photo: &str, url: &str) -> Item {
        Item::new([H_CARD])
            .with_property("name", name)
            .with_property("photo", photo)
            .with_property("url", url)
    }

    fn single_entry(entry: Item) -> Document {
        Document {
            items: vec![entry],
            ..Document::default()
        }
    }

    fn author_page_entry() -> Document {
        single_entry(Item::new([H_ENTRY]).with_property("author", "https://author_page"))
    }

    fn with_rel(mut document: Document, rel: &str, urls: &[&str]) -> Document {
        document.rels.insert(
            rel.to_string(),
            urls.iter().map(|u| u.to_string()).collect(),
        );
        document
    }

    #[test]
    fn test_parse_author_variants() {
        assert_eq!(
            parse_author(&"https://a.example".into()),
            Some(AuthorInfo::from_url("https://a.example"))
        );
        assert_eq!(parse_author(&"Ann".into()), Some(AuthorInfo::from_name("Ann")));
        assert_eq!(parse_author(&"".into()), None);
        assert_eq!(
            parse_author(&PropertyValue::Rendered(RenderedText {
                html: None,
                value: "Ann".to_string()
            })),
            Some(AuthorInfo::from_name("Ann"))
        );
        assert_eq!(parse_author(&Item::new([H_CARD]).into()), None);
    }

    #[tokio::test]
    async fn test_author_card_property() {
        let document = single_entry(Item::new([H_ENTRY]).with_property(
            "author",
            card("Desmond", "https://photo_url", "https://some_url"),
        ));
        let author = find_author(&document, None, None).await.unwrap().unwrap();
        assert_eq!(author.name.as_deref(), Some("Desmond"));
        assert_eq!(author.photo.as_deref(), Some("https://photo_url"));
        assert_eq!(author.url.as_deref(), Some("https://some_url"));
    }

    #[tokio::test]
    async fn test_author_card_with_only_url() {
        let card = Item::new([H_CARD]).with_property("url", "https://some_url");
        let document = single_entry(Item::new([H_ENTRY]).with_property("author", card));
        let author = find_author(&document, None, None).await.unwrap().unwrap();
        assert_eq!(author, AuthorInfo::from_url("https://some_url"));
    }

    #[tokio::test]
    async fn test_scalar_author_url_and_name() {
        let document =
            single_entry(Item::new([H_ENTRY]).with_property("author", "https://some_url"));
        let author = find_author(&document, None, None).await.unwrap().unwrap();
        assert_eq!(author, AuthorInfo::from_url("https://some_url"));

        let document = single_entry(Item::new([H_ENTRY]).with_property("author", "Desmond"));
        let author = find_author(&document, None, None).await.unwrap().unwrap();
        assert_eq!(author, AuthorInfo::from_name("Desmond"));
    }

    #[tokio::test]
    async fn test_parent_feed_author() {
        let document = single_entry(
            Item::new([H_FEED])
                .with_property(
                    "author",
                    card("Desmond", "https://photo_url", "https://some_url"),
                )
                .with_child(Item::new([H_ENTRY])),
        );
        let entry = &document.items[0].children[0];
        let author = find_author(&document, Some(entry), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.name.as_deref(), Some("Desmond"));
    }

    #[tokio::test]
    async fn test_rel_author_page() {
        let document = with_rel(
            single_entry(Item::new([H_ENTRY])),
            "author",
            &["https://author_page"],
        );
        let author = find_author(&document, None, None).await.unwrap().unwrap();
        assert_eq!(author, AuthorInfo::from_url("https://author_page"));
    }

    #[tokio::test]
    async fn test_no_author() {
        let document = single_entry(Item::new([H_ENTRY]));
        assert!(find_author(&document, None, None).await.unwrap().is_none());

        let empty = Document::default();
        assert!(find_author(&empty, None, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_author_page_uid_equals_url() {
        let document = with_rel(
            single_entry(Item::new([H_ENTRY])),
            "author",
            &["https://author_page"],
        );
        let page = single_entry(
            Item::new([H_FEED])
                .with_child(card("Other", "https://other_photo", "https://other"))
                .with_child(
                    card("Desmond", "https://photo_url", "https://author_page/")
                        .with_property("uid", "https://author_page/"),
                ),
        );
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.name.as_deref(), Some("Desmond"));
        assert_eq!(author.url.as_deref(), Some("https://author_page/"));
    }

    #[tokio::test]
    async fn test_author_page_rel_me() {
        let document = author_page_entry();
        let page = with_rel(
            Document {
                items: vec![
                    card("Nobody", "https://x", "https://unrelated"),
                    card("Desmond", "https://photo_url", "https://some_url"),
                ],
                ..Document::default()
            },
            "me",
            &["https://some_url"],
        );
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.url.as_deref(), Some("https://some_url"));
        assert_eq!(author.name.as_deref(), Some("Desmond"));
    }

    #[tokio::test]
    async fn test_author_page_uid_match_beats_earlier_rel_me() {
        let document = author_page_entry();
        let page = with_rel(
            Document {
                items: vec![
                    card("RelMe", "https://x", "https://me.example"),
                    card("Uid", "https://photo_url", "https://author_page")
                        .with_property("uid", "https://author_page"),
                ],
                ..Document::default()
            },
            "me",
            &["https://me.example"],
        );
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.name.as_deref(), Some("Uid"));
    }

    #[tokio::test]
    async fn test_author_page_rel_me_beats_earlier_url_match() {
        let document = author_page_entry();
        let page = with_rel(
            Document {
                items: vec![
                    card("ByUrl", "https://x", "https://author_page"),
                    card("RelMe", "https://photo_url", "https://me.example"),
                ],
                ..Document::default()
            },
            "me",
            &["https://me.example"],
        );
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.name.as_deref(), Some("RelMe"));
    }

    #[tokio::test]
    async fn test_author_page_url_match() {
        let document = author_page_entry();
        let page = single_entry(Item::new([H_ENTRY]).with_property(
            "author",
            card("Desmond", "https://photo_url", "https://author_page"),
        ));
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(author.url.as_deref(), Some("https://author_page"));
        assert_eq!(author.photo.as_deref(), Some("https://photo_url"));
    }

    #[tokio::test]
    async fn test_author_page_without_matching_card() {
        let document = author_page_entry();
        let page = single_entry(card("Desmond", "https://photo_url", "https://elsewhere"));
        let fetcher = MemoryFetcher::new().with_document("https://author_page", page);

        let author = find_author(&document, None, Some(&fetcher)).await.unwrap();
        assert!(author.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let document = author_page_entry();
        let fetcher = MemoryFetcher::new();

        let err = find_author(&document, None, Some(&fetcher)).await.unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }
}
