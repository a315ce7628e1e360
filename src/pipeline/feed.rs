// src/pipeline/feed.rs

//! Feed interpretation.

use crate::error::Result;
use crate::models::{Document, H_FEED, Item, SimplifiedFeed};
use crate::pipeline::InterpretOptions;
use crate::pipeline::interpret::Interpreter;
use crate::services::find_first_entry;

/// Interpret `feed` (or the document's first h-feed) as a feed.
///
/// Without an h-feed the document's top-level items are the entries.
/// Children that are not events, entries, or cites are skipped; the rest
/// keep document order.
pub async fn interpret_feed(
    document: &Document,
    feed: Option<&Item>,
    options: InterpretOptions<'_>,
) -> Result<SimplifiedFeed> {
    let feed = feed.or_else(|| find_first_entry(document, &[H_FEED]));

    let (name, children) = match feed {
        Some(feed) => (
            feed.plain_text("name").map(str::to_string),
            feed.children.as_slice(),
        ),
        None => (None, document.items.as_slice()),
    };

    let interpreter = Interpreter::new(document, options);
    let mut entries = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        match interpreter.interpret_at(child, 0).await? {
            Some(post) => entries.push(post),
            None => log::debug!("Skipping feed child {index} ({:?})", child.types),
        }
    }

    log::debug!("Interpreted {} of {} feed children", entries.len(), children.len());
    Ok(SimplifiedFeed { name, entries })
}
