// src/pipeline/interpret.rs

//! Event, entry, and cite interpretation.
//!
//! Entries reference other posts through `in-reply-to`, `like-of`,
//! `repost-of`, and `bookmark-of`. Embedded references are interpreted
//! recursively up to `max_depth` levels; deeper ones, and ones that do not
//! interpret, collapse to a bare `{url}` reference.

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::Result;
use crate::models::{
    Document, H_CITE, H_ENTRY, H_EVENT, Item, PostReference, PropertyValue, SimplifiedCite,
    SimplifiedEntry, SimplifiedEvent, SimplifiedPost,
};
use crate::pipeline::InterpretOptions;
use crate::pipeline::common::interpret_common_properties;
use crate::services::find_first_entry;
use crate::utils::is_name_a_title;

/// Item types with a singular interpreter.
const POST_TYPES: [&str; 3] = [H_ENTRY, H_EVENT, H_CITE];

/// Reference properties of an entry, in output order.
const REFERENCE_PROPERTIES: [&str; 4] = ["in-reply-to", "like-of", "repost-of", "bookmark-of"];

/// One interpretation call: the source document plus its options.
#[derive(Clone, Copy)]
pub(crate) struct Interpreter<'a> {
    document: &'a Document,
    options: InterpretOptions<'a>,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(document: &'a Document, options: InterpretOptions<'a>) -> Self {
        Self { document, options }
    }

    /// Dispatch on the item's type tags. Event wins over entry, entry over
    /// cite; any other item yields `None`.
    pub(crate) fn interpret_at(
        self,
        item: &'a Item,
        depth: usize,
    ) -> BoxFuture<'a, Result<Option<SimplifiedPost>>> {
        async move {
            let post = if item.has_type(H_EVENT) {
                SimplifiedPost::Event(self.event(item).await?)
            } else if item.has_type(H_ENTRY) {
                SimplifiedPost::Entry(self.entry(item, depth).await?)
            } else if item.has_type(H_CITE) {
                SimplifiedPost::Cite(self.cite(item).await?)
            } else {
                log::debug!("Not interpretable as a post: {:?}", item.types);
                return Ok(None);
            };
            Ok(Some(post))
        }
        .boxed()
    }

    async fn event(self, item: &'a Item) -> Result<SimplifiedEvent> {
        let properties = interpret_common_properties(self.document, item, self.options).await?;
        Ok(SimplifiedEvent {
            name: item.plain_text("name").map(str::to_string),
            properties,
        })
    }

    async fn entry(self, item: &'a Item, depth: usize) -> Result<SimplifiedEntry> {
        let properties = interpret_common_properties(self.document, item, self.options).await?;
        let mut entry = SimplifiedEntry {
            name: title(item, properties.content_plain.as_deref()),
            properties,
            ..SimplifiedEntry::default()
        };

        for name in REFERENCE_PROPERTIES {
            let mut references = Vec::new();
            for value in item.property(name) {
                if let Some(reference) = self.reference(value, depth).await? {
                    references.push(reference);
                }
            }
            match name {
                "in-reply-to" => entry.in_reply_to = references,
                "like-of" => entry.like_of = references,
                "repost-of" => entry.repost_of = references,
                _ => entry.bookmark_of = references,
            }
        }

        Ok(entry)
    }

    async fn cite(self, item: &'a Item) -> Result<SimplifiedCite> {
        let properties = interpret_common_properties(self.document, item, self.options).await?;
        Ok(SimplifiedCite {
            name: title(item, properties.content_plain.as_deref()),
            properties,
        })
    }

    /// One value of a reference property.
    async fn reference(
        self,
        value: &'a PropertyValue,
        depth: usize,
    ) -> Result<Option<PostReference>> {
        let nested = match value {
            PropertyValue::Item(nested) => nested,
            PropertyValue::Text(url) => return Ok(Some(PostReference::url(url.as_str()))),
            PropertyValue::Rendered(rendered) => {
                return Ok(Some(PostReference::url(rendered.value.as_str())));
            }
        };

        if depth >= self.options.max_depth {
            log::debug!("Reference depth limit {} reached", self.options.max_depth);
            return Ok(bare_reference(nested));
        }
        match self.interpret_at(nested, depth + 1).await? {
            Some(post) => Ok(Some(PostReference::Post(Box::new(post)))),
            None => Ok(bare_reference(nested)),
        }
    }
}

/// Promote `name` to a title unless it merely repeats the content.
fn title(item: &Item, content_plain: Option<&str>) -> Option<String> {
    item.plain_text("name")
        .filter(|name| !name.is_empty() && is_name_a_title(Some(*name), content_plain))
        .map(str::to_string)
}

/// Fallback for an embedded reference that is not interpreted.
fn bare_reference(item: &Item) -> Option<PostReference> {
    item.plain_text("url")
        .or(item.value.as_deref())
        .map(PostReference::url)
}

/// Interpret `item` (or the first entry, event, or cite of the document)
/// as whichever post kind its type tags name.
pub async fn interpret(
    document: &Document,
    item: Option<&Item>,
    options: InterpretOptions<'_>,
) -> Result<Option<SimplifiedPost>> {
    let Some(item) = item.or_else(|| find_first_entry(document, &POST_TYPES)) else {
        return Ok(None);
    };
    Interpreter::new(document, options).interpret_at(item, 0).await
}

/// Interpret `item` (or the document's first h-event) as an event.
pub async fn interpret_event(
    document: &Document,
    item: Option<&Item>,
    options: InterpretOptions<'_>,
) -> Result<Option<SimplifiedEvent>> {
    let Some(item) = item.or_else(|| find_first_entry(document, &[H_EVENT])) else {
        return Ok(None);
    };
    let event = Interpreter::new(document, options).event(item).await?;
    Ok(Some(event))
}

/// Interpret `item` (or the document's first h-entry) as an entry,
/// including its reply, like, repost, and bookmark references.
pub async fn interpret_entry(
    document: &Document,
    item: Option<&Item>,
    options: InterpretOptions<'_>,
) -> Result<Option<SimplifiedEntry>> {
    let Some(item) = item.or_else(|| find_first_entry(document, &[H_ENTRY])) else {
        return Ok(None);
    };
    let entry = Interpreter::new(document, options).entry(item, 0).await?;
    Ok(Some(entry))
}

/// Interpret `item` (or the document's first h-cite) as a citation.
pub async fn interpret_cite(
    document: &Document,
    item: Option<&Item>,
    options: InterpretOptions<'_>,
) -> Result<Option<SimplifiedCite>> {
    let Some(item) = item.or_else(|| find_first_entry(document, &[H_CITE])) else {
        return Ok(None);
    };
    let cite = Interpreter::new(document, options).cite(item).await?;
    Ok(Some(cite))
}
