// src/pipeline/common.rs

//! Fields shared by events, entries, and cites.

use indexmap::IndexSet;

use crate::error::Result;
use crate::models::{DateProperty, Document, Item, PostProperties, PropertyValue, RenderedText};
use crate::pipeline::InterpretOptions;
use crate::services::find_author;
use crate::utils::{convert_relative_paths_to_absolute, normalize_dt};

/// (markup, plain text) of a `content` value.
///
/// Rendered markup and its text are trimmed; a plain string stands for
/// both and is kept verbatim.
fn content_parts(value: &PropertyValue) -> Option<(&str, &str)> {
    match value {
        PropertyValue::Rendered(RenderedText {
            html: Some(html),
            value,
        }) => Some((html.trim(), value.trim())),
        PropertyValue::Rendered(RenderedText { html: None, value }) => {
            Some((value.as_str(), value.as_str()))
        }
        PropertyValue::Text(text) => Some((text.as_str(), text.as_str())),
        PropertyValue::Item(item) => match (&item.html, &item.value) {
            (Some(html), value) => Some((html.trim(), value.as_deref().unwrap_or("").trim())),
            (None, Some(value)) => Some((value.as_str(), value.as_str())),
            (None, None) => None,
        },
    }
}

/// Syndication links: the item's own, optionally preceded by the
/// document's rel=syndication links, without duplicates.
fn syndication(document: &Document, item: &Item, use_rel_syndication: bool) -> Vec<String> {
    let own = item
        .property("syndication")
        .iter()
        .filter_map(PropertyValue::plain_text)
        .map(str::to_string);

    if !use_rel_syndication {
        return own.collect();
    }
    let merged: IndexSet<String> = document.rel("syndication").iter().cloned().chain(own).collect();
    merged.into_iter().collect()
}

/// Extract the common post fields from `item`.
///
/// Resolves the author, so this may call the fetcher.
pub async fn interpret_common_properties(
    document: &Document,
    item: &Item,
    options: InterpretOptions<'_>,
) -> Result<PostProperties> {
    let text = |name: &str| item.plain_text(name).map(str::to_string);
    let mut result = PostProperties {
        url: text("url"),
        uid: text("uid"),
        photo: text("photo"),
        featured: text("featured"),
        logo: text("logo"),
        ..PostProperties::default()
    };

    for property in DateProperty::ALL {
        let Some(raw) = item.plain_text(property.as_str()) else {
            continue;
        };
        let (normalized, raw_slot) = result.date_slots(property);
        *raw_slot = Some(raw.to_string());
        match normalize_dt(raw) {
            Ok(value) => *normalized = Some(value),
            Err(e) => log::debug!("Keeping raw {} value: {}", property.as_str(), e),
        }
    }

    result.author = find_author(document, Some(item), options.fetcher).await?;

    if let Some((html, plain)) = item.property("content").first().and_then(content_parts) {
        result.content = Some(convert_relative_paths_to_absolute(
            options.source_url,
            options.base_href,
            html,
        ));
        result.content_plain = Some(plain.to_string());
    }

    result.summary = text("summary");
    result.syndication = syndication(document, item, options.use_rel_syndication);

    Ok(result)
}
