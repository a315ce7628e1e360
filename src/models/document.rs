// src/models/document.rs

//! Parsed microformats2 document tree.
//!
//! These shapes mirror the canonical mf2 JSON produced by microformat
//! parsers: a document holds top-level `items` plus document-wide `rels`,
//! and every item carries ordered `properties` and structural `children`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const H_ENTRY: &str = "h-entry";
pub const H_EVENT: &str = "h-event";
pub const H_CITE: &str = "h-cite";
pub const H_FEED: &str = "h-feed";
pub const H_CARD: &str = "h-card";

/// Property name to ordered values, in declaration order.
pub type Properties = IndexMap<String, Vec<PropertyValue>>;

/// A parsed document: the item tree and document-level relations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level microformat roots
    #[serde(default)]
    pub items: Vec<Item>,

    /// Relation name (`me`, `author`, `syndication`, ...) to URLs
    #[serde(default)]
    pub rels: IndexMap<String, Vec<String>>,

    /// Per-URL relation metadata
    #[serde(default, rename = "rel-urls")]
    pub rel_urls: IndexMap<String, RelUrl>,
}

impl Document {
    /// Parse a document from mf2 JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// URLs listed under a relation, empty if the relation is absent.
    pub fn rel(&self, name: &str) -> &[String] {
        self.rels.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Metadata about a single rel URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelUrl {
    #[serde(default)]
    pub rels: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hreflang: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// A microformat root such as `h-entry` or `h-card`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Type tags, e.g. `["h-entry"]`
    #[serde(rename = "type")]
    pub types: Vec<String>,

    #[serde(default)]
    pub properties: Properties,

    /// Structural members (feed entries), never property values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Plain-text value when the item is itself a property value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Item {
    /// Create an item with the given type tags and no properties.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Append a value to a property (builder style).
    pub fn with_property(mut self, name: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties
            .entry(name.to_string())
            .or_default()
            .push(value.into());
        self
    }

    /// Append a structural child (builder style).
    pub fn with_child(mut self, child: Item) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_type(&self, wanted: &str) -> bool {
        self.types.iter().any(|t| t == wanted)
    }

    /// True if any type tag is in `wanted`.
    pub fn has_any_type(&self, wanted: &[&str]) -> bool {
        self.types.iter().any(|t| wanted.contains(&t.as_str()))
    }

    /// Values of a property, empty if absent.
    pub fn property(&self, name: &str) -> &[PropertyValue] {
        self.properties
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Plain text of the first value of a property.
    pub fn plain_text(&self, name: &str) -> Option<&str> {
        self.property(name).first().and_then(PropertyValue::plain_text)
    }

    /// True if any value of the property has exactly this plain text.
    pub fn property_contains(&self, name: &str, text: &str) -> bool {
        self.property(name)
            .iter()
            .any(|value| value.plain_text() == Some(text))
    }

    /// Items embedded as property values, flattened in declaration order.
    pub fn property_items(&self) -> impl Iterator<Item = &Item> {
        self.properties
            .values()
            .flatten()
            .filter_map(PropertyValue::as_item)
    }
}

/// Dual text form: rendered markup plus its plain-text value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    pub value: String,
}

/// A single property value.
///
/// Variant order matters for deserialization: an object with `type` is a
/// nested item, an object with `value` is rendered text, and a bare
/// string is plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Item(Box<Item>),
    Rendered(RenderedText),
    Text(String),
}

impl PropertyValue {
    /// The logical string this value carries, if any.
    ///
    /// Nested items only carry one when the parser recorded a `value`.
    pub fn plain_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Rendered(rendered) => Some(&rendered.value),
            PropertyValue::Item(item) => item.value.as_deref(),
        }
    }

    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<Item> for PropertyValue {
    fn from(item: Item) -> Self {
        PropertyValue::Item(Box::new(item))
    }
}

impl From<RenderedText> for PropertyValue {
    fn from(rendered: RenderedText) -> Self {
        PropertyValue::Rendered(rendered)
    }
}
