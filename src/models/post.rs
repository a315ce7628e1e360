// src/models/post.rs

//! Simplified post models returned by the interpretation pipeline.

use serde::{Deserialize, Serialize};

/// Resolved author identity. At least one field is always set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AuthorInfo {
    /// An author known only by URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// An author known only by name.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.photo.is_none() && self.url.is_none()
    }

    /// The URL when it is the only thing known about the author.
    pub fn url_only(&self) -> Option<&str> {
        match (&self.name, &self.photo) {
            (None, None) => self.url.as_deref(),
            _ => None,
        }
    }
}

/// Fields shared by every simplified post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PostProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_str: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_str: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInfo>,

    /// Content markup with absolute URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_plain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syndication: Vec<String>,
}

/// A date property as (normalized, raw) slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateProperty {
    Start,
    End,
    Published,
    Updated,
    Deleted,
}

impl DateProperty {
    pub const ALL: [DateProperty; 5] = [
        DateProperty::Start,
        DateProperty::End,
        DateProperty::Published,
        DateProperty::Updated,
        DateProperty::Deleted,
    ];

    /// The mf2 property name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateProperty::Start => "start",
            DateProperty::End => "end",
            DateProperty::Published => "published",
            DateProperty::Updated => "updated",
            DateProperty::Deleted => "deleted",
        }
    }
}

impl PostProperties {
    /// Mutable (normalized, raw) slots for a date property.
    pub fn date_slots(
        &mut self,
        property: DateProperty,
    ) -> (&mut Option<String>, &mut Option<String>) {
        match property {
            DateProperty::Start => (&mut self.start, &mut self.start_str),
            DateProperty::End => (&mut self.end, &mut self.end_str),
            DateProperty::Published => (&mut self.published, &mut self.published_str),
            DateProperty::Updated => (&mut self.updated, &mut self.updated_str),
            DateProperty::Deleted => (&mut self.deleted, &mut self.deleted_str),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub properties: PostProperties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SimplifiedEntry {
    /// Explicit title, absent when the name merely echoes the content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub properties: PostProperties,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub in_reply_to: Vec<PostReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub like_of: Vec<PostReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repost_of: Vec<PostReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bookmark_of: Vec<PostReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedCite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub properties: PostProperties,
}

/// An interpreted post, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SimplifiedPost {
    Event(SimplifiedEvent),
    Entry(SimplifiedEntry),
    Cite(SimplifiedCite),
}

impl SimplifiedPost {
    /// The `type` discriminant.
    pub fn kind(&self) -> &'static str {
        match self {
            SimplifiedPost::Event(_) => "event",
            SimplifiedPost::Entry(_) => "entry",
            SimplifiedPost::Cite(_) => "cite",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            SimplifiedPost::Event(event) => event.name.as_deref(),
            SimplifiedPost::Entry(entry) => entry.name.as_deref(),
            SimplifiedPost::Cite(cite) => cite.name.as_deref(),
        }
    }

    pub fn properties(&self) -> &PostProperties {
        match self {
            SimplifiedPost::Event(event) => &event.properties,
            SimplifiedPost::Entry(entry) => &entry.properties,
            SimplifiedPost::Cite(cite) => &cite.properties,
        }
    }

    pub fn as_entry(&self) -> Option<&SimplifiedEntry> {
        match self {
            SimplifiedPost::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// A referenced post: either fully interpreted or a bare URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostReference {
    Post(Box<SimplifiedPost>),
    Url { url: String },
}

impl PostReference {
    pub fn url(url: impl Into<String>) -> Self {
        PostReference::Url { url: url.into() }
    }

    pub fn as_post(&self) -> Option<&SimplifiedPost> {
        match self {
            PostReference::Post(post) => Some(post),
            PostReference::Url { .. } => None,
        }
    }
}

/// An interpreted feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedFeed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub entries: Vec<SimplifiedPost>,
}
