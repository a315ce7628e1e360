//! Post kinds inferred from an item's structure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of post-type discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Event,
    Rsvp,
    Repost,
    Like,
    Bookmark,
    Reply,
    Video,
    Photo,
    Article,
    Note,
}

impl PostType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Event => "event",
            PostType::Rsvp => "rsvp",
            PostType::Repost => "repost",
            PostType::Like => "like",
            PostType::Bookmark => "bookmark",
            PostType::Reply => "reply",
            PostType::Video => "video",
            PostType::Photo => "photo",
            PostType::Article => "article",
            PostType::Note => "note",
        }
    }
}

impl fmt::Display for PostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of response-type discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Rsvp,
    Repost,
    Like,
    Bookmark,
    Reply,
    Mention,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Rsvp => "rsvp",
            ResponseType::Repost => "repost",
            ResponseType::Like => "like",
            ResponseType::Bookmark => "bookmark",
            ResponseType::Reply => "reply",
            ResponseType::Mention => "mention",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
