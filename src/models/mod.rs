// src/models/mod.rs

//! Data models: the parsed mf2 input tree, the simplified output posts,
//! and application configuration.

mod config;
mod document;
mod post;
mod post_type;

// Re-export all public types
pub use config::{Config, FetcherConfig, InterpretConfig, LoggingConfig, URL_PLACEHOLDER};
pub use document::{
    Document, H_CARD, H_CITE, H_ENTRY, H_EVENT, H_FEED, Item, Properties, PropertyValue,
    RelUrl, RenderedText,
};
pub use post::{
    AuthorInfo, DateProperty, PostProperties, PostReference, SimplifiedCite, SimplifiedEntry,
    SimplifiedEvent, SimplifiedFeed, SimplifiedPost,
};
pub use post_type::{PostType, ResponseType};
