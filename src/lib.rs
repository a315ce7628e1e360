// src/lib.rs

//! mf2util: interpret parsed microformats2 documents into simplified
//! posts, feeds, and authors.

pub mod error;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use fetch::{DocumentFetcher, DocumentParser, HttpFetcher, JsonDocumentParser, MemoryFetcher};
pub use models::{
    AuthorInfo, Document, Item, PostType, PropertyValue, ResponseType, SimplifiedCite,
    SimplifiedEntry, SimplifiedEvent, SimplifiedFeed, SimplifiedPost,
};
pub use pipeline::{
    InterpretOptions, interpret, interpret_cite, interpret_entry, interpret_event, interpret_feed,
};
pub use services::{
    find_all_entries, find_author, find_first_entry, post_type_discovery, representative_hcard,
    response_type_discovery,
};
pub use utils::{convert_relative_paths_to_absolute, normalize_dt};
