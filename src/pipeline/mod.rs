//! Interpretation entry points.
//!
//! - `interpret`: type-dispatching post interpretation
//! - `interpret_event` / `interpret_entry` / `interpret_cite`: one post kind
//! - `interpret_feed`: an h-feed or a flat list of posts

pub mod common;
pub mod feed;
pub mod interpret;
pub mod options;

pub use common::interpret_common_properties;
pub use feed::interpret_feed;
pub use interpret::{interpret, interpret_cite, interpret_entry, interpret_event};
pub use options::{DEFAULT_MAX_DEPTH, InterpretOptions};
