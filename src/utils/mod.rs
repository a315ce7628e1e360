//! Utility functions and helpers.

pub mod date;
pub mod http;
pub mod patterns;
pub mod text;
pub mod url;

pub use date::normalize_dt;
pub use text::is_name_a_title;
pub use self::url::{convert_relative_paths_to_absolute, is_uri, resolve_url, url_equal};
