//! Service layer: the standalone mf2 algorithms.
//!
//! - Tree traversal (`find_first_entry`, `find_all_entries`)
//! - Representative h-card resolution (`representative_hcard`)
//! - Authorship discovery (`find_author`)
//! - Post/response type discovery (`post_type_discovery`, `response_type_discovery`)

pub mod authorship;
pub mod discovery;
pub mod hcard;
pub mod traversal;

pub use authorship::{find_author, parse_author};
pub use discovery::{post_type_discovery, response_type_discovery};
pub use hcard::representative_hcard;
pub use traversal::{Entries, find_all_entries, find_first_entry};
