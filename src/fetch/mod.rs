//! Author page retrieval.
//!
//! The authorship algorithm may need to dereference an author page. It does
//! so through a [`DocumentFetcher`] handed in by the caller, so interpretation
//! never touches the network unless a fetcher is supplied.
//!
//! - [`HttpFetcher`]: fetches over HTTP and parses the body
//! - [`MemoryFetcher`]: serves pre-parsed documents from memory

pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Document;

pub use http::HttpFetcher;
pub use memory::MemoryFetcher;

/// Retrieves a URL and returns its parsed mf2 document.
///
/// Implementations own their timeout policy. Errors are not retried and
/// propagate to the caller of the interpretation entry point.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Document>;
}

/// Turns a fetched body into an mf2 document.
pub trait DocumentParser: Send + Sync {
    /// Parse `body`, resolving relative URLs against `base_url`.
    fn parse(&self, body: &str, base_url: &str) -> Result<Document>;
}

/// Parser for bodies that already are mf2 JSON, e.g. the output of an
/// mf2 parsing service.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocumentParser;

impl DocumentParser for JsonDocumentParser {
    fn parse(&self, body: &str, _base_url: &str) -> Result<Document> {
        Document::from_json(body)
    }
}
