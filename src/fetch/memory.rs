//! In-memory document fetcher.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::fetch::DocumentFetcher;
use crate::models::Document;

/// Serves a fixed set of documents keyed by URL.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, Document>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under a URL (builder style).
    pub fn with_document(mut self, url: impl Into<String>, document: Document) -> Self {
        self.documents.insert(url.into(), document);
        self
    }
}

#[async_trait]
impl DocumentFetcher for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<Document> {
        log::debug!("Serving {url} from memory");
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::fetch(url, "no document registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_and_unknown_urls() {
        let fetcher = MemoryFetcher::new().with_document("https://a.example", Document::default());
        assert!(fetcher.fetch("https://a.example").await.is_ok());

        let err = fetcher.fetch("https://b.example").await.unwrap_err();
        assert!(matches!(err, AppError::Fetch { .. }));
    }
}
