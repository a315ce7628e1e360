//! Per-call interpretation options.

use crate::fetch::DocumentFetcher;
use crate::models::InterpretConfig;

/// Default bound on nested reply/like/repost/bookmark interpretation.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Inputs shared by every interpretation step of one call.
#[derive(Clone, Copy)]
pub struct InterpretOptions<'a> {
    /// URL of the source document, used to absolutize content links
    pub source_url: &'a str,

    /// Value of the page's `<base href>`, if any
    pub base_href: Option<&'a str>,

    /// Merge the document's rel=syndication links into each post
    pub use_rel_syndication: bool,

    /// Author page fetcher; `None` never touches the network
    pub fetcher: Option<&'a dyn DocumentFetcher>,

    /// Nesting levels of referenced posts to interpret
    pub max_depth: usize,
}

impl<'a> InterpretOptions<'a> {
    pub fn new(source_url: &'a str) -> Self {
        Self {
            source_url,
            base_href: None,
            use_rel_syndication: true,
            fetcher: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Options from the `[interpret]` config section. The fetcher is still
    /// supplied separately.
    pub fn from_config(source_url: &'a str, config: &InterpretConfig) -> Self {
        Self {
            use_rel_syndication: config.use_rel_syndication,
            max_depth: config.max_depth,
            ..Self::new(source_url)
        }
    }

    pub fn with_base_href(mut self, base_href: Option<&'a str>) -> Self {
        self.base_href = base_href;
        self
    }

    pub fn with_rel_syndication(mut self, enabled: bool) -> Self {
        self.use_rel_syndication = enabled;
        self
    }

    pub fn with_fetcher(mut self, fetcher: &'a dyn DocumentFetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
