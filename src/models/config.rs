//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Placeholder substituted into `fetcher.parser_endpoint`.
pub const URL_PLACEHOLDER: &str = "{url}";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interpretation behavior
    #[serde(default)]
    pub interpret: InterpretConfig,

    /// Author page fetching
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| Self::default_after_error(path, &e))
    }

    /// Defaults in place of a config file that failed to load.
    pub fn default_after_error(path: impl AsRef<Path>, error: &AppError) -> Self {
        log::warn!(
            "Config load failed from {:?}: {}. Using defaults.",
            path.as_ref(),
            error
        );
        Self::default()
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.interpret.max_depth == 0 {
            return Err(AppError::validation("interpret.max_depth must be > 0"));
        }
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if let Some(endpoint) = &self.fetcher.parser_endpoint {
            if !endpoint.contains(URL_PLACEHOLDER) {
                return Err(AppError::validation(format!(
                    "fetcher.parser_endpoint must contain {URL_PLACEHOLDER}"
                )));
            }
        } else if self.interpret.follow_author_pages {
            return Err(AppError::validation(
                "interpret.follow_author_pages needs fetcher.parser_endpoint",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(AppError::config("logging.level is empty"));
        }
        Ok(())
    }
}

/// Interpretation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretConfig {
    /// Merge the document's rel=syndication links into every post
    #[serde(default = "defaults::use_rel_syndication")]
    pub use_rel_syndication: bool,

    /// Dereference author pages during authorship discovery
    #[serde(default)]
    pub follow_author_pages: bool,

    /// Maximum nesting of interpreted reply/like/repost/bookmark references
    #[serde(default = "defaults::max_depth")]
    pub max_depth: usize,
}

impl Default for InterpretConfig {
    fn default() -> Self {
        Self {
            use_rel_syndication: defaults::use_rel_syndication(),
            follow_author_pages: false,
            max_depth: defaults::max_depth(),
        }
    }
}

/// HTTP settings for author page retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// mf2 parsing service, e.g. `https://php.microformats.io/?url={url}`
    #[serde(default)]
    pub parser_endpoint: Option<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            parser_endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    // Interpret defaults
    pub fn use_rel_syndication() -> bool {
        true
    }
    pub fn max_depth() -> usize {
        crate::pipeline::DEFAULT_MAX_DEPTH
    }

    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; mf2util/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }
}
