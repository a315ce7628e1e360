// src/fetch/http.rs

//! HTTP document fetcher.

use async_trait::async_trait;
use url::Url;

use crate::error::{AppError, Result};
use crate::fetch::{DocumentFetcher, DocumentParser, JsonDocumentParser};
use crate::models::{Document, FetcherConfig, URL_PLACEHOLDER};
use crate::utils::http::{create_async_client, fetch_text_async};

/// Fetches pages over HTTP and parses them with `P`.
///
/// With a `parser_endpoint` template the request goes to the parsing
/// service instead, with the page URL substituted for `{url}`.
pub struct HttpFetcher<P = JsonDocumentParser> {
    client: reqwest::Client,
    parser: P,
    parser_endpoint: Option<String>,
}

impl HttpFetcher<JsonDocumentParser> {
    /// Create a fetcher that reads mf2 JSON from `parser_endpoint`.
    ///
    /// Author pages themselves are HTML, so the endpoint is required.
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        if config.parser_endpoint.is_none() {
            return Err(AppError::config(
                "fetcher.parser_endpoint is required to fetch author pages",
            ));
        }
        Self::with_parser(config, JsonDocumentParser)
    }
}

impl<P: DocumentParser> HttpFetcher<P> {
    /// Create a fetcher with a custom body parser. Without a
    /// `parser_endpoint` the parser receives the page body as served.
    pub fn with_parser(config: &FetcherConfig, parser: P) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            parser,
            parser_endpoint: config.parser_endpoint.clone(),
        })
    }

    /// The URL actually requested for a page.
    fn request_url(&self, url: &str) -> Result<String> {
        // reject garbage before it reaches the network or the template
        Url::parse(url)?;
        Ok(match &self.parser_endpoint {
            Some(template) => template.replace(URL_PLACEHOLDER, &encode_component(url)),
            None => url.to_string(),
        })
    }

    /// Parse a fetched body, attributing failures to the page URL.
    fn parse_body(&self, url: &str, body: &str) -> Result<Document> {
        self.parser
            .parse(body, url)
            .map_err(|e| AppError::fetch(url, e))
    }
}

/// Percent-encode a URL for use as a query value.
fn encode_component(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[async_trait]
impl<P: DocumentParser> DocumentFetcher for HttpFetcher<P> {
    async fn fetch(&self, url: &str) -> Result<Document> {
        let request_url = self.request_url(url)?;
        log::info!("Fetching author page {url}");
        log::debug!("GET {request_url}");

        let body = fetch_text_async(&self.client, &request_url)
            .await
            .map_err(|e| AppError::fetch(url, e))?;
        self.parse_body(url, &body)
    }
}
