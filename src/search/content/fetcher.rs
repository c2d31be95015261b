//! HTTP content fetching with parallel requests and timeouts
//!
//! Fetches web page content from deduplicated search result URLs.

use futures::future::join_all;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::config::ContentFetchConfig;
use super::extractor::{extract_article, ExtractError};
use super::text::normalize;
use crate::search::config::BrowserHeaders;
use crate::search::types::{ArticleExtract, CandidateUrl};

/// Content fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Request timed out
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    /// HTTP request error
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// HTTP status other than 200
    #[error("HTTP {0}")]
    HttpStatus(u16),
    /// Response body could not be read
    #[error("Failed to read body: {0}")]
    Body(String),
    /// Article extraction failed
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}

/// Content fetcher sharing one connection pool across its workers
///
/// Cloning is cheap; clones share the underlying pool.
#[derive(Clone)]
pub struct ContentFetcher {
    client: Client,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: ContentFetchConfig, headers: &BrowserHeaders) -> Result<Self, String> {
        let header_map = headers
            .to_header_map()
            .map_err(|e| format!("Invalid fetch header: {}", e))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(header_map)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// Fetch one page and extract its article, normalising title and text
    pub async fn fetch_content(&self, url: &str) -> Result<(String, String), FetchError> {
        debug!("Fetching content from: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout_per_page_secs)
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.config.timeout_per_page_secs)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        let article = extract_article(&html)?;
        let max_chars = self.config.max_chars_per_page;

        Ok((
            normalize(&article.title, max_chars),
            normalize(&article.text, max_chars),
        ))
    }

    /// Fetch-and-extract worker; every failure becomes [`ArticleExtract::Failure`]
    pub async fn fetch_and_extract(&self, url: &str) -> ArticleExtract {
        match self.fetch_content(url).await {
            Ok((title, text)) => {
                info!("Fetched {} chars from: {}", text.len(), url);
                ArticleExtract::Success { title, text }
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                ArticleExtract::failure(url, e)
            }
        }
    }

    /// Fetch all candidates concurrently
    ///
    /// Each URL runs in its own task. Results are index-aligned with `urls`;
    /// a failing or panicking task never affects its siblings.
    pub async fn fetch_all(&self, urls: &[CandidateUrl]) -> Vec<ArticleExtract> {
        if urls.is_empty() {
            return vec![];
        }

        let start = Instant::now();
        let handles: Vec<_> = urls
            .iter()
            .map(|candidate| {
                let fetcher = self.clone();
                let url = candidate.url.clone();
                tokio::spawn(async move { fetcher.fetch_and_extract(&url).await })
            })
            .collect();

        let extracts: Vec<ArticleExtract> = join_all(handles)
            .await
            .into_iter()
            .zip(urls)
            .map(|(joined, candidate)| {
                joined.unwrap_or_else(|e| {
                    warn!("Fetch task for {} did not complete: {}", candidate.url, e);
                    ArticleExtract::failure(&candidate.url, format!("Worker task failed: {}", e))
                })
            })
            .collect();

        info!(
            "Fetched {}/{} pages in {}ms",
            extracts.iter().filter(|e| e.is_success()).count(),
            urls.len(),
            start.elapsed().as_millis()
        );

        extracts
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}
