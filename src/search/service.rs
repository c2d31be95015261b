// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search digest pipeline
//!
//! keyword → search (with retry) → domain dedupe → concurrent fetch-and-extract
//! → digest text.

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

use super::client::SearchClient;
use super::config::{BrowserHeaders, SearchConfig};
use super::content::{ContentFetchConfig, ContentFetcher};
use super::dedupe::dedupe;
use super::digest::format_digest;
use super::duckduckgo::DuckDuckGoProvider;
use super::provider::SearchProvider;
use super::retry::RetryPolicy;
use super::types::SearchError;

/// Request-level pipeline failures
#[derive(Debug, Error)]
pub enum DigestError {
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The per-request fetch client could not be built
    #[error("{0}")]
    HttpClient(String),
}

/// Runs the full search digest pipeline for one keyword at a time
///
/// Holds no per-request state; the article fetch client is created for each
/// call and dropped when the call returns.
pub struct DigestService {
    client: SearchClient,
    max_results: usize,
    headers: BrowserHeaders,
    content_config: ContentFetchConfig,
}

impl DigestService {
    /// Create a service over an arbitrary search provider
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        search_config: &SearchConfig,
        content_config: ContentFetchConfig,
    ) -> Self {
        debug!("Search provider enabled: {}", provider.name());

        Self {
            client: SearchClient::new(provider, RetryPolicy::from_config(search_config)),
            max_results: search_config.max_results,
            headers: search_config.headers.clone(),
            content_config,
        }
    }

    /// Create a service backed by DuckDuckGo
    pub fn from_config(
        search_config: &SearchConfig,
        content_config: ContentFetchConfig,
    ) -> Result<Self, DigestError> {
        let provider = DuckDuckGoProvider::new(search_config)?;
        Ok(Self::new(Arc::new(provider), search_config, content_config))
    }

    /// Build the text digest for `keyword`
    pub async fn search_digest(&self, keyword: &str) -> Result<String, DigestError> {
        let start = Instant::now();

        let results = self.client.search(keyword, self.max_results).await?;
        let candidates = dedupe(&results);
        debug!(
            "{} results reduced to {} distinct domains",
            results.len(),
            candidates.len()
        );

        if candidates.is_empty() {
            info!("No candidate URLs for '{}'", keyword);
            return Ok(String::new());
        }

        let fetcher = ContentFetcher::new(self.content_config.clone(), &self.headers)
            .map_err(DigestError::HttpClient)?;
        let extracts = fetcher.fetch_all(&candidates).await;
        let digest = format_digest(&extracts);

        info!(
            "Digest for '{}' built from {}/{} pages in {}ms",
            keyword,
            extracts.iter().filter(|e| e.is_success()).count(),
            candidates.len(),
            start.elapsed().as_millis()
        );

        Ok(digest)
    }

    pub fn provider_name(&self) -> &'static str {
        self.client.provider_name()
    }
}
