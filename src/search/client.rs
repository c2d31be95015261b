// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword search with retry
//!
//! Wraps a [`SearchProvider`] and retries transient provider failures with
//! exponential backoff and jitter.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::provider::SearchProvider;
use super::retry::{retry_with_backoff, RetryPolicy};
use super::types::{SearchError, SearchResult};

/// Search client that retries a single provider
#[derive(Clone)]
pub struct SearchClient {
    provider: Arc<dyn SearchProvider>,
    retry: RetryPolicy,
}

impl SearchClient {
    pub fn new(provider: Arc<dyn SearchProvider>, retry: RetryPolicy) -> Self {
        Self { provider, retry }
    }

    /// Search for `keyword`, requesting up to `max_results` results
    ///
    /// An empty result list is a successful outcome.
    pub async fn search(
        &self,
        keyword: &str,
        max_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let start = Instant::now();
        let provider = self.provider.as_ref();

        let results = retry_with_backoff(&self.retry, |attempt| {
            debug!(
                "Querying {} for '{}' (attempt {})",
                provider.name(),
                keyword,
                attempt + 1
            );
            provider.search(keyword, max_results)
        })
        .await?;

        info!(
            "Search complete: {} results from {} in {}ms",
            results.len(),
            self.provider.name(),
            start.elapsed().as_millis()
        );

        Ok(results)
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}
