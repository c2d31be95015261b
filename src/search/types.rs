// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the search digest pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single raw entry returned by a search provider
///
/// Only `url` feeds the pipeline; providers may omit it for malformed
/// entries, which are skipped during deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Target URL of the result (`href` in provider payloads)
    #[serde(alias = "href", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Title of the search result
    #[serde(default)]
    pub title: String,
    /// Snippet/description of the search result
    #[serde(default, alias = "body")]
    pub snippet: String,
}

impl SearchResult {
    /// Shorthand for a result carrying only a URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

/// A search result URL that survived domain deduplication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl {
    pub url: String,
    /// Network location (host plus explicit port) the URL was keyed on
    pub domain: String,
}

/// Outcome of fetching and extracting one candidate URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleExtract {
    Success { title: String, text: String },
    Failure { url: String, error: String },
}

impl ArticleExtract {
    pub fn failure(url: impl Into<String>, error: impl ToString) -> Self {
        Self::Failure {
            url: url.into(),
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Errors raised at the search provider boundary
///
/// `RateLimited` and `Provider` are transient and retried with backoff;
/// `Fatal` propagates on first occurrence.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provider throttled the request
    #[error("Rate limited by {provider}: {message}")]
    RateLimited {
        provider: String,
        message: String,
    },

    /// The provider answered with an error or could not be reached
    #[error("Search provider {provider} error: {message}")]
    Provider {
        provider: String,
        /// HTTP status code, 0 when the request never got a response
        status: u16,
        message: String,
    },

    /// Anything that retrying cannot fix
    #[error("Search failed: {0}")]
    Fatal(String),
}

impl SearchError {
    /// Whether the error should feed the backoff loop
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Provider { .. })
    }
}
