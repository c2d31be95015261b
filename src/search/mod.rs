// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword search digest
//!
//! Turns a search keyword into a plain-text digest of the top pages:
//! - Search with exponential backoff on provider throttling
//! - One URL per distinct domain, in result order
//! - Concurrent page fetching with per-URL failure isolation
//! - Article extraction and ASCII text normalisation

pub mod client;
pub mod config;
pub mod content;
pub mod dedupe;
pub mod digest;
pub mod duckduckgo;
pub mod provider;
pub mod retry;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use client::SearchClient;
pub use config::{BrowserHeaders, SearchConfig};
pub use dedupe::dedupe;
pub use digest::format_digest;
pub use duckduckgo::DuckDuckGoProvider;
pub use provider::SearchProvider;
pub use retry::RetryPolicy;
pub use service::{DigestError, DigestService};
pub use types::{ArticleExtract, CandidateUrl, SearchError, SearchResult};

pub use content::{ContentFetchConfig, ContentFetcher, FetchError};
