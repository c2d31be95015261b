// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the search client

use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use std::env;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Browser-like headers sent to the search provider and to every fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserHeaders {
    pub user_agent: String,
    pub accept_language: String,
}

impl BrowserHeaders {
    pub fn from_env() -> Self {
        Self {
            user_agent: env::var("SEARCH_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            accept_language: env::var("SEARCH_ACCEPT_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_ACCEPT_LANGUAGE.to_string()),
        }
    }

    /// Build the default header map for a `reqwest` client
    pub fn to_header_map(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&self.accept_language)?);
        Ok(headers)
    }
}

impl Default for BrowserHeaders {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Configuration for keyword search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of results requested from the provider
    pub max_results: usize,
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Base delay of the exponential backoff in milliseconds
    pub initial_delay_ms: u64,
    /// Provider region code (DuckDuckGo `kl`)
    pub region: String,
    /// Timeout of a single provider request in seconds
    pub request_timeout_secs: u64,
    pub headers: BrowserHeaders,
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            max_results: env::var("SEARCH_MAX_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            max_attempts: env::var("SEARCH_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            initial_delay_ms: env::var("SEARCH_INITIAL_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            region: env::var("SEARCH_REGION").unwrap_or_else(|_| "wt-wt".to_string()),
            request_timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            headers: BrowserHeaders::from_env(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_results == 0 {
            return Err("max_results must be at least 1".to_string());
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 15,
            max_attempts: 5,
            initial_delay_ms: 1000,
            region: "wt-wt".to_string(),
            request_timeout_secs: 10,
            headers: BrowserHeaders::default(),
        }
    }
}
