// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo search provider
//!
//! Implements web search using DuckDuckGo's HTML interface.
//! No API key required. Results beyond the first page are fetched by
//! replaying the hidden "Next" form the page carries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use super::config::SearchConfig;
use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";
const PROVIDER_NAME: &str = "duckduckgo";
/// Upper bound on result pages walked for one query
const MAX_PAGES: usize = 3;

/// DuckDuckGo search provider (no API key required)
pub struct DuckDuckGoProvider {
    client: Client,
    endpoint: String,
    region: String,
}

impl DuckDuckGoProvider {
    /// Create a new DuckDuckGo provider
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let headers = config
            .headers
            .to_header_map()
            .map_err(|e| SearchError::Fatal(format!("Invalid search header: {}", e)))?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| SearchError::Fatal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: DDG_HTML_URL.to_string(),
            region: config.region.clone(),
        })
    }

    /// Point the provider at a different HTML endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn fetch_page(&self, form: &[(String, String)]) -> Result<String, SearchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(form)
            .send()
            .await
            .map_err(|e| SearchError::Provider {
                provider: PROVIDER_NAME.to_string(),
                status: 0,
                message: e.to_string(),
            })?;

        let status = response.status();
        if is_rate_limit_status(status) {
            return Err(SearchError::RateLimited {
                provider: PROVIDER_NAME.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }
        if !status.is_success() {
            return Err(SearchError::Provider {
                provider: PROVIDER_NAME.to_string(),
                status: status.as_u16(),
                message: "DuckDuckGo request failed".to_string(),
            });
        }

        response.text().await.map_err(|e| SearchError::Provider {
            provider: PROVIDER_NAME.to_string(),
            status: status.as_u16(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let mut form = vec![
            ("q".to_string(), query.to_string()),
            ("kl".to_string(), self.region.clone()),
        ];
        let mut results = Vec::new();

        for page in 0..MAX_PAGES {
            let html = self.fetch_page(&form).await?;
            let parsed = parse_ddg_html(&html);
            debug!(
                "DuckDuckGo page {} returned {} results",
                page + 1,
                parsed.results.len()
            );

            if parsed.results.is_empty() {
                break;
            }
            results.extend(parsed.results);
            if results.len() >= num_results {
                break;
            }

            match parsed.next_form {
                Some(next) => form = next,
                None => break,
            }
        }

        results.truncate(num_results);
        Ok(results)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

/// DuckDuckGo answers throttled clients with 202 (and sometimes 403/429)
fn is_rate_limit_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::ACCEPTED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    )
}

/// One parsed page of DuckDuckGo HTML results
#[derive(Debug, Default)]
struct ParsedPage {
    results: Vec<SearchResult>,
    /// Hidden fields of the "Next" form, if the page has one
    next_form: Option<Vec<(String, String)>>,
}

fn parse_ddg_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    let (Ok(result_sel), Ok(link_sel), Ok(snippet_sel)) = (
        Selector::parse("div.result"),
        Selector::parse("a.result__a"),
        Selector::parse(".result__snippet"),
    ) else {
        return ParsedPage::default();
    };

    let mut results = Vec::new();
    for block in document.select(&result_sel) {
        if block.value().classes().any(|c| c == "result--ad") {
            continue;
        }
        let Some(link) = block.select(&link_sel).next() else {
            continue;
        };

        let url = link
            .value()
            .attr("href")
            .and_then(extract_ddg_url)
            .filter(|url| !is_sponsored(url));
        if url.is_none() && link.value().attr("href").is_some_and(is_sponsored) {
            continue;
        }

        results.push(SearchResult {
            url,
            title: collapse_text(&link),
            snippet: block
                .select(&snippet_sel)
                .next()
                .map(|s| collapse_text(&s))
                .unwrap_or_default(),
        });
    }

    ParsedPage {
        results,
        next_form: parse_next_form(&document),
    }
}

fn parse_next_form(document: &Html) -> Option<Vec<(String, String)>> {
    let form_sel = Selector::parse("div.nav-link form").ok()?;
    let next_sel = Selector::parse("input[type=\"submit\"][value=\"Next\"]").ok()?;
    let hidden_sel = Selector::parse("input[type=\"hidden\"]").ok()?;

    let form = document
        .select(&form_sel)
        .find(|form| form.select(&next_sel).next().is_some())?;

    let fields: Vec<(String, String)> = form
        .select(&hidden_sel)
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Extract actual URL from DuckDuckGo's redirect URL
///
/// Redirect links look like `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`.
fn extract_ddg_url(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else if href.starts_with('/') {
        format!("https://duckduckgo.com{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute).ok()?;
    if let Some((_, target)) = parsed.query_pairs().find(|(key, _)| key == "uddg") {
        return Some(target.into_owned());
    }

    if matches!(parsed.scheme(), "http" | "https") && !href.starts_with('/') {
        Some(absolute)
    } else {
        None
    }
}

fn is_sponsored(url: &str) -> bool {
    url.contains("duckduckgo.com/y.js")
}

fn collapse_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
