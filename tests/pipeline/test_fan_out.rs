// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Fan-out tests for ContentFetcher::fetch_all
//!
//! These tests verify that:
//! - Results come back in input order, not completion order
//! - A failing URL never affects its siblings
//! - Non-200 statuses and timeouts become Failure extracts

use crate::support::{candidate, fast_fetch_config, spawn_site, SLOW_DELAY};
use search_digest::search::{
    format_digest, ArticleExtract, BrowserHeaders, ContentFetchConfig, ContentFetcher,
};
use std::time::Instant;

fn fetcher(config: ContentFetchConfig) -> ContentFetcher {
    ContentFetcher::new(config, &BrowserHeaders::default()).unwrap()
}

fn title_of(extract: &ArticleExtract) -> &str {
    match extract {
        ArticleExtract::Success { title, .. } => title,
        ArticleExtract::Failure { url, error } => panic!("{} failed: {}", url, error),
    }
}

#[tokio::test]
async fn test_order_preserved_when_first_fetch_is_slowest() {
    let slow = spawn_site().await;
    let fast = spawn_site().await;
    let other = spawn_site().await;

    let urls = vec![
        candidate(slow, "/slow/slow-site"),
        candidate(fast, "/article/fast-site"),
        candidate(other, "/article/other-site"),
    ];

    let start = Instant::now();
    let extracts = fetcher(fast_fetch_config()).fetch_all(&urls).await;

    assert_eq!(extracts.len(), 3);
    assert_eq!(title_of(&extracts[0]), "slow-site");
    assert_eq!(title_of(&extracts[1]), "fast-site");
    assert_eq!(title_of(&extracts[2]), "other-site");
    // Fetches overlap, so the total is close to the slowest single fetch
    assert!(start.elapsed() < SLOW_DELAY * 3);
}

#[tokio::test]
async fn test_server_error_is_isolated() {
    let a = spawn_site().await;
    let b = spawn_site().await;
    let c = spawn_site().await;

    let urls = vec![
        candidate(a, "/article/alpha"),
        candidate(b, "/error"),
        candidate(c, "/article/gamma"),
    ];

    let extracts = fetcher(fast_fetch_config()).fetch_all(&urls).await;

    assert_eq!(title_of(&extracts[0]), "alpha");
    assert_eq!(
        extracts[1],
        ArticleExtract::Failure {
            url: urls[1].url.clone(),
            error: "HTTP 500".to_string(),
        }
    );
    assert_eq!(title_of(&extracts[2]), "gamma");

    let digest = format_digest(&extracts);
    assert!(digest.contains("Title: alpha"));
    assert!(digest.contains("Title: gamma"));
    assert!(!digest.contains(&b.to_string()));
    assert_eq!(digest.matches("-----").count(), 2);
}

#[tokio::test]
async fn test_timeout_is_isolated() {
    let a = spawn_site().await;
    let b = spawn_site().await;
    let c = spawn_site().await;

    let urls = vec![
        candidate(a, "/article/alpha"),
        candidate(b, "/hang"),
        candidate(c, "/slow/gamma"),
    ];

    let extracts = fetcher(fast_fetch_config()).fetch_all(&urls).await;

    assert!(extracts[0].is_success());
    match &extracts[1] {
        ArticleExtract::Failure { url, error } => {
            assert_eq!(url, &urls[1].url);
            assert!(error.contains("timed out"), "unexpected error: {}", error);
        }
        other => panic!("expected timeout failure, got {:?}", other),
    }
    assert_eq!(title_of(&extracts[2]), "gamma");
}

#[tokio::test]
async fn test_not_found_status() {
    let site = spawn_site().await;
    let urls = vec![candidate(site, "/missing")];

    let extracts = fetcher(fast_fetch_config()).fetch_all(&urls).await;

    assert_eq!(
        extracts,
        vec![ArticleExtract::Failure {
            url: urls[0].url.clone(),
            error: "HTTP 404".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_extracted_text_is_truncated_and_clean() {
    let site = spawn_site().await;
    let config = ContentFetchConfig {
        max_chars_per_page: 12,
        ..fast_fetch_config()
    };

    let extracts = fetcher(config)
        .fetch_all(&[candidate(site, "/article/long-title-for-truncation")])
        .await;

    match &extracts[0] {
        ArticleExtract::Success { title, text } => {
            assert_eq!(title, "long-title-f");
            assert_eq!(text, "long-title-f");
            assert!(text.is_ascii());
        }
        other => panic!("expected success, got {:?}", other),
    }
}
