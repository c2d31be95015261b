// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end digest tests through DigestService
//!
//! A canned provider stands in for the search engine and local axum servers
//! stand in for the result pages.

use crate::support::{fast_fetch_config, spawn_site, quick_retry_config, StaticProvider};
use search_digest::search::{DigestService, SearchConfig, SearchResult};
use std::net::SocketAddr;

fn url(addr: SocketAddr, path: &str) -> SearchResult {
    SearchResult::from_url(format!("http://{}{}", addr, path))
}

#[tokio::test]
async fn test_rust_programming_scenario() {
    let mut sites = Vec::new();
    for _ in 0..6 {
        sites.push(spawn_site().await);
    }

    // 15 results over 6 hosts: first-seen URL per host decides what is fetched.
    // Host 2 times out and host 4 answers 404.
    let results = vec![
        url(sites[0], "/article/site-0"),
        url(sites[1], "/article/site-1"),
        url(sites[0], "/article/site-0-dup"),
        url(sites[2], "/hang"),
        url(sites[1], "/article/site-1-dup"),
        url(sites[3], "/article/site-3"),
        url(sites[2], "/article/site-2-dup"),
        url(sites[4], "/missing"),
        url(sites[3], "/article/site-3-dup"),
        url(sites[5], "/article/site-5"),
        url(sites[4], "/article/site-4-dup"),
        url(sites[5], "/article/site-5-dup"),
        url(sites[0], "/article/site-0-dup2"),
        url(sites[1], "/article/site-1-dup2"),
        url(sites[3], "/article/site-3-dup2"),
    ];
    assert_eq!(results.len(), 15);

    let provider = StaticProvider::new(results);
    let service = DigestService::new(
        provider.clone(),
        &SearchConfig::default(),
        fast_fetch_config(),
    );

    let digest = service.search_digest("rust programming").await.unwrap();

    assert_eq!(
        provider.queries.lock().unwrap().as_slice(),
        &[("rust programming".to_string(), 15)]
    );

    let titles: Vec<&str> = digest
        .lines()
        .filter_map(|line| line.strip_prefix("Title: "))
        .collect();
    assert_eq!(titles, vec!["site-0", "site-1", "site-3", "site-5"]);
    assert_eq!(digest.lines().filter(|l| l.starts_with("Text: ")).count(), 4);
    assert_eq!(digest.lines().filter(|l| *l == "-----").count(), 4);
    assert!(!digest.contains("dup"));
    assert!(!digest.contains("too late"));
}

#[tokio::test]
async fn test_digest_block_layout() {
    let site = spawn_site().await;
    let provider = StaticProvider::new(vec![url(site, "/article/layout")]);
    let service = DigestService::new(provider, &SearchConfig::default(), fast_fetch_config());

    let digest = service.search_digest("layout").await.unwrap();
    let lines: Vec<&str> = digest.lines().collect();

    assert_eq!(lines[0], "Title: layout");
    assert!(lines[1].starts_with("Text: layout covers ownership"));
    assert_eq!(lines.last(), Some(&"-----"));
    assert!(!digest.ends_with('\n'));
    assert!(!digest.contains("Home | About"));
}

#[tokio::test]
async fn test_empty_search_result() {
    let provider = StaticProvider::new(vec![]);
    let service = DigestService::new(provider.clone(), &quick_retry_config(5), fast_fetch_config());

    let digest = service.search_digest("no such thing").await.unwrap();

    assert_eq!(digest, "");
    assert_eq!(provider.queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_all_pages_failing_gives_empty_digest() {
    let a = spawn_site().await;
    let b = spawn_site().await;
    let provider = StaticProvider::new(vec![url(a, "/missing"), url(b, "/error")]);
    let service = DigestService::new(provider, &SearchConfig::default(), fast_fetch_config());

    assert_eq!(service.search_digest("broken").await.unwrap(), "");
}
