// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Domain deduplication of search results

use std::collections::HashSet;
use tracing::debug;
use url::Url;

use super::types::{CandidateUrl, SearchResult};

/// Keep the first URL seen for each distinct network location
///
/// Entries without a URL, or whose URL does not parse, are skipped.
/// Output order follows input order.
pub fn dedupe(results: &[SearchResult]) -> Vec<CandidateUrl> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for result in results {
        let Some(url) = result.url.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        let Some(domain) = network_location(url) else {
            debug!("Skipping unparseable result URL: {}", url);
            continue;
        };

        if seen.insert(domain.clone()) {
            candidates.push(CandidateUrl {
                url: url.to_string(),
                domain,
            });
        }
    }

    candidates
}

/// Host plus explicit port, e.g. `example.com` or `127.0.0.1:8080`
///
/// Hosts come back lowercased from `Url::parse`, and a port equal to the
/// scheme default is dropped, so `https://Example.COM:443/a` and
/// `https://example.com/b` share one location.
pub fn network_location(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    Some(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
