// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod search;

pub use api::{create_app, start_server, AppState};
pub use search::{
    ArticleExtract, CandidateUrl, ContentFetchConfig, DigestError, DigestService, SearchConfig,
    SearchError, SearchResult,
};
