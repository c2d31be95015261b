// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API response types

use serde::{Deserialize, Serialize};

/// Response body for POST /search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchApiResponse {
    /// Newline-delimited digest of the fetched articles
    pub results: String,
}

impl SearchApiResponse {
    pub fn new(results: String) -> Self {
        Self { results }
    }
}
