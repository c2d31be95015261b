// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Digest formatting

use super::types::ArticleExtract;

const SEPARATOR: &str = "-----";

/// Join successful extracts into one newline-delimited text blob
///
/// Each success contributes a `Title:`, a `Text:` and a separator line.
/// Failures are dropped; no successes yields an empty string.
pub fn format_digest(extracts: &[ArticleExtract]) -> String {
    extracts
        .iter()
        .filter_map(|extract| match extract {
            ArticleExtract::Success { title, text } => {
                Some(format!("Title: {}\nText: {}\n{}", title, text, SEPARATOR))
            }
            ArticleExtract::Failure { .. } => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
