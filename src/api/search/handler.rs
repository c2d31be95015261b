// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search API endpoint handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{debug, error, info, warn};

use super::request::SearchApiRequest;
use super::response::SearchApiResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /search - Build a text digest for a keyword
///
/// # Request
/// - `keyword`: Search keyword (required)
///
/// # Response
/// - `results`: `Title:`/`Text:`/`-----` blocks, one per fetched article
///
/// # Errors
/// - 400/415/422: Body is not a valid request
/// - 500 Internal Server Error: Search failed, `detail` carries the message
pub async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchApiRequest>, JsonRejection>,
) -> Result<Json<SearchApiResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected search request: {}", rejection.body_text());
        ApiError::InvalidRequest {
            status: rejection.status().as_u16(),
            message: rejection.body_text(),
        }
    })?;

    debug!("Search request: {:?}", request.keyword);

    let results = state
        .digest_service
        .search_digest(&request.keyword)
        .await
        .map_err(|e| {
            error!("Search for '{}' failed: {}", request.keyword, e);
            ApiError::from(e)
        })?;

    info!(
        "Search complete for '{}': {} chars",
        request.keyword,
        results.len()
    );

    Ok(Json(SearchApiResponse::new(results)))
}
