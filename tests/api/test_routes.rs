// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - GET / returns the usage message
//! - /search only accepts POST
//! - Unknown routes return 404

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use search_digest::api::{create_app, AppState, WelcomeResponse, WELCOME_MESSAGE};
use search_digest::search::DigestService;
use tower::util::ServiceExt; // for `oneshot`

use crate::support::{fast_fetch_config, quick_retry_config, StaticProvider};

fn setup_state() -> AppState {
    let service = DigestService::new(
        StaticProvider::new(vec![]),
        &quick_retry_config(1),
        fast_fetch_config(),
    );
    AppState::new(service)
}

#[tokio::test]
async fn test_root_returns_welcome_message() {
    let app = create_app(setup_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let welcome: WelcomeResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(welcome.message, WELCOME_MESSAGE);
}

#[tokio::test]
async fn test_search_rejects_get() {
    let app = create_app(setup_state());

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_app(setup_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/search")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
