// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod search;

pub use errors::{ApiError, ErrorResponse};
pub use handlers::{root_handler, WelcomeResponse, WELCOME_MESSAGE};
pub use http_server::{create_app, start_server, AppState};
pub use search::{search_handler, SearchApiRequest, SearchApiResponse};
