// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use search_digest::{
    api::{start_server, AppState},
    search::{ContentFetchConfig, DigestService, SearchConfig},
};
use std::{env, net::SocketAddr};
use tracing_subscriber::EnvFilter;

/// Keyword search digest server
#[derive(Parser, Debug)]
#[command(name = "search-digest")]
#[command(about = "Search the web for a keyword and serve a text digest of the top pages", long_about = None)]
struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server to
    #[arg(long, env = "API_PORT", default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let search_config = SearchConfig::from_env();
    search_config.validate().map_err(|e| anyhow!(e))?;
    let content_config = ContentFetchConfig::from_env();
    content_config.validate().map_err(|e| anyhow!(e))?;

    tracing::info!(
        "Search: up to {} results, {} attempts; page fetch timeout {}s",
        search_config.max_results,
        search_config.max_attempts,
        content_config.timeout_per_page_secs
    );

    let service = DigestService::from_config(&search_config, content_config)?;
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    start_server(addr, AppState::new(service)).await
}
