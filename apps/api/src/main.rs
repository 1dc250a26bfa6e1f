mod assistant;
mod catalog;
mod config;
mod errors;
mod extraction;
mod extractors;
mod llm_client;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use std::net::SocketAddr;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::{CareerCatalog, Dataset};
use crate::config::Config;
use crate::errors::panic_response;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    // Load the career dataset; no dataset, no server
    let dataset = Dataset::load(&config.csv_path)
        .with_context(|| format!("Failed to load career dataset from {}", config.csv_path))?;
    if dataset.is_empty() {
        warn!("Career dataset is empty; every catalog lookup will return not found");
    }
    let catalog = CareerCatalog::new(Arc::new(dataset));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone()).context("Failed to build LLM client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        catalog,
        llm: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
