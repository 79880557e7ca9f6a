mod config;
mod directory;
mod errors;
mod llm_client;
mod models;
mod recommend;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::catalog::mock_students;
use crate::llm_client::LlmClient;
use crate::recommend::requester::GeminiMatcher;
use crate::routes::build_router;
use crate::session::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on a missing credential)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Talent Hub API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.gemini_api_key.clone(),
        config.gemini_base_url.clone(),
        config.llm_timeout_secs,
    )?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let profiles = Arc::new(mock_students());
    info!("Directory loaded with {} profiles", profiles.len());
    info!("Search sessions expire after {} idle minutes", config.session_ttl_mins);

    // Build app state
    let state = AppState {
        llm: llm.clone(),
        profiles,
        matcher: Arc::new(GeminiMatcher(llm)),
        sessions: SessionStore::with_ttl(chrono::Duration::minutes(config.session_ttl_mins)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
