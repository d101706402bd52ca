mod analyzer;
mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod persistence;
mod roles;
mod routes;
mod scoring;
mod state;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::persistence::PgAnalysisStore;
use crate::roles::RoleCatalog;
use crate::routes::build_router;
use crate::state::AppState;

/// Largest accepted request body; resumes are uploaded whole.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let catalog = RoleCatalog::load(config.role_catalog_path.as_deref())?;

    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgAnalysisStore::new(db));

    let llm = match &config.anthropic_api_key {
        Some(key) => {
            let mut client = LlmClient::new(key.clone(), config.llm_model.clone())?;
            if let Some(base_url) = &config.anthropic_base_url {
                client = client.with_base_url(base_url);
            }
            info!("LLM client initialized (model: {})", client.model());
            Some(client)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI analyzer disabled");
            None
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        store,
        llm,
    };

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
