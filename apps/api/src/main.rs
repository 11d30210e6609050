mod catalog;
mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{CatalogSource, ResourceCatalog};
use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::render::a4_page_config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::RoadmapStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Roadmap API v{}", env!("CARGO_PKG_VERSION"));

    // Load the resource library once; it is read-only afterwards
    let source = CatalogSource::from_optional_path(config.resource_catalog_path.clone());
    let catalog = Arc::new(ResourceCatalog::load(&source)?);

    // Initialize generation gateway
    let gateway = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        config.generation_timeout,
    )?;
    info!(
        "Generation gateway initialized (model: {}, base url: {}, timeout: {:?})",
        llm_client::MODEL,
        config.openai_base_url,
        config.generation_timeout
    );

    let page_config = a4_page_config();

    // Build app state
    let state = AppState {
        catalog,
        store: RoadmapStore::new(),
        gateway: Arc::new(gateway),
        page_config,
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
