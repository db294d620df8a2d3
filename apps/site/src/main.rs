mod assets;
mod charts;
mod config;
mod content;
mod errors;
mod filter;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::load_assets;
use crate::charts::build_dashboard;
use crate::config::Config;
use crate::content::ContentStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (all variables default, so this only fails
    // on a malformed PORT)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitrine site v{}", env!("CARGO_PKG_VERSION"));

    // Build the content store (compiled-in literals, infallible)
    let content = ContentStore::new();
    info!(
        "Content store initialized ({} experience entries, {} gallery entries)",
        content.experience().len(),
        content.gallery().len()
    );

    // Precompute the dashboard chart specs. A builder error means a bad
    // literal table — fail at startup, never serve a broken dashboard.
    let dashboard = build_dashboard(&content)?;
    info!("Dashboard specs built (pie total: {})", dashboard.category_pie.total());

    // Best-effort load of the optional assets; each degrades independently
    let assets = load_assets(&config, content.profile());

    // Build app state
    let state = AppState {
        content: Arc::new(content),
        assets: Arc::new(assets),
        dashboard: Arc::new(dashboard),
        config: config.clone(),
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
