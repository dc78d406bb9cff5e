//! Fugo Creative site server
//!
//! Serves the compiled Leptos bundle and proxies allow-listed remote images.
//! All page data is fetched by the browser; nothing here talks to the CMS.

mod config;
mod handlers;
mod routes;
mod state;

use fugo_content::ImagePolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    if !config.static_dir.join("index.html").exists() {
        tracing::warn!("⚠ No index.html in {}", config.static_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release crates/fugo-web/index.html");
    }

    let images = ImagePolicy::default();
    for pattern in images.patterns() {
        tracing::info!("  Image host: {}://{}{}", pattern.protocol, pattern.hostname, pattern.pathname);
    }

    let state = AppState::new(images, config.image_cache_secs)?;
    let app = routes::router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("🚀 fugo-server running on http://{}", config.bind_addr);
    tracing::info!("  GET /health       - Health check");
    tracing::info!("  GET /_image?url=  - Allow-listed image proxy");
    tracing::info!("  GET /*            - Site bundle from {}", config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
