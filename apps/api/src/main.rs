mod assets;
mod config;
mod errors;
mod layout;
mod models;
mod report;
mod routes;
mod scoring;
mod state;
mod surface;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assets::logo::{HttpLogoSource, LogoSource};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hiring report API v{}", env!("CARGO_PKG_VERSION"));

    let http = reqwest::Client::new();
    let logo: Arc<dyn LogoSource> = Arc::new(HttpLogoSource::new(
        http,
        config.logo_url.clone(),
        Duration::from_secs(config.logo_fetch_timeout_secs),
    ));
    match &config.logo_url {
        Some(url) => info!(url, "Logo source configured"),
        None => info!("No LOGO_URL set; reports use the text header"),
    }

    let state = AppState {
        config: config.clone(),
        logo,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
