mod config;
mod errors;
mod layout;
mod notice;
mod render;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notice::date::SystemClock;
use crate::render::{FontTypeface, FsAssetLoader};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Diary API v{}", env!("CARGO_PKG_VERSION"));

    // Font is parsed once; a missing or invalid font file is fatal.
    let typeface = FontTypeface::from_file(&config.font_path, config.font_size_px)?;
    info!(
        "Loaded font {} at {}px",
        config.font_path.display(),
        typeface.px()
    );

    let assets = FsAssetLoader::new(&config.assets_dir);
    info!("Serving backgrounds from {}", config.assets_dir.display());

    let state = AppState {
        typeface: Arc::new(typeface),
        assets: Arc::new(assets),
        clock: Arc::new(SystemClock),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("API is listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
