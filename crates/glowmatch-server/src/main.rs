#![allow(clippy::doc_markdown)]
//! glowmatch Server - REST API for skincare product recommendations.

use std::sync::Arc;

use clap::Parser;
use glowmatch_core::GlowConfig;
use glowmatch_server::{build_router, AppState, ServerArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();
    let mut config = GlowConfig::load_from(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting glowmatch server...");
    tracing::info!("Dataset: {}", config.catalog.dataset.display());
    if let Some(snapshot) = &config.catalog.snapshot {
        tracing::info!("Snapshot: {}", snapshot.display());
    }

    let loader = config.clone();
    let index = tokio::task::spawn_blocking(move || loader.load_index()).await??;
    tracing::info!(
        products = index.len(),
        vocabulary = index.vocabulary_size(),
        "Catalog ready"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(index, config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("glowmatch server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
