//! Charter Forge application entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use charter_forge::adapters::http::{api_router, AppState};
use charter_forge::adapters::pdf::LopdfExporter;
use charter_forge::adapters::render::HtmlTemplateRenderer;
use charter_forge::adapters::storage::FileContractStore;
use charter_forge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let state = AppState::new(
        Arc::new(HtmlTemplateRenderer::new()),
        Arc::new(LopdfExporter::new()),
        Arc::new(FileContractStore::new(&config.storage.snapshot_dir)),
    );

    let addr = config.server.socket_addr();
    info!(%addr, snapshot_dir = %config.storage.snapshot_dir, "starting charter-forge");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api_router(state)).await?;

    Ok(())
}
