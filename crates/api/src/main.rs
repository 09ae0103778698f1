//! Date Logger - HTTP server
//!
//! Main entry point for `datelogd`.

use std::sync::Arc;

use anyhow::Context;
use datelog_infra::config;
use datelog_lib::utils::init_tracing;
use datelog_lib::{bind, serve, AppContext};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration; report once logging is up
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }

    let ctx = Arc::new(AppContext::new(config).context("failed to build application context")?);
    let listener = bind(&ctx).await?;

    serve(ctx, listener, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
