//! Transport adapter serving the weather gateway over HTTP.

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};
use weather_core::Gateway;

pub mod routes;

pub use routes::router;

/// Serve the gateway on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, gateway: Gateway) -> Result<()> {
    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
