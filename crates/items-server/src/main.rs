//! Binary entrypoint for the items HTTP server.
//!
//! Reads configuration from environment variables:
//! - `ITEMS_HOST`: listen host (default: "0.0.0.0")
//! - `ITEMS_PORT`: listen port (default: "8080")
//! - `RUST_LOG`: log filter (default: "info,tower_http=info")

use anyhow::Context;
use items_server::config::ServerConfig;
use items_server::logging::init_logging;
use items_server::router::build_router;
use items_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::new());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("items server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with an error")?;

    tracing::info!("items server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, shutting down");
}
