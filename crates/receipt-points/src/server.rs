//! API server setup

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::{lookup_host, TcpListener};

use crate::api::{create_router, AppState};
use crate::config::ServerConfig;
use crate::service::PointsService;

/// Build the router and resolve the bind address.
pub async fn create_server(
    config: &ServerConfig,
    service: Arc<PointsService>,
) -> anyhow::Result<(Router, SocketAddr)> {
    let router = create_router(AppState::new(service));
    let addr = resolve_bind_address(config).await?;
    Ok((router, addr))
}

/// Resolve `host:port`, accepting hostnames as well as IP literals.
pub async fn resolve_bind_address(config: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let bind = config.bind_address();
    let addr = lookup_host(bind.as_str())
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no address found for {bind}"));
    addr
}

/// Run the API server until Ctrl-C.
pub async fn run_server(config: &ServerConfig, service: Arc<PointsService>) -> anyhow::Result<()> {
    let (router, addr) = create_server(config, service).await?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("receipt-points listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Start the server in the background and return the bound address.
///
/// Binding port 0 picks a free port, which is what tests want.
pub async fn start_background_server(
    config: &ServerConfig,
    service: Arc<PointsService>,
) -> anyhow::Result<SocketAddr> {
    let (router, addr) = create_server(config, service).await?;

    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("server error: {}", e);
        }
    });

    Ok(actual_addr)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
