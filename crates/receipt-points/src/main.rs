//! receipt-points - score scanned receipts and serve the results over HTTP

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use receipt_points::core::UuidGenerator;
use receipt_points::server::run_server;
use receipt_points::store::{MemoryStore, Store};
use receipt_points::{PointsService, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI args
    let config = ServerConfig::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting receipt-points v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
    let service = Arc::new(PointsService::new(
        store,
        Arc::new(UuidGenerator),
        config.service_config(),
    ));

    service
        .seed_samples(config.sample_receipts, &mut rand::thread_rng())
        .await?;

    run_server(&config, service).await
}
