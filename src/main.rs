//! MedNexus server entry point: seed the record store, mount the
//! dashboard router and serve it until shutdown.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mednexus::api::dashboard_router;
use mednexus::config;
use mednexus::store::RecordStore;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MedNexus starting v{}", config::APP_VERSION);

    let store = Arc::new(RecordStore::seed());
    tracing::info!(patients = store.patient_count(), "Record store seeded");

    let app = dashboard_router(store);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Dashboard API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
