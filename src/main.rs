use clap::Parser;
use link_directory::api::build_router;
use link_directory::config::Config;
use link_directory::store::ConcurrentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_level)?)
        .init();

    // 1. Store, seeded before it is shared:
    let store = Arc::new(ConcurrentStore::with_seed(
        config.seed_entries().iter().copied(),
    ));
    tracing::info!("Directory ready with {} link(s)", store.len().await);

    // 2. HTTP Router:
    let app = build_router(store);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
