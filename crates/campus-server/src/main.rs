//! Binary entrypoint for the campus navigator HTTP server.
//!
//! Configuration is read from the environment; see [`campus_server::config`].

use campus_server::config::{ServerConfig, DEFAULT_LOG_FILTER};
use campus_server::router::build_router;
use campus_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;
    let state = AppState::campus();
    tracing::info!(
        locations = state.service.graph().node_count(),
        paths = state.service.graph().edge_count(),
        "campus map loaded"
    );

    let app = build_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("campus server listening on http://{}", addr);
    tracing::info!("endpoints: /api/graph, /api/dijkstra?start=0&end=9, /api/search?query=Library, /api/sort?reference=0");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
