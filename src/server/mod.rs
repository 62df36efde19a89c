//! HTTP surface: the dashboard page plus the JSON endpoints it polls.

mod handlers;
mod page;

use crate::core::dashboard::DashboardEngine;
use crate::utils::error::{DashError, Result};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use handlers::{HealthResponse, PieQuery, ScatterQuery};

pub type SharedEngine = Arc<DashboardEngine>;

pub fn router(engine: DashboardEngine) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/layout", get(handlers::layout))
        .route("/api/pie", get(handlers::pie))
        .route("/api/scatter", get(handlers::scatter))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(Arc::new(engine))
}

pub async fn serve(engine: DashboardEngine, addr: SocketAddr) -> Result<()> {
    let app = router(engine);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DashError::ServerError {
            message: format!("failed to bind {}: {}", addr, e),
        })?;
    tracing::info!("🚀 Dashboard listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("👋 Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
