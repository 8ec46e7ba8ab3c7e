//! Dashboard HTTP API
//!
//! HTTP layer for the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /` - Dashboard page
//! - `GET /_layout` - Page layout as JSON
//! - `GET /_dependencies` - Control-to-chart binding table
//! - `POST /_update` - Recompute charts for changed controls
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Unknown paths get a JSON `NOT_FOUND` error.
//!
//! # Example
//!
//! ```rust,ignore
//! use spacex_dash::api::{serve, ApiConfig, AppState};
//! use spacex_dash::dataset::Dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Arc::new(Dataset::load("spacex_launch_dash.csv")?);
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(dataset, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    let dashboard_routes = Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/_layout", get(routes::dashboard::layout))
        .route("/_dependencies", get(routes::dashboard::dependencies))
        .route("/_update", post(routes::update::update))
        .layer(DefaultBodyLimit::max(max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .merge(dashboard_routes)
        .nest("/health", health_routes)
        .fallback(routes::dashboard::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
