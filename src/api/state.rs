//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::callbacks::CallbackRegistry;
use crate::dataset::Dataset;
use crate::layout::Layout;

/// Shared application state for all handlers
///
/// Everything here is built before the server starts and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Launch records every chart is computed from
    pub dataset: Arc<Dataset>,
    /// Page layout served to the browser
    pub layout: Arc<Layout>,
    /// Binding table that turns control changes into chart updates
    pub callbacks: Arc<CallbackRegistry>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with the standard bindings
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        Self::with_callbacks(dataset, CallbackRegistry::default(), config)
    }

    /// Create state with a custom binding table
    pub fn with_callbacks(
        dataset: Arc<Dataset>,
        callbacks: CallbackRegistry,
        config: ApiConfig,
    ) -> Self {
        let layout = Layout::build(&dataset);
        Self {
            dataset,
            layout: Arc::new(layout),
            callbacks: Arc::new(callbacks),
            config: Arc::new(config),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_body_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            max_body_size: 64 * 1024,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<&crate::config::ServerConfig> for ApiConfig {
    fn from(server: &crate::config::ServerConfig) -> Self {
        Self::new(server.host.clone(), server.port)
    }
}
