//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ServerConfig, ShellConfig};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Host configuration
    pub server: Arc<ServerConfig>,
    /// Shell behaviour (navbar seeding)
    pub shell: Arc<ShellConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(server: ServerConfig, shell: ShellConfig) -> Self {
        Self {
            server: Arc::new(server),
            shell: Arc::new(shell),
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the compiled frontend is present
    pub fn assets_available(&self) -> bool {
        self.server.assets_dir.join("index.html").is_file()
    }
}
