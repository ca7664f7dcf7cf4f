//! Application state shared across handlers.

use std::sync::Arc;

use mushaf_client::ContentClient;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Content API client; clones share one token cache.
    pub client: ContentClient,

    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(client: ContentClient, config: ServerConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}
