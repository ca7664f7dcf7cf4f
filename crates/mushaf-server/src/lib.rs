//! JSON API server for the Quran Foundation content API.
//!
//! Exposes chapters, verses and search over HTTP, backed by a single shared
//! [`ContentClient`] so every request reuses one cached access token.
//!
//! # Example
//!
//! ```no_run
//! use mushaf_client::ContentClient;
//! use mushaf_server::{Server, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContentClient::builder().build()?;
//! let config = ServerConfig::new().with_bind_address("127.0.0.1:8080".parse()?);
//!
//! Server::new(client, config).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::{ErrorResponse, Result, ServerError};
pub use state::AppState;

use std::net::SocketAddr;

use axum::Router;
use mushaf_client::ContentClient;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// The mushaf HTTP server.
pub struct Server {
    /// Application state.
    state: AppState,
}

impl Server {
    /// Create a new server with the given client and configuration.
    pub fn new(client: ContentClient, config: ServerConfig) -> Self {
        Self {
            state: AppState::new(client, config),
        }
    }

    /// Create a server from a pre-built application state.
    pub fn from_state(state: AppState) -> Self {
        Self { state }
    }

    /// Build the router with all routes and middleware.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(routes::health_routes())
            .nest("/api", Self::api_routes())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    fn api_routes() -> Router<AppState> {
        use axum::routing::get;

        Router::new()
            .route("/chapters", get(routes::list_chapters_handler))
            .route(
                "/chapters/{id}/verses",
                get(routes::chapter_verses_handler),
            )
            .route("/verses/{key}", get(routes::verse_by_key_handler))
            .route("/search", get(routes::search_handler))
    }

    /// Run the server on the configured address.
    pub async fn run(self) -> Result<()> {
        let addr = self.state.config.bind_address;
        self.run_on(addr).await
    }

    /// Run the server on a specific address.
    pub async fn run_on(self, addr: SocketAddr) -> Result<()> {
        let router = self.router();

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!(
            addr = %addr,
            base_url = %self.state.client.base_url(),
            "Starting server"
        );

        axum::serve(listener, router)
            .await
            .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get the configured bind address.
    pub fn bind_address(&self) -> SocketAddr {
        self.state.config.bind_address
    }
}
