//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Content API this instance forwards to.
    pub content_api: String,
}

/// Process liveness only. The content API is not contacted.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        content_api: state.client.base_url().to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mushaf_auth::StaticTokenManager;
    use mushaf_client::ContentClient;
    use tower::ServiceExt;

    use crate::config::ServerConfig;

    #[tokio::test]
    async fn reports_version_and_content_api() {
        let client = ContentClient::builder()
            .base_url("http://127.0.0.1:1/content/api/v4")
            .token_manager(Arc::new(StaticTokenManager::new("t", "c")))
            .build()
            .unwrap();
        let app = health_routes().with_state(AppState::new(client, ServerConfig::new()));

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.content_api, "http://127.0.0.1:1/content/api/v4/");
    }
}
