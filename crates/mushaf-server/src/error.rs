//! Error types for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mushaf_client::Error as ContentError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server error type.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The caller sent an unusable request.
    #[error("{0}")]
    BadRequest(String),

    /// A content operation failed.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ServerError::Content(e) => match e {
                ContentError::AuthConfiguration(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "auth_configuration")
                }
                ContentError::AuthFailure { .. } => (StatusCode::BAD_GATEWAY, "auth_failure"),
                ContentError::Transport(_) => (StatusCode::BAD_GATEWAY, "transport_error"),
                ContentError::Upstream { .. } => (StatusCode::BAD_GATEWAY, "upstream_error"),
                ContentError::MalformedResponse(_) => {
                    (StatusCode::BAD_GATEWAY, "malformed_response")
                }
            },
        }
    }

    /// Message safe to hand back to callers. Upstream bodies stay in the logs.
    fn public_message(&self) -> String {
        match self {
            ServerError::Content(ContentError::Upstream { status, .. }) => {
                format!("Content API returned status {}", status)
            }
            ServerError::Content(ContentError::Transport(_)) => {
                "Content API is unreachable".to_string()
            }
            ServerError::Content(ContentError::AuthFailure { status, .. }) => match status {
                Some(status) => format!("Token endpoint returned status {}", status),
                None => "Token endpoint is unreachable".to_string(),
            },
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!(status = %status, code, error = %self, "Server error");
        } else {
            tracing::warn!(status = %status, code, error = %self, "Client error");
        }

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServerError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                ContentError::AuthConfiguration("no id".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ContentError::AuthFailure {
                    status: Some(401),
                    message: "denied".into(),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ContentError::Upstream {
                    status: 404,
                    body: "nope".into(),
                }
                .into(),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ContentError::MalformedResponse("bad".into()).into(),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_upstream_body_is_not_echoed() {
        let error: ServerError = ContentError::Upstream {
            status: 500,
            body: "stack trace with internals".into(),
        }
        .into();
        let message = error.public_message();
        assert_eq!(message, "Content API returned status 500");
    }

    #[test]
    fn test_bad_request_message_is_verbatim() {
        let error = ServerError::BadRequest("Query parameter \"q\" is required".into());
        assert_eq!(error.public_message(), "Query parameter \"q\" is required");
    }
}
