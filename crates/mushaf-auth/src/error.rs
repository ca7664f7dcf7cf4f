//! Error types for token acquisition.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while obtaining an access token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Client identifier or secret is missing.
    #[error("Auth configuration error: {0}")]
    Configuration(String),

    /// Token endpoint rejected the credentials or could not be reached.
    #[error("Authentication failed: {message}")]
    Failure {
        /// HTTP status from the token endpoint, if a response was received.
        status: Option<u16>,
        /// Upstream message or transport error description.
        message: String,
    },
}

impl AuthError {
    pub(crate) fn failure(status: Option<u16>, message: impl Into<String>) -> Self {
        AuthError::Failure {
            status,
            message: message.into(),
        }
    }
}
