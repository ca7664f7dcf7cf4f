//! Client error types.

use mushaf_auth::AuthError;
use thiserror::Error;

/// Errors returned by content operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Client credentials are not configured.
    #[error("Auth configuration error: {0}")]
    AuthConfiguration(String),

    /// The token endpoint rejected the credentials or was unreachable.
    #[error("Authentication failed: {message}")]
    AuthFailure {
        /// HTTP status from the token endpoint, if any.
        status: Option<u16>,
        /// Upstream message or transport error.
        message: String,
    },

    /// The content API could not be reached.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The content API answered with a non-2xx status.
    #[error("Upstream error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The content API answered 2xx with a body of the wrong shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// HTTP status of an upstream rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            Error::AuthFailure { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Upstream { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::AuthConfiguration(_) | Error::AuthFailure { .. } | Error::Upstream { status: 401, .. }
        )
    }

    /// Check if this is an upstream server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Upstream { status, .. } if *status >= 500)
    }
}

impl From<AuthError> for Error {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Configuration(msg) => Error::AuthConfiguration(msg),
            AuthError::Failure { status, message } => Error::AuthFailure { status, message },
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a client.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL cannot be used as a base: {0}")]
    NotABase(String),

    /// HTTP client construction failed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_conversion() {
        let err: Error = AuthError::Configuration("missing".into()).into();
        assert!(matches!(err, Error::AuthConfiguration(ref m) if m == "missing"));
        assert!(err.is_auth_error());

        let err: Error = AuthError::Failure {
            status: Some(401),
            message: "invalid_client".into(),
        }
        .into();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_classification() {
        let not_found = Error::Upstream {
            status: 404,
            body: String::new(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_server_error());

        let server = Error::Upstream {
            status: 503,
            body: "unavailable".into(),
        };
        assert!(server.is_server_error());
        assert_eq!(server.to_string(), "Upstream error (503): unavailable");

        assert!(!Error::MalformedResponse("x".into()).is_auth_error());
    }
}
