//! OAuth 2.0 client-credentials exchange.

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, Result};

/// Default token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://prelive-oauth2.quran.foundation/oauth2/token";

/// Scope requested for content access.
pub const DEFAULT_SCOPE: &str = "content";

/// Token endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub token_url: String,
    pub scope: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }
}

impl OAuthConfig {
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}

/// Client identifier and secret.
///
/// Either half may be absent; that is reported as [`AuthError::Configuration`]
/// the first time a token is requested, not at construction.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::from_parts(Some(client_id.into()), Some(client_secret.into()))
    }

    /// Build from optional parts. Empty strings count as absent.
    pub fn from_parts(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id: client_id.filter(|v| !v.is_empty()),
            client_secret: client_secret.filter(|v| !v.is_empty()),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Both halves, or a configuration error naming what is missing.
    pub fn require(&self) -> Result<(&str, &str)> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            (None, Some(_)) => Err(AuthError::Configuration(
                "client id is not set (QURAN_CLIENT_ID)".to_string(),
            )),
            (Some(_), None) => Err(AuthError::Configuration(
                "client secret is not set (QURAN_CLIENT_SECRET)".to_string(),
            )),
            (None, None) => Err(AuthError::Configuration(
                "QURAN_CLIENT_ID and QURAN_CLIENT_SECRET must be set".to_string(),
            )),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// Token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

/// `Basic` authorization header value for a client id/secret pair.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{}:{}", client_id, client_secret))
    )
}

/// Exchange client credentials for an access token.
pub async fn exchange_client_credentials(
    http: &reqwest::Client,
    config: &OAuthConfig,
    credentials: &Credentials,
) -> Result<TokenResponse> {
    let (client_id, client_secret) = credentials.require()?;

    let form = [
        ("grant_type", "client_credentials"),
        ("scope", config.scope.as_str()),
    ];

    let response = http
        .post(&config.token_url)
        .header(AUTHORIZATION, basic_auth_header(client_id, client_secret))
        .form(&form)
        .send()
        .await
        .map_err(|e| AuthError::failure(None, format!("Token request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AuthError::failure(
            Some(status.as_u16()),
            format!("Token endpoint returned {}: {}", status, error_text),
        ));
    }

    response.json::<TokenResponse>().await.map_err(|e| {
        AuthError::failure(
            Some(status.as_u16()),
            format!("Failed to parse token response: {}", e),
        )
    })
}
