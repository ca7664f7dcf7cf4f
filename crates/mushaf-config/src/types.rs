//! Configuration types.
//!
//! Every field is optional so layers can be merged; consumers fall back to the
//! library defaults for anything left unset.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable holding the OAuth client id.
pub const ENV_CLIENT_ID: &str = "QURAN_CLIENT_ID";
/// Environment variable holding the OAuth client secret.
pub const ENV_CLIENT_SECRET: &str = "QURAN_CLIENT_SECRET";
/// Environment variable overriding the token endpoint.
pub const ENV_AUTH_URL: &str = "QURAN_API_AUTH_URL";
/// Environment variable overriding the content API base URL.
pub const ENV_BASE_URL: &str = "QURAN_API_BASE_URL";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MushafConfig {
    pub auth: AuthSection,
    pub api: ApiSection,
    pub server: ServerSection,
}

/// `[auth]`: token endpoint and client credentials.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Prefer `QURAN_CLIENT_SECRET`; a secret in a file triggers a warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl std::fmt::Debug for AuthSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSection")
            .field("token_url", &self.token_url)
            .field("scope", &self.scope)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

/// `[api]`: content API access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Drop the cached token when the content API answers 401.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalidate_token_on_unauthorized: Option<bool>,
}

/// `[server]`: JSON API listener.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,
}

/// Overwrite `target` when `value` is set.
fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}

impl MushafConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Merge another config on top of this one (other takes priority).
    pub fn merge(&mut self, other: MushafConfig) {
        overlay(&mut self.auth.token_url, other.auth.token_url);
        overlay(&mut self.auth.scope, other.auth.scope);
        overlay(&mut self.auth.client_id, other.auth.client_id);
        overlay(&mut self.auth.client_secret, other.auth.client_secret);

        overlay(&mut self.api.base_url, other.api.base_url);
        overlay(&mut self.api.timeout_secs, other.api.timeout_secs);
        overlay(
            &mut self.api.invalidate_token_on_unauthorized,
            other.api.invalidate_token_on_unauthorized,
        );

        overlay(&mut self.server.bind, other.server.bind);
    }

    /// Apply `QURAN_*` environment overrides read through `lookup`.
    ///
    /// Empty values are treated as unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        overlay(&mut self.auth.client_id, read(ENV_CLIENT_ID));
        overlay(&mut self.auth.client_secret, read(ENV_CLIENT_SECRET));
        overlay(&mut self.auth.token_url, read(ENV_AUTH_URL));
        overlay(&mut self.api.base_url, read(ENV_BASE_URL));
    }

    /// Check that set values are usable URLs.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("auth.token_url", &self.auth.token_url),
            ("api.base_url", &self.api.base_url),
        ] {
            if let Some(url) = value
                && !(url.starts_with("http://") || url.starts_with("https://"))
            {
                return Err(ConfigError::InvalidValue {
                    field: name.to_string(),
                    message: format!("'{}' is not an http(s) URL", url),
                });
            }
        }
        Ok(())
    }
}
