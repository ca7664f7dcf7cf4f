//! Content client construction from loaded configuration.

use std::time::Duration;

use anyhow::{Context as _, Result};
use mushaf_auth::{Credentials, OAuthConfig};
use mushaf_client::ContentClient;
use mushaf_config::MushafConfig;

/// Build a [`ContentClient`], falling back to library defaults for unset values.
///
/// Missing credentials are not checked here; the first request reports them.
pub fn build_client(config: &MushafConfig) -> Result<ContentClient> {
    let mut oauth = OAuthConfig::default();
    if let Some(url) = &config.auth.token_url {
        oauth = oauth.with_token_url(url);
    }
    if let Some(scope) = &config.auth.scope {
        oauth = oauth.with_scope(scope);
    }

    let credentials = Credentials::from_parts(
        config.auth.client_id.clone(),
        config.auth.client_secret.clone(),
    );

    let mut builder = ContentClient::builder()
        .credentials(oauth, credentials)
        .invalidate_token_on_unauthorized(
            config.api.invalidate_token_on_unauthorized.unwrap_or(false),
        );
    if let Some(url) = &config.api.base_url {
        builder = builder.base_url(url);
    }
    if let Some(secs) = config.api.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().context("failed to build content client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let client = build_client(&MushafConfig::default()).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://apis-prelive.quran.foundation/content/api/v4/"
        );
    }

    #[test]
    fn test_base_url_from_config() {
        let mut config = MushafConfig::default();
        config.api.base_url = Some("http://localhost:9000/v4".into());
        let client = build_client(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:9000/v4/");
    }

    #[test]
    fn test_client_id_reaches_token_manager() {
        let mut config = MushafConfig::default();
        config.auth.client_id = Some("abc".into());
        let client = build_client(&config).unwrap();
        assert_eq!(client.token_manager().client_id(), Some("abc"));
    }
}
