//! Authenticated request executor.

use std::sync::Arc;
use std::time::Duration;

use mushaf_auth::{
    ClientCredentialsTokenManager, Credentials, OAuthConfig, SharedTokenManager,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{ChaptersApi, SearchApi, VersesApi};
use crate::error::{BuildError, Error, Result};

/// Default content API base URL.
pub const DEFAULT_BASE_URL: &str = "https://apis-prelive.quran.foundation/content/api/v4";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the access token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Header carrying the client identifier.
pub const CLIENT_ID_HEADER: &str = "x-client-id";

/// Content API client.
///
/// Cheap to clone; clones share the HTTP connection pool and token manager.
///
/// # Example
///
/// ```no_run
/// use mushaf_auth::{Credentials, OAuthConfig};
/// use mushaf_client::ContentClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ContentClient::builder()
///     .credentials(OAuthConfig::default(), Credentials::new("id", "secret"))
///     .build()?;
///
/// let chapters = client.chapters().list().await?;
/// println!("{} chapters", chapters.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ContentClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    tokens: SharedTokenManager,
    invalidate_on_unauthorized: bool,
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl ContentClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// The token manager used for every request.
    pub fn token_manager(&self) -> &SharedTokenManager {
        &self.inner.tokens
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the chapters API.
    pub fn chapters(&self) -> ChaptersApi {
        ChaptersApi::new(self.clone())
    }

    /// Access the verses API.
    pub fn verses(&self) -> VersesApi {
        VersesApi::new(self.clone())
    }

    /// Access the search API.
    pub fn search(&self) -> SearchApi {
        SearchApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request execution
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an endpoint. Each segment is percent-encoded on its own.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.inner.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        self.request(segments, None::<&()>).await
    }

    /// Make an authenticated GET request with optional query parameters and
    /// decode the JSON body. No shape validation beyond "is JSON".
    pub async fn request<T, Q>(&self, segments: &[&str], query: Option<&Q>) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let token = self.inner.tokens.get_access_token().await?;
        let client_id = self.inner.tokens.client_id().ok_or_else(|| {
            Error::AuthConfiguration("client id is not set (QURAN_CLIENT_ID)".to_string())
        })?;

        let url = self.url(segments);
        tracing::debug!(path = %url.path(), "GET content API");

        let mut request = self
            .inner
            .http
            .get(url)
            .header(AUTH_TOKEN_HEADER, token)
            .header(CLIENT_ID_HEADER, client_id)
            .timeout(self.inner.timeout);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        self.handle_response(response).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let path = response.url().path().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), %path, %body, "Content API returned error");

            if status == reqwest::StatusCode::UNAUTHORIZED && self.inner.invalidate_on_unauthorized
            {
                self.inner.tokens.invalidate().await;
            }

            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(Error::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| {
            Error::MalformedResponse(format!("response from {} is not valid JSON: {}", path, e))
        })
    }
}

/// Builder for creating a [`ContentClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    token_manager: Option<SharedTokenManager>,
    oauth: Option<(OAuthConfig, Credentials)>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    invalidate_on_unauthorized: bool,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use an existing token manager.
    pub fn token_manager(mut self, manager: SharedTokenManager) -> Self {
        self.token_manager = Some(manager);
        self
    }

    /// Authenticate with the client-credentials grant.
    ///
    /// Ignored when [`token_manager`](Self::token_manager) is also set.
    pub fn credentials(mut self, config: OAuthConfig, credentials: Credentials) -> Self {
        self.oauth = Some((config, credentials));
        self
    }

    /// Set the request timeout, for content requests and the token exchange alike.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Drop the cached token whenever the content API answers 401.
    pub fn invalidate_token_on_unauthorized(mut self, enabled: bool) -> Self {
        self.invalidate_on_unauthorized = enabled;
        self
    }

    /// Build the client.
    pub fn build(self) -> std::result::Result<ContentClient, BuildError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(BuildError::NotABase(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("mushaf-client/{}", env!("CARGO_PKG_VERSION")));

        // Shared with the token exchange
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        let tokens = match self.token_manager {
            Some(manager) => manager,
            None => {
                let (config, credentials) = self.oauth.unwrap_or_default();
                Arc::new(
                    ClientCredentialsTokenManager::new(config, credentials)
                        .with_http_client(http.clone()),
                )
            }
        };

        Ok(ContentClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout,
                tokens,
                invalidate_on_unauthorized: self.invalidate_on_unauthorized,
            }),
        })
    }
}
