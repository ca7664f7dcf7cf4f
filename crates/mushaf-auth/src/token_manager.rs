//! Access token caching.
//!
//! A single token slot is shared by every caller of a manager. Freshness is
//! checked against an injected [`Clock`], and the slot itself is an injectable
//! [`TokenCache`] so callers and tests can observe or seed it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::clock::{SharedClock, SystemClock};
use crate::error::{AuthError, Result};
use crate::oauth::{Credentials, OAuthConfig, exchange_client_credentials};

/// Tokens expiring within this window are refreshed before use.
pub const REFRESH_MARGIN: Duration = Duration::minutes(5);

// ============================================================================
// CachedToken / TokenCache
// ============================================================================

/// An access token and the instant it stops being valid.
#[derive(Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Usable without refresh: expiry lies strictly beyond `now + REFRESH_MARGIN`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now + REFRESH_MARGIN
    }
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("token", &"[redacted]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Shared single-slot token cell.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    slot: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-seeded with a token.
    pub fn with_token(token: CachedToken) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token))),
        }
    }

    pub async fn get(&self) -> Option<CachedToken> {
        self.slot.read().await.clone()
    }

    /// Overwrite the slot. Last writer wins.
    pub async fn store(&self, token: CachedToken) {
        *self.slot.write().await = Some(token);
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

// ============================================================================
// TokenManager Trait
// ============================================================================

/// Supplies access tokens for content API calls.
#[async_trait]
pub trait TokenManager: Send + Sync + std::fmt::Debug {
    /// Get a valid access token, exchanging credentials if necessary.
    async fn get_access_token(&self) -> Result<String>;

    /// Client identifier sent alongside the token, if configured.
    fn client_id(&self) -> Option<&str>;

    /// Drop any cached token so the next call re-authenticates.
    async fn invalidate(&self);
}

/// Shared token manager for use across async contexts.
pub type SharedTokenManager = Arc<dyn TokenManager>;

// ============================================================================
// ClientCredentialsTokenManager
// ============================================================================

/// Token manager backed by the OAuth2 client-credentials grant.
///
/// Concurrent callers that find the slot stale each run their own exchange; the
/// lock is only held to read and to overwrite, never across the network call.
#[derive(Debug)]
pub struct ClientCredentialsTokenManager {
    http: reqwest::Client,
    config: OAuthConfig,
    credentials: Credentials,
    cache: TokenCache,
    clock: SharedClock,
}

impl ClientCredentialsTokenManager {
    pub fn new(config: OAuthConfig, credentials: Credentials) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            credentials,
            cache: TokenCache::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Use a specific HTTP client for token requests.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Use an externally owned cache slot.
    pub fn with_cache(mut self, cache: TokenCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_clock(mut self, clock: SharedClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }
}

#[async_trait]
impl TokenManager for ClientCredentialsTokenManager {
    async fn get_access_token(&self) -> Result<String> {
        self.credentials.require()?;

        if let Some(cached) = self.cache.get().await
            && cached.is_fresh(self.clock.now())
        {
            tracing::debug!(expires_at = %cached.expires_at, "Using cached access token");
            return Ok(cached.token);
        }

        tracing::info!(token_url = %self.config.token_url, "Requesting access token");
        let response = exchange_client_credentials(&self.http, &self.config, &self.credentials)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Token exchange failed"))?;

        let expires_at = i64::try_from(response.expires_in)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
            .ok_or_else(|| AuthError::failure(None, "expires_in out of range"))?;

        self.cache
            .store(CachedToken::new(response.access_token.clone(), expires_at))
            .await;
        tracing::info!(%expires_at, "Access token refreshed");

        Ok(response.access_token)
    }

    fn client_id(&self) -> Option<&str> {
        self.credentials.client_id()
    }

    async fn invalidate(&self) {
        tracing::debug!("Invalidating cached access token");
        self.cache.clear().await;
    }
}

// ============================================================================
// StaticTokenManager (for testing)
// ============================================================================

/// Token manager that hands out a fixed token without any network access.
#[derive(Debug)]
pub struct StaticTokenManager {
    token: std::result::Result<String, AuthError>,
    client_id: Option<String>,
    issued: AtomicU32,
    invalidations: AtomicU32,
}

impl StaticTokenManager {
    pub fn new(token: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            token: Ok(token.into()),
            client_id: Some(client_id.into()),
            issued: AtomicU32::new(0),
            invalidations: AtomicU32::new(0),
        }
    }

    /// Manager whose every token request fails with `error`.
    pub fn failing(error: AuthError) -> Self {
        Self {
            token: Err(error),
            client_id: None,
            issued: AtomicU32::new(0),
            invalidations: AtomicU32::new(0),
        }
    }

    pub fn issued_count(&self) -> u32 {
        self.issued.load(Ordering::SeqCst)
    }

    pub fn invalidation_count(&self) -> u32 {
        self.invalidations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenManager for StaticTokenManager {
    async fn get_access_token(&self) -> Result<String> {
        self.issued.fetch_add(1, Ordering::SeqCst);
        self.token.clone()
    }

    fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    async fn invalidate(&self) {
        self.invalidations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Create a shared client-credentials token manager.
pub fn create_token_manager(config: OAuthConfig, credentials: Credentials) -> SharedTokenManager {
    Arc::new(ClientCredentialsTokenManager::new(config, credentials))
}
