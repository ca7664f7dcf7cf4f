//! OAuth 2.0 client-credentials token management for the content API.
//!
//! # Components
//!
//! - [`oauth`] - credentials, token endpoint settings, the client-credentials exchange
//! - [`token_manager`] - single-slot token cache with a five minute refresh margin
//! - [`clock`] - injectable time source used for freshness checks

pub mod clock;
pub mod error;
pub mod oauth;
pub mod token_manager;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use error::{AuthError, Result};
pub use oauth::{Credentials, OAuthConfig, TokenResponse};
pub use token_manager::{
    CachedToken, ClientCredentialsTokenManager, REFRESH_MARGIN, SharedTokenManager,
    StaticTokenManager, TokenCache, TokenManager, create_token_manager,
};
