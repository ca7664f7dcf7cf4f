//! Typed client for the Quran Foundation content API.
//!
//! Requests are authenticated with an OAuth2 client-credentials token obtained
//! and cached by [`mushaf_auth`]. Responses are checked against the expected
//! shape and decoded into the records in [`types`]; anything else surfaces as
//! one of the [`Error`] variants.
//!
//! # Example
//!
//! ```no_run
//! use mushaf_auth::{Credentials, OAuthConfig};
//! use mushaf_client::{ChapterVersesQuery, ContentClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContentClient::builder()
//!     .credentials(OAuthConfig::default(), Credentials::new("id", "secret"))
//!     .build()?;
//!
//! // All chapters
//! let chapters = client.chapters().list().await?;
//!
//! // Al-Baqarah with Sahih International
//! let page = client
//!     .verses()
//!     .by_chapter(2, &ChapterVersesQuery::default().translations("20"))
//!     .await?;
//! if let Some(next) = page.pagination.next_page {
//!     println!("more on page {}", next);
//! }
//!
//! // A single verse
//! let verse = client.verses().by_key("2:255", None).await?;
//!
//! // Search
//! let results = client.search().verses("mercy").await?;
//! # let _ = (chapters, verse, results);
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Chapters**: list all chapters
//! - **Verses**: page through a chapter, fetch one verse by key
//! - **Search**: full-text verse search

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{ChapterVersesQuery, ChaptersApi, SearchApi, SearchQuery, VersesApi};
pub use client::{ClientBuilder, ContentClient, DEFAULT_BASE_URL};
pub use error::{BuildError, Error, Result};
pub use types::*;
