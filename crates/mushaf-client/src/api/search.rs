//! Search API.

use serde_json::Value;

use super::decode;
use crate::client::ContentClient;
use crate::error::Result;
use crate::types::VersesPage;

/// Language searched when none is given.
pub const DEFAULT_SEARCH_LANGUAGE: &str = "en";

/// Query parameters for verse search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchQuery {
    /// Search text. Passed through as-is; callers reject empty queries.
    pub q: String,
    pub language: String,
    pub page: u32,
    pub per_page: u32,
}

impl SearchQuery {
    /// Query with default language `en`, page 1, 20 per page.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            language: DEFAULT_SEARCH_LANGUAGE.to_string(),
            page: 1,
            per_page: 20,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }
}

/// Search API client.
pub struct SearchApi {
    client: ContentClient,
}

impl SearchApi {
    pub(crate) fn new(client: ContentClient) -> Self {
        Self { client }
    }

    /// Search verses with default options.
    pub async fn verses(&self, query: &str) -> Result<VersesPage> {
        self.verses_with_options(&SearchQuery::new(query)).await
    }

    /// Search verses.
    pub async fn verses_with_options(&self, query: &SearchQuery) -> Result<VersesPage> {
        let body: Value = self
            .client
            .request(&["verses", "search"], Some(query))
            .await?;
        decode(body, "search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query = SearchQuery::new("mercy");
        assert_eq!(query.language, "en");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 20);
    }

    #[test]
    fn test_search_query_builder() {
        let query = SearchQuery::new("light").language("ar").page(3).per_page(5);
        assert_eq!(
            query,
            SearchQuery {
                q: "light".into(),
                language: "ar".into(),
                page: 3,
                per_page: 5,
            }
        );
    }
}
