//! Search endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use mushaf_client::{SearchQuery, VersesPage};
use serde::Deserialize;

use super::positive_param;
use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub language: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> Result<SearchQuery, ServerError> {
        let q = self
            .q
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ServerError::BadRequest("Query parameter \"q\" is required".into()))?;

        let defaults = SearchQuery::new(q);
        let page = positive_param("Query", "page", self.page.as_deref(), defaults.page)?;
        let per_page =
            positive_param("Query", "per_page", self.per_page.as_deref(), defaults.per_page)?;

        let mut query = defaults.page(page).per_page(per_page);
        if let Some(language) = self.language.filter(|l| !l.is_empty()) {
            query = query.language(language);
        }
        Ok(query)
    }
}

/// `GET /api/search`
pub async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<VersesPage>, ServerError> {
    let Query(params) = query?;
    let query = params.into_query()?;

    let page = state.client.search().verses_with_options(&query).await?;
    tracing::debug!(
        q = %query.q,
        results = page.verses.len(),
        "Search completed"
    );
    Ok(Json(page))
}
