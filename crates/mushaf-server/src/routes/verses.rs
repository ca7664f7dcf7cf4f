//! Verse endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use mushaf_client::{ChapterVersesQuery, VerseResponse, VersesPage};
use serde::Deserialize;

use super::positive_param;
use crate::error::ServerError;
use crate::state::AppState;

/// Query parameters for `GET /api/chapters/{id}/verses`.
#[derive(Debug, Default, Deserialize)]
pub struct ChapterVersesParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    /// Comma-separated translation resource ids.
    pub translations: Option<String>,
}

impl ChapterVersesParams {
    fn into_query(self) -> Result<ChapterVersesQuery, ServerError> {
        let defaults = ChapterVersesQuery::default();
        let mut query = ChapterVersesQuery::default()
            .page(positive_param("Query", "page", self.page.as_deref(), defaults.page)?)
            .per_page(positive_param(
                "Query",
                "per_page",
                self.per_page.as_deref(),
                defaults.per_page,
            )?);
        if let Some(ids) = self.translations.filter(|ids| !ids.is_empty()) {
            query = query.translations(ids);
        }
        Ok(query)
    }
}

/// Query parameters for `GET /api/verses/{key}`.
#[derive(Debug, Default, Deserialize)]
pub struct VerseParams {
    pub translations: Option<String>,
}

/// `GET /api/chapters/{id}/verses`
pub async fn chapter_verses_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<ChapterVersesParams>, QueryRejection>,
) -> Result<Json<VersesPage>, ServerError> {
    let chapter_id = positive_param("Path", "id", Some(&id), 1)?;
    let Query(params) = query?;
    let query = params.into_query()?;

    let page = state.client.verses().by_chapter(chapter_id, &query).await?;
    Ok(Json(page))
}

/// `GET /api/verses/{key}`
pub async fn verse_by_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    query: Result<Query<VerseParams>, QueryRejection>,
) -> Result<Json<VerseResponse>, ServerError> {
    let Query(params) = query?;
    let verse = state
        .client
        .verses()
        .by_key(&key, params.translations.as_deref())
        .await?;
    Ok(Json(VerseResponse { verse }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults() {
        let query = ChapterVersesParams::default().into_query().unwrap();
        assert_eq!(query, ChapterVersesQuery::default());
    }

    #[test]
    fn test_params_override() {
        let query = ChapterVersesParams {
            page: Some("2".into()),
            per_page: Some("50".into()),
            translations: Some("131".into()),
        }
        .into_query()
        .unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 50);
        assert_eq!(query.translations.as_deref(), Some("131"));
    }

    #[test]
    fn test_params_reject_zero_per_page() {
        let params = ChapterVersesParams {
            per_page: Some("0".into()),
            ..Default::default()
        };
        assert!(matches!(params.into_query(), Err(ServerError::BadRequest(_))));
    }
}
