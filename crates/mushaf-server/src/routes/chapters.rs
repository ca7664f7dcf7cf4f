//! Chapter endpoints.

use axum::{Json, extract::State};
use mushaf_client::ChaptersResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// `GET /api/chapters`
pub async fn list_chapters_handler(
    State(state): State<AppState>,
) -> Result<Json<ChaptersResponse>, ServerError> {
    let chapters = state.client.chapters().list().await?;
    tracing::debug!(count = chapters.len(), "Listed chapters");
    Ok(Json(ChaptersResponse { chapters }))
}
