//! API routes.

pub mod chapters;
pub mod health;
pub mod search;
pub mod verses;

pub use chapters::list_chapters_handler;
pub use health::{HealthResponse, health_routes};
pub use search::{SearchParams, search_handler};
pub use verses::{ChapterVersesParams, VerseParams, chapter_verses_handler, verse_by_key_handler};

use axum::extract::rejection::QueryRejection;

use crate::error::ServerError;

/// Parse a positive integer parameter, falling back to `default` when absent.
///
/// Query strings arrive as text so that bad numbers produce our own error body
/// instead of the extractor's plain-text rejection.
pub(crate) fn positive_param(
    kind: &str,
    name: &str,
    value: Option<&str>,
    default: u32,
) -> Result<u32, ServerError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ServerError::BadRequest(format!(
            "{} parameter \"{}\" must be a positive integer",
            kind, name
        ))),
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
