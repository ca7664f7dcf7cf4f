//! API endpoint implementations.
//!
//! Each operation builds its own query parameters, runs the request through
//! [`ContentClient::request`](crate::ContentClient::request) and checks the
//! shape of what comes back.

mod chapters;
mod search;
mod verses;

pub use chapters::ChaptersApi;
pub use search::{DEFAULT_SEARCH_LANGUAGE, SearchApi, SearchQuery};
pub use verses::{ChapterVersesQuery, TEXT_FIELDS, TRANSLATION_FIELDS, VersesApi};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Remove `name` from a JSON object body and decode it.
pub(crate) fn take_field<T: DeserializeOwned>(body: &mut Value, name: &str) -> Result<T> {
    let value = body
        .as_object_mut()
        .and_then(|object| object.remove(name))
        .ok_or_else(|| Error::MalformedResponse(format!("missing `{}` field", name)))?;

    serde_json::from_value(value)
        .map_err(|e| Error::MalformedResponse(format!("invalid `{}` field: {}", name, e)))
}

/// Decode a whole response body.
pub(crate) fn decode<T: DeserializeOwned>(body: Value, what: &str) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| Error::MalformedResponse(format!("invalid {} response: {}", what, e)))
}
