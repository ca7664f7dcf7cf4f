//! Chapters API.

use serde_json::Value;

use super::take_field;
use crate::client::ContentClient;
use crate::error::Result;
use crate::types::Chapter;

/// Chapters API client.
pub struct ChaptersApi {
    client: ContentClient,
}

impl ChaptersApi {
    pub(crate) fn new(client: ContentClient) -> Self {
        Self { client }
    }

    /// List all chapters in upstream order.
    pub async fn list(&self) -> Result<Vec<Chapter>> {
        let mut body: Value = self.client.get(&["chapters"]).await?;
        take_field(&mut body, "chapters")
    }
}
