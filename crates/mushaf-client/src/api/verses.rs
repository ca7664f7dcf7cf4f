//! Verses API.

use serde::Serialize;
use serde_json::Value;

use super::{decode, take_field};
use crate::client::ContentClient;
use crate::error::{Error, Result};
use crate::types::{Verse, VersesPage};

/// Script variants requested for every verse.
pub const TEXT_FIELDS: &str = "text_uthmani,text_simple,text_indopak";

/// Translation fields requested whenever translations are.
pub const TRANSLATION_FIELDS: &str = "text,resource_name,resource_language_name";

/// Options for listing the verses of a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterVersesQuery {
    pub page: u32,
    pub per_page: u32,
    /// Comma-separated translation resource ids, forwarded unchanged.
    pub translations: Option<String>,
}

impl Default for ChapterVersesQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            translations: None,
        }
    }
}

impl ChapterVersesQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn translations(mut self, ids: impl Into<String>) -> Self {
        self.translations = Some(ids.into());
        self
    }
}

/// Wire parameters shared by the verse endpoints.
#[derive(Debug, Serialize)]
struct VerseParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_page: Option<u32>,
    fields: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    translations: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    translation_fields: Option<&'static str>,
}

impl<'a> VerseParams<'a> {
    fn new(translations: Option<&'a str>) -> Self {
        let translations = translations.filter(|ids| !ids.is_empty());
        Self {
            page: None,
            per_page: None,
            fields: TEXT_FIELDS,
            translations,
            translation_fields: translations.map(|_| TRANSLATION_FIELDS),
        }
    }

    fn paged(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

/// Verses API client.
pub struct VersesApi {
    client: ContentClient,
}

impl VersesApi {
    pub(crate) fn new(client: ContentClient) -> Self {
        Self { client }
    }

    /// List one page of a chapter's verses.
    ///
    /// `chapter_id` is not range-checked; upstream decides what is valid.
    pub async fn by_chapter(&self, chapter_id: u32, query: &ChapterVersesQuery) -> Result<VersesPage> {
        let params = VerseParams::new(query.translations.as_deref()).paged(query.page, query.per_page);
        let chapter = chapter_id.to_string();

        let body: Value = self
            .client
            .request(&["verses", "by_chapter", chapter.as_str()], Some(&params))
            .await?;

        let page: VersesPage = decode(body, "verses")?;
        page.verses.iter().try_for_each(require_text)?;
        Ok(page)
    }

    /// Fetch a single verse by its `chapter:verse` key.
    pub async fn by_key(&self, verse_key: &str, translations: Option<&str>) -> Result<Verse> {
        let params = VerseParams::new(translations);

        let mut body: Value = self
            .client
            .request(&["verses", "by_key", verse_key], Some(&params))
            .await?;

        let verse: Verse = take_field(&mut body, "verse")?;
        require_text(&verse)?;
        Ok(verse)
    }
}

/// Text fields are always requested, so a verse without any is a bad payload.
fn require_text(verse: &Verse) -> Result<()> {
    if verse.has_text() {
        Ok(())
    } else {
        Err(Error::MalformedResponse(format!(
            "verse {} has no text fields",
            verse.verse_key
        )))
    }
}
