//! Records returned by the content API.
//!
//! Every value here is decoded straight from an upstream payload. Ids, keys and
//! ordering are whatever upstream sent.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Chapters
// ─────────────────────────────────────────────────────────────────────────────

/// A chapter (surah).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Ordinal id, 1 to 114.
    pub id: u16,
    /// `makkah` or `madinah`.
    pub revelation_place: String,
    pub revelation_order: u16,
    /// Whether the chapter opens with the bismillah.
    pub bismillah_pre: bool,
    pub name_simple: String,
    pub name_complex: String,
    pub name_arabic: String,
    pub verses_count: u16,
    /// First and last mushaf page.
    pub pages: Vec<u32>,
    pub translated_name: TranslatedName,
}

/// Localized chapter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatedName {
    pub language_name: String,
    pub name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Verses
// ─────────────────────────────────────────────────────────────────────────────

/// A verse (ayah).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub id: u32,
    pub verse_number: u16,
    /// `chapter:verse`, e.g. `2:255`.
    pub verse_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub juz_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hizb_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rub_el_hizb_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruku_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manzil_number: Option<u16>,
    #[serde(default)]
    pub sajdah_type: Option<String>,
    #[serde(default)]
    pub sajdah_number: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_uthmani: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_simple: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_indopak: Option<String>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Verse {
    /// Whether any script variant of the text is present.
    pub fn has_text(&self) -> bool {
        self.text().is_some()
    }

    /// Preferred text: Uthmani, then simple, then IndoPak.
    pub fn text(&self) -> Option<&str> {
        self.text_uthmani
            .as_deref()
            .or(self.text_simple.as_deref())
            .or(self.text_indopak.as_deref())
    }
}

/// A translation attached to a verse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub id: u32,
    /// Translation resource the text comes from.
    pub resource_id: u32,
    pub text: String,
    pub resource_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_language_name: Option<String>,
}

/// Paging information accompanying a verse list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub per_page: u32,
    pub current_page: u32,
    /// `None` on the last page.
    pub next_page: Option<u32>,
    pub total_pages: u32,
    pub total_records: u32,
}

impl Pagination {
    pub fn is_last_page(&self) -> bool {
        self.next_page.is_none()
    }
}

/// One page of verses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersesPage {
    pub verses: Vec<Verse>,
    pub pagination: Pagination,
}

// ─────────────────────────────────────────────────────────────────────────────
// Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// `{ "chapters": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

/// `{ "verse": {...} }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseResponse {
    pub verse: Verse,
}
