//! Core data models for the scripture API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::core::errors::{BibleError, Result};

/// A Bible translation as listed by the translations endpoint
///
/// Every field must be present; name and description may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name_local: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description_local: Option<String>,
}

// With `deserialize_with` and no `default`, an absent key stays an error.
fn nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

impl Translation {
    /// Decode one element of the `data` list
    pub fn from_entry(entry: &Value) -> Result<Self> {
        Translation::deserialize(entry).map_err(BibleError::shape)
    }

    pub fn name(&self) -> &str {
        self.name_local.as_deref().unwrap_or("null")
    }

    pub fn description(&self) -> &str {
        self.description_local.as_deref().unwrap_or("null")
    }
}

/// Envelope of the translations endpoint
///
/// Entries stay raw so each can be decoded and printed in turn.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationsResponse {
    pub data: Vec<Value>,
}

/// Body format requested from the passage endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Json,
    Html,
    Text,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Json => write!(f, "json"),
            ContentType::Html => write!(f, "html"),
            ContentType::Text => write!(f, "text"),
        }
    }
}

/// Formatting flags sent with a passage request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageOptions {
    pub content_type: ContentType,
    pub include_notes: bool,
    pub include_titles: bool,
    pub include_chapter_numbers: bool,
    pub include_verse_numbers: bool,
    pub include_verse_spans: bool,
    pub use_org_id: bool,
}

impl Default for PassageOptions {
    fn default() -> Self {
        Self {
            content_type: ContentType::Json,
            include_notes: false,
            include_titles: true,
            include_chapter_numbers: false,
            include_verse_numbers: true,
            include_verse_spans: false,
            use_org_id: false,
        }
    }
}

impl PassageOptions {
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_notes(mut self, include: bool) -> Self {
        self.include_notes = include;
        self
    }

    pub fn with_titles(mut self, include: bool) -> Self {
        self.include_titles = include;
        self
    }

    pub fn with_chapter_numbers(mut self, include: bool) -> Self {
        self.include_chapter_numbers = include;
        self
    }

    pub fn with_verse_numbers(mut self, include: bool) -> Self {
        self.include_verse_numbers = include;
        self
    }

    pub fn with_verse_spans(mut self, include: bool) -> Self {
        self.include_verse_spans = include;
        self
    }

    pub fn with_org_id(mut self, use_org_id: bool) -> Self {
        self.use_org_id = use_org_id;
        self
    }

    /// Query parameters in wire order, booleans as lowercase strings
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("content-type", self.content_type.to_string()),
            ("include-notes", self.include_notes.to_string()),
            ("include-titles", self.include_titles.to_string()),
            ("include-chapter-numbers", self.include_chapter_numbers.to_string()),
            ("include-verse-numbers", self.include_verse_numbers.to_string()),
            ("include-verse-spans", self.include_verse_spans.to_string()),
            ("use-org-id", self.use_org_id.to_string()),
        ]
    }
}
