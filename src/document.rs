//! Input documents and the text-source seam.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpError};
use crate::industry::Industry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Resume,
    Certification,
    #[default]
    Unknown,
}

impl DocumentType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Certification => "certification",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = SpError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "resume" | "cv" => Ok(Self::Resume),
            "certification" | "certificate" | "cert" => Ok(Self::Certification),
            "unknown" => Ok(Self::Unknown),
            other => Err(SpError::Config(format!("unknown document type '{other}'"))),
        }
    }
}

/// A document handed to the engine. The engine only borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub text: String,
    /// Pre-classified industry; the engine classifies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
}

impl Document {
    pub fn new(id: impl Into<String>, doc_type: DocumentType, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            doc_type,
            text: text.into(),
            industry: None,
        }
    }

    #[must_use]
    pub const fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// Fetch text for `id` from `source`; blank text is an error.
    pub fn from_source(
        source: &dyn TextSource,
        id: &str,
        doc_type: DocumentType,
    ) -> Result<Self> {
        let text = source.get_text(id)?;
        if text.trim().is_empty() {
            return Err(SpError::DocumentEmpty(id.to_string()));
        }
        Ok(Self::new(id, doc_type, text))
    }
}

/// Supplies plain text for a document identifier (PDF/OCR conversion
/// happens behind this seam).
pub trait TextSource: Send + Sync {
    fn get_text(&self, id: &str) -> Result<String>;
}

/// Text source backed by a map, for tests and pre-converted input.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextSource {
    texts: HashMap<String, String>,
}

impl MemoryTextSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.texts.insert(id.into(), text.into());
        self
    }
}

impl TextSource for MemoryTextSource {
    fn get_text(&self, id: &str) -> Result<String> {
        self.texts
            .get(id)
            .cloned()
            .ok_or_else(|| SpError::DocumentNotFound(id.to_string()))
    }
}
