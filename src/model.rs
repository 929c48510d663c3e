//! Core data types shared across the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpError;

/// Category a canonical skill belongs to.
///
/// Serialized as `technical`, `soft`, or `domain:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain(String),
}

impl SkillCategory {
    /// Domain category used for certification entries.
    pub const CERTIFICATION_DOMAIN: &'static str = "certification";

    #[must_use]
    pub fn domain(name: &str) -> Self {
        Self::Domain(name.trim().to_lowercase())
    }

    #[must_use]
    pub fn is_certification(&self) -> bool {
        matches!(self, Self::Domain(name) if name == Self::CERTIFICATION_DOMAIN)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Technical => f.write_str("technical"),
            Self::Soft => f.write_str("soft"),
            Self::Domain(name) => write!(f, "domain:{name}"),
        }
    }
}

impl FromStr for SkillCategory {
    type Err = SpError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_lowercase();
        match value.as_str() {
            "technical" => Ok(Self::Technical),
            "soft" => Ok(Self::Soft),
            other => {
                let name = other.strip_prefix("domain:").unwrap_or(other).trim();
                if name.is_empty() || name.contains(char::is_whitespace) {
                    Err(SpError::TaxonomyInvalid(format!("unknown skill category '{raw}'")))
                } else {
                    Ok(Self::Domain(name.to_string()))
                }
            }
        }
    }
}

impl From<SkillCategory> for String {
    fn from(category: SkillCategory) -> Self {
        category.to_string()
    }
}

impl TryFrom<String> for SkillCategory {
    type Error = SpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordered proficiency scale; `Beginner < Intermediate < Advanced < Expert`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// Position on the scale, 0 for `Beginner`.
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which extraction strategy produced a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMethod {
    Pattern,
    Structural,
}

impl fmt::Display for SourceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern => f.write_str("pattern"),
            Self::Structural => f.write_str("structural"),
        }
    }
}

/// Half-open byte range into a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Slice `text` by this span; `None` when out of bounds or off a char boundary.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// A scored skill for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub category: SkillCategory,
    pub proficiency: ProficiencyLevel,
    pub confidence: f32,
    pub is_backed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backing_certificate: Option<String>,
    /// Issuing organization of the certificate this record comes from or
    /// is backed by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    /// Issue date of that certificate, as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
    pub source: SourceMethod,
    /// Base confidence of the mention that produced this record.
    pub extraction_confidence: f32,
    /// Text window the proficiency signals were evaluated on.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub context: String,
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
#[must_use]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}
