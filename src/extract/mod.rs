//! Candidate extraction strategies.
//!
//! Both extractors are stateless per call and produce [`CandidateMention`]s;
//! validation, resolution and deduplication happen downstream.

pub mod certificate;
pub mod pattern;
pub mod structural;

use serde::{Deserialize, Serialize};

use crate::model::{SourceMethod, Span};

pub use certificate::{CertificateDetails, certificate_details};
pub use pattern::PatternExtractor;
pub use structural::StructuralExtractor;

/// A phrase some strategy believes names a skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMention {
    pub raw_text: String,
    /// Canonical taxonomy name, when the extractor already resolved it.
    pub canonical_name: Option<String>,
    pub source_method: SourceMethod,
    /// Byte range of the phrase in the document text.
    pub context_span: Span,
    pub base_confidence: f32,
}

impl CandidateMention {
    pub fn new(
        raw_text: impl Into<String>,
        source_method: SourceMethod,
        context_span: Span,
        base_confidence: f32,
    ) -> Self {
        Self {
            raw_text: raw_text.into(),
            canonical_name: None,
            source_method,
            context_span,
            base_confidence: crate::model::clamp_unit(base_confidence),
        }
    }

    #[must_use]
    pub fn with_canonical(mut self, canonical: impl Into<String>) -> Self {
        self.canonical_name = Some(canonical.into());
        self
    }
}
