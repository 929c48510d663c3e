//! Extraction over linguistic annotations: noun chunks and
//! `prep(in|with) -> object` subtrees.

use std::sync::Arc;

use tracing::debug;

use super::CandidateMention;
use crate::annotate::{Annotations, DepLabel};
use crate::error::Result;
use crate::model::{SourceMethod, Span};
use crate::taxonomy::Taxonomy;
use crate::text::{clean_phrase, split_phrases};

/// Confidence for an exact taxonomy hit.
pub const EXACT_CONFIDENCE: f32 = 0.9;
/// Confidence for compound hits and unresolved objects.
pub const WEAK_CONFIDENCE: f32 = 0.5;

const OBJECT_PREPOSITIONS: [&str; 2] = ["in", "with"];

#[derive(Debug, Clone)]
pub struct StructuralExtractor {
    taxonomy: Arc<Taxonomy>,
}

impl StructuralExtractor {
    #[must_use]
    pub const fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// Validate `annotations` against `text`, then extract per sentence.
    pub fn extract(&self, text: &str, annotations: &Annotations) -> Result<Vec<CandidateMention>> {
        annotations.validate(text)?;

        let mut mentions = Vec::new();
        for sentence in 0..annotations.sentences.len() {
            self.from_noun_chunks(text, annotations, sentence, &mut mentions);
            self.from_prepositional_objects(text, annotations, sentence, &mut mentions);
        }
        debug!(count = mentions.len(), "structural mentions");
        Ok(mentions)
    }

    fn from_noun_chunks(
        &self,
        text: &str,
        annotations: &Annotations,
        sentence: usize,
        out: &mut Vec<CandidateMention>,
    ) {
        for chunk in annotations.noun_chunks.iter().filter(|c| c.sentence == sentence) {
            let Some(raw) = chunk.span.slice(text) else {
                continue;
            };
            if raw.split_whitespace().count() < 2 {
                continue;
            }
            let Some(hit) = self.taxonomy.resolve_match(&clean_phrase(raw)) else {
                continue;
            };
            let confidence = if hit.exact { EXACT_CONFIDENCE } else { WEAK_CONFIDENCE };
            out.push(
                CandidateMention::new(raw, SourceMethod::Structural, chunk.span, confidence)
                    .with_canonical(hit.canonical),
            );
        }
    }

    fn from_prepositional_objects(
        &self,
        text: &str,
        annotations: &Annotations,
        sentence: usize,
        out: &mut Vec<CandidateMention>,
    ) {
        for (index, token) in annotations.tokens.iter().enumerate() {
            if token.sentence != sentence
                || !matches!(token.dep, DepLabel::Pobj | DepLabel::Pcomp | DepLabel::Dobj)
            {
                continue;
            }
            let Some(head) = token.head else { continue };
            let governed_by_prep = annotations.tokens[head].dep == DepLabel::Prep
                && OBJECT_PREPOSITIONS
                    .iter()
                    .any(|prep| annotations.token_text(text, head).eq_ignore_ascii_case(prep));
            if !governed_by_prep {
                continue;
            }
            let Some(span) = annotations.subtree_span(index) else {
                continue;
            };
            let Some(phrase) = span.slice(text) else {
                continue;
            };
            for (piece_span, piece) in split_phrases(phrase, span.start) {
                self.push_object(piece, piece_span, out);
            }
        }
    }

    fn push_object(&self, raw: &str, span: Span, out: &mut Vec<CandidateMention>) {
        let cleaned = clean_phrase(raw);
        if cleaned.is_empty() {
            return;
        }
        let mention = match self.taxonomy.resolve_exact(&cleaned) {
            Some(canonical) => {
                CandidateMention::new(raw, SourceMethod::Structural, span, EXACT_CONFIDENCE)
                    .with_canonical(canonical)
            }
            None => CandidateMention::new(raw, SourceMethod::Structural, span, WEAK_CONFIDENCE),
        };
        out.push(mention);
    }
}
