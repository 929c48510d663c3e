//! Linguistic annotations consumed by the structural extractor.
//!
//! The engine never parses language itself; it asks a [`LinguisticAnnotator`]
//! for sentences, tokens with dependency labels, and noun chunks. Any
//! annotator (a model-backed parser, a JSON file, the bundled
//! [`RuleBasedAnnotator`]) can be plugged in.

mod rule_based;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpError};
use crate::model::Span;

pub use rule_based::RuleBasedAnnotator;

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adj,
    Adp,
    Det,
    Cconj,
    Pron,
    Num,
    Punct,
    #[serde(other)]
    X,
}

/// Dependency relation between a token and its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepLabel {
    Root,
    Prep,
    Pobj,
    Pcomp,
    Dobj,
    Compound,
    Amod,
    Det,
    Conj,
    Cc,
    Punct,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span: Span,
    /// Index into [`Annotations::sentences`].
    pub sentence: usize,
    pub pos: PartOfSpeech,
    pub dep: DepLabel,
    /// Index of the head token; `None` for roots and unattached tokens.
    #[serde(default)]
    pub head: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounChunk {
    pub span: Span,
    pub sentence: usize,
}

/// Everything an annotator knows about one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub sentences: Vec<Span>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub noun_chunks: Vec<NounChunk>,
}

impl Annotations {
    /// No sentences or no tokens: nothing structural to work with.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty() || self.tokens.is_empty()
    }

    /// Check every span and index against `text`.
    pub fn validate(&self, text: &str) -> Result<()> {
        let in_text = |span: &Span| span.start <= span.end && span.slice(text).is_some();

        for (i, sentence) in self.sentences.iter().enumerate() {
            if !in_text(sentence) {
                return Err(SpError::Annotation(format!(
                    "sentence {i} span {}..{} is outside the text",
                    sentence.start, sentence.end
                )));
            }
        }
        for (i, token) in self.tokens.iter().enumerate() {
            if !in_text(&token.span) || token.span.is_empty() {
                return Err(SpError::Annotation(format!(
                    "token {i} span {}..{} is invalid",
                    token.span.start, token.span.end
                )));
            }
            if token.sentence >= self.sentences.len() {
                return Err(SpError::Annotation(format!(
                    "token {i} refers to missing sentence {}",
                    token.sentence
                )));
            }
            if token.head.is_some_and(|head| head >= self.tokens.len() || head == i) {
                return Err(SpError::Annotation(format!("token {i} has an invalid head")));
            }
        }
        for (i, chunk) in self.noun_chunks.iter().enumerate() {
            if !in_text(&chunk.span) || chunk.sentence >= self.sentences.len() {
                return Err(SpError::Annotation(format!("noun chunk {i} is invalid")));
            }
        }
        Ok(())
    }

    /// Token text, or `""` when the token index is unknown.
    #[must_use]
    pub fn token_text<'a>(&self, text: &'a str, index: usize) -> &'a str {
        self.tokens
            .get(index)
            .and_then(|token| token.span.slice(text))
            .unwrap_or("")
    }

    /// Span covering `index` and all of its descendants.
    ///
    /// Only tokens from the same sentence are considered, and head cycles
    /// are cut rather than followed.
    #[must_use]
    pub fn subtree_span(&self, index: usize) -> Option<Span> {
        let root = self.tokens.get(index)?;
        let mut span = root.span;
        let mut in_subtree = vec![false; self.tokens.len()];
        in_subtree[index] = true;

        // Heads may point forward or backward, so sweep until stable.
        let mut changed = true;
        let mut sweeps = 0;
        while changed && sweeps < self.tokens.len() {
            changed = false;
            sweeps += 1;
            for (i, token) in self.tokens.iter().enumerate() {
                if in_subtree[i] || token.sentence != root.sentence {
                    continue;
                }
                if token.head.is_some_and(|head| in_subtree[head]) {
                    in_subtree[i] = true;
                    span.start = span.start.min(token.span.start);
                    span.end = span.end.max(token.span.end);
                    changed = true;
                }
            }
        }
        Some(span)
    }
}

/// Produces [`Annotations`] for a text.
pub trait LinguisticAnnotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Annotations>;

    /// Short name for logs.
    fn name(&self) -> &'static str {
        "annotator"
    }
}

/// Annotator that always yields nothing; disables structural extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAnnotator;

impl LinguisticAnnotator for NoopAnnotator {
    fn annotate(&self, _text: &str) -> Result<Annotations> {
        Ok(Annotations::default())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
