//! Merge pattern and structural candidates into one mention per skill.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::extract::CandidateMention;
use crate::model::clamp_unit;
use crate::taxonomy::Taxonomy;
use crate::text::clean_phrase;

/// Floor for merged mentions of known skills.
pub const DEFAULT_MIN_KNOWN_CONFIDENCE: f32 = 0.5;

#[derive(Debug, Clone, Copy)]
pub struct Merger {
    min_known_confidence: f32,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_KNOWN_CONFIDENCE)
    }
}

impl Merger {
    #[must_use]
    pub fn new(min_known_confidence: f32) -> Self {
        Self {
            min_known_confidence: clamp_unit(min_known_confidence),
        }
    }

    /// Key every resolvable mention by canonical name.
    ///
    /// Pattern mentions are visited first and a later mention only replaces
    /// the kept one with strictly higher confidence, so ties favour pattern
    /// output and then earlier mentions.
    #[must_use]
    pub fn merge(
        &self,
        taxonomy: &Taxonomy,
        pattern: Vec<CandidateMention>,
        structural: Vec<CandidateMention>,
    ) -> BTreeMap<String, CandidateMention> {
        let mut merged: BTreeMap<String, CandidateMention> = BTreeMap::new();
        let mut dropped = 0usize;

        for mut mention in pattern.into_iter().chain(structural) {
            let canonical = match mention.canonical_name.take() {
                Some(name) => Some(name),
                None => taxonomy
                    .resolve(&clean_phrase(&mention.raw_text))
                    .map(str::to_string),
            };
            let Some(canonical) = canonical else {
                trace!(raw = %mention.raw_text, "unresolved mention dropped");
                dropped += 1;
                continue;
            };
            mention.canonical_name = Some(canonical.clone());

            match merged.get(&canonical) {
                Some(kept) if mention.base_confidence <= kept.base_confidence => {}
                _ => {
                    merged.insert(canonical, mention);
                }
            }
        }

        for mention in merged.values_mut() {
            mention.base_confidence = mention.base_confidence.max(self.min_known_confidence);
        }
        debug!(kept = merged.len(), dropped, "merged mentions");
        merged
    }
}

/// Merge with the default known-skill floor.
#[must_use]
pub fn merge(
    taxonomy: &Taxonomy,
    pattern: Vec<CandidateMention>,
    structural: Vec<CandidateMention>,
) -> BTreeMap<String, CandidateMention> {
    Merger::default().merge(taxonomy, pattern, structural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SourceMethod, Span};
    use crate::test_utils::fixtures::builtin_taxonomy;

    fn mention(raw: &str, source: SourceMethod, confidence: f32) -> CandidateMention {
        CandidateMention::new(raw, source, Span::new(0, raw.len()), confidence)
    }

    #[test]
    fn pattern_wins_exact_ties() {
        let taxonomy = builtin_taxonomy();
        let merged = merge(
            &taxonomy,
            vec![mention("python", SourceMethod::Pattern, 0.8)],
            vec![mention("Python", SourceMethod::Structural, 0.8).with_canonical("Python")],
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged["Python"].source_method, SourceMethod::Pattern);
    }

    #[test]
    fn higher_confidence_wins() {
        let taxonomy = builtin_taxonomy();
        let merged = merge(
            &taxonomy,
            vec![mention("Python", SourceMethod::Pattern, 0.55)],
            vec![mention("Python", SourceMethod::Structural, 0.9)],
        );
        assert_eq!(merged["Python"].source_method, SourceMethod::Structural);
        assert!((merged["Python"].base_confidence - 0.9).abs() < 1e-6);
    }

    #[test]
    fn unresolved_mentions_are_dropped_and_others_resolved() {
        let taxonomy = builtin_taxonomy();
        let merged = merge(
            &taxonomy,
            vec![
                mention("Underwater Basketweaving", SourceMethod::Pattern, 0.9),
                mention("a strong Python", SourceMethod::Pattern, 0.7),
            ],
            vec![mention("database management systems", SourceMethod::Structural, 0.5)],
        );
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert!(keys.contains(&"Python"));
        assert!(!keys.iter().any(|k| k.contains("Basketweaving")));
        assert_eq!(merged["Python"].canonical_name.as_deref(), Some("Python"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn known_skills_are_floored() {
        let taxonomy = builtin_taxonomy();
        let merged = merge(&taxonomy, vec![mention("SQL", SourceMethod::Pattern, 0.2)], Vec::new());
        assert!((merged["SQL"].base_confidence - 0.5).abs() < 1e-6);

        let strict = Merger::new(0.0).merge(&taxonomy, vec![mention("SQL", SourceMethod::Pattern, 0.2)], Vec::new());
        assert!((strict["SQL"].base_confidence - 0.2).abs() < 1e-6);
    }
}
