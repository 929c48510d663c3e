//! Proficiency scoring: a weighted vote over independent signals.

pub mod signals;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::{ProficiencyLevel, clamp_unit};
pub use signals::{CONTEXT_SIGNALS, Signal, SignalEvaluator};

/// Confidence used when no signal fires.
pub const NO_EVIDENCE_CONFIDENCE: f32 = 0.5;
/// Lower bound for the base confidence when a certification decides.
pub const CERTIFICATION_FLOOR: f32 = 0.8;

const TIE_EPSILON: f32 = 1e-6;

/// Vote weights of the five context signals. Certification has no weight;
/// it overrides the vote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub keywords: f32,
    pub duration: f32,
    pub cognitive: f32,
    pub project_scale: f32,
    pub responsibility: f32,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            keywords: 0.15,
            duration: 0.25,
            cognitive: 0.20,
            project_scale: 0.20,
            responsibility: 0.25,
        }
    }
}

impl SignalWeights {
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("keywords", self.keywords),
            ("duration", self.duration),
            ("cognitive", self.cognitive),
            ("project_scale", self.project_scale),
            ("responsibility", self.responsibility),
        ]
        .into_iter()
    }

    #[must_use]
    pub fn total(&self) -> f32 {
        self.entries().map(|(_, weight)| weight).sum()
    }

    #[must_use]
    pub const fn weight(&self, signal: Signal) -> f32 {
        match signal {
            Signal::Keywords => self.keywords,
            Signal::Duration => self.duration,
            Signal::Cognitive => self.cognitive,
            Signal::ProjectScale => self.project_scale,
            Signal::Responsibility => self.responsibility,
            Signal::Certification => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalVote {
    pub signal: Signal,
    pub level: ProficiencyLevel,
    pub weight: f32,
}

/// Full scoring breakdown, kept for explanations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProficiencyAssessment {
    pub level: ProficiencyLevel,
    /// Final confidence, boost included.
    pub confidence: f32,
    pub base_confidence: f32,
    pub votes: Vec<SignalVote>,
    pub certification_override: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProficiencyCalculator {
    weights: SignalWeights,
}

impl ProficiencyCalculator {
    #[must_use]
    pub const fn new(weights: SignalWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub const fn weights(&self) -> &SignalWeights {
        &self.weights
    }

    /// Level and confidence for `skill` given its context window.
    #[must_use]
    pub fn calculate_proficiency(
        &self,
        skill: &str,
        context: &str,
        certification_text: Option<&str>,
        is_backed: bool,
        confidence_boost: f32,
    ) -> (ProficiencyLevel, f32) {
        let assessment = self.assess(skill, context, certification_text, is_backed, confidence_boost);
        (assessment.level, assessment.confidence)
    }

    #[must_use]
    pub fn assess(
        &self,
        skill: &str,
        context: &str,
        certification_text: Option<&str>,
        is_backed: bool,
        confidence_boost: f32,
    ) -> ProficiencyAssessment {
        let mut votes: Vec<SignalVote> = CONTEXT_SIGNALS
            .iter()
            .filter_map(|evaluator| {
                (evaluator.evaluate)(context).map(|level| SignalVote {
                    signal: evaluator.signal,
                    level,
                    weight: self.weights.weight(evaluator.signal),
                })
            })
            .collect();
        let certified = certification_text.and_then(signals::certification);

        let (level, base_confidence) = match (certified, votes.is_empty()) {
            (None, true) => {
                let level = if is_backed {
                    ProficiencyLevel::Intermediate
                } else {
                    ProficiencyLevel::Beginner
                };
                (level, NO_EVIDENCE_CONFIDENCE)
            }
            (None, false) => {
                let (level, share) = weighted_winner(&votes);
                (level, vote_confidence(share, votes.len()))
            }
            (Some(level), _) => {
                let share = if votes.is_empty() {
                    1.0
                } else {
                    level_share(&votes, level)
                };
                let base = vote_confidence(share, votes.len() + 1).max(CERTIFICATION_FLOOR);
                (level, base)
            }
        };
        if let Some(level) = certified {
            votes.push(SignalVote {
                signal: Signal::Certification,
                level,
                weight: 0.0,
            });
        }

        let confidence = clamp_unit(base_confidence + confidence_boost);
        trace!(skill, level = %level, confidence, votes = votes.len(), "scored proficiency");
        ProficiencyAssessment {
            level,
            confidence,
            base_confidence,
            votes,
            certification_override: certified.is_some(),
        }
    }
}

/// `0.4 + 0.3 * winner share + 0.2 * signals present / 6`.
fn vote_confidence(share: f32, present: usize) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let coverage = present.min(Signal::COUNT) as f32 / Signal::COUNT as f32;
    0.3f32.mul_add(share, 0.2f32.mul_add(coverage, 0.4))
}

fn level_share(votes: &[SignalVote], level: ProficiencyLevel) -> f32 {
    let total: f32 = votes.iter().map(|v| v.weight).sum();
    if total <= 0.0 {
        return 0.0;
    }
    votes
        .iter()
        .filter(|v| v.level == level)
        .map(|v| v.weight)
        .sum::<f32>()
        / total
}

/// Highest summed weight wins; equal sums go to the higher level.
fn weighted_winner(votes: &[SignalVote]) -> (ProficiencyLevel, f32) {
    let mut best = (ProficiencyLevel::Beginner, f32::MIN);
    for level in ProficiencyLevel::ALL {
        let sum: f32 = votes
            .iter()
            .filter(|v| v.level == level)
            .map(|v| v.weight)
            .sum();
        if votes.iter().any(|v| v.level == level) && sum >= best.1 - TIE_EPSILON {
            best = (level, sum);
        }
    }
    (best.0, level_share(votes, best.0))
}
