use proptest::prelude::*;

use crate::config::{Config, ScoringConfig};
use crate::model::{ProficiencyLevel, SkillCategory, SkillRecord, SourceMethod};
use crate::proficiency::SignalWeights;

const SKILL_WORDS: &[&str] = &[
    "Python", "SQL", "AWS", "Docker", "Kubernetes", "Linux", "Excel", "Rust", "machine learning",
    "cloud computing", "dbms", "Underwater Basketweaving", "teamwork", "C++", "CI/CD",
];

const FILLER_WORDS: &[&str] = &[
    "a", "the", "strong", "proven", "using", "excellent", "-", "•", ",", ";", ".", "and",
];

const EVIDENCE: &[&str] = &[
    "for 7 years",
    "for six months",
    "over a decade",
    "led the team",
    "architected the platform",
    "enterprise scale",
    "basic understanding",
    "advanced knowledge",
    "mentored engineers",
    "assisted with",
    "certified",
    "",
];

pub fn arb_level() -> impl Strategy<Value = ProficiencyLevel> {
    prop::sample::select(ProficiencyLevel::ALL.to_vec())
}

pub fn arb_category() -> impl Strategy<Value = SkillCategory> {
    prop_oneof![
        Just(SkillCategory::Technical),
        Just(SkillCategory::Soft),
        Just(SkillCategory::domain(SkillCategory::CERTIFICATION_DOMAIN)),
        "[a-z]{3,10}".prop_map(|name| SkillCategory::domain(&name)),
    ]
}

/// Skill-like phrases with random filler around them.
pub fn arb_phrase() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(FILLER_WORDS), 0..3),
        prop::sample::select(SKILL_WORDS),
        prop::collection::vec(prop::sample::select(FILLER_WORDS), 0..2),
        "[ \t]{0,3}",
    )
        .prop_map(|(before, skill, after, pad)| {
            format!("{pad}{} {skill} {}{pad}", before.join(" "), after.join(" "))
        })
}

/// Context windows mixing skill mentions and proficiency evidence.
pub fn arb_context() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(SKILL_WORDS), prop::sample::select(EVIDENCE)),
        0..4,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(skill, evidence)| format!("Worked with {skill} {evidence}."))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

pub fn arb_skill_record() -> impl Strategy<Value = SkillRecord> {
    (
        prop::sample::select(SKILL_WORDS),
        arb_category(),
        arb_level(),
        0.0f32..=1.0,
        0.0f32..=1.0,
        arb_context(),
    )
        .prop_map(|(name, category, proficiency, confidence, extraction, context)| SkillRecord {
            name: name.to_string(),
            category,
            proficiency,
            confidence,
            is_backed: false,
            backing_certificate: None,
            issuer: None,
            issued: None,
            source: SourceMethod::Pattern,
            extraction_confidence: extraction,
            context,
        })
}

pub fn arb_weights() -> impl Strategy<Value = SignalWeights> {
    (0.01f32..1.0, 0.01f32..1.0, 0.01f32..1.0, 0.01f32..1.0, 0.01f32..1.0).prop_map(
        |(keywords, duration, cognitive, project_scale, responsibility)| SignalWeights {
            keywords,
            duration,
            cognitive,
            project_scale,
            responsibility,
        },
    )
}

pub fn arb_config() -> impl Strategy<Value = Config> {
    (arb_weights(), 0.0f32..0.5, 0.0f32..=1.0, 0u32..4, any::<bool>()).prop_map(
        |(weights, backing_boost, min_known_confidence, context_sentences, structural)| {
            let mut config = Config::default();
            config.scoring = ScoringConfig {
                weights,
                backing_boost,
                min_known_confidence,
            };
            config.extraction.context_sentences = context_sentences;
            config.extraction.structural = structural;
            config
        },
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::Config;

    proptest! {
        #[test]
        fn generated_configs_validate(config in arb_config()) {
            prop_assert!(config.validate().is_ok());
            let raw = toml::to_string(&config).unwrap();
            let back = Config::from_toml_str(&raw).unwrap();
            prop_assert_eq!(back.extraction.context_sentences, config.extraction.context_sentences);
        }

        #[test]
        fn generated_records_stay_in_range(record in arb_skill_record()) {
            prop_assert!((0.0..=1.0).contains(&record.confidence));
            prop_assert!(!record.name.is_empty());
        }
    }
}
