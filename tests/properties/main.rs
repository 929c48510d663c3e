//! Property-based tests for pipeline invariants.

use proptest::prelude::*;

use skillprof::backing::{CertificationBacker, DEFAULT_BACKING_BOOST};
use skillprof::config::Config;
use skillprof::document::{Document, DocumentType};
use skillprof::engine::SkillEngine;
use skillprof::model::{ProficiencyLevel, SkillCategory, SkillRecord, SourceMethod};
use skillprof::proficiency::ProficiencyCalculator;
use skillprof::test_utils::fixtures::builtin_taxonomy;
use skillprof::text::{clean_phrase, split_phrases, split_sentences};

const SKILLS: &[&str] = &[
    "Python", "SQL", "AWS", "Docker", "Kubernetes", "Linux", "Excel", "Rust", "machine learning",
];

const EVIDENCE: &[&str] = &[
    "for 3 years",
    "led the team",
    "architected the platform",
    "enterprise scale",
    "basic understanding",
    "mentored engineers",
    "",
];

fn context() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop::sample::select(SKILLS), prop::sample::select(EVIDENCE)),
        0..4,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(skill, evidence)| format!("Experienced in {skill} {evidence}."))
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn record(name: &str, confidence: f32, context: String) -> SkillRecord {
    SkillRecord {
        name: name.to_string(),
        category: SkillCategory::Technical,
        proficiency: ProficiencyLevel::Beginner,
        confidence,
        is_backed: false,
        backing_certificate: None,
        issuer: None,
        issued: None,
        source: SourceMethod::Pattern,
        extraction_confidence: confidence,
        context,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn clean_phrase_is_idempotent(raw in "[ a-zA-Z0-9•*.,;:!?+#/&éß-]{0,40}") {
        let once = clean_phrase(&raw);
        prop_assert_eq!(clean_phrase(&once), once);
    }

    #[test]
    fn split_spans_slice_back_to_pieces(text in "[a-zA-Z ,;&]{0,60}", offset in 0usize..8) {
        let padded = format!("{}{text}", " ".repeat(offset));
        for (span, piece) in split_phrases(&text, offset) {
            prop_assert_eq!(span.slice(&padded), Some(piece));
        }
    }

    #[test]
    fn sentences_are_ordered_and_disjoint(text in "[a-z .!?\n]{0,80}") {
        let spans = split_sentences(&text);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
        prop_assert!(spans.iter().all(|s| !s.is_empty() && s.end <= text.len()));
    }

    #[test]
    fn resolution_is_a_function(index in 0usize..SKILLS.len(), upper in any::<bool>()) {
        let taxonomy = builtin_taxonomy();
        let raw = if upper { SKILLS[index].to_uppercase() } else { SKILLS[index].to_lowercase() };
        let first = taxonomy.resolve(&raw).map(str::to_string);
        prop_assert!(first.is_some());
        prop_assert_eq!(taxonomy.resolve(&raw).map(str::to_string), first.clone());
        let canonical = first.unwrap();
        prop_assert_eq!(taxonomy.resolve(&canonical), Some(canonical.as_str()));
    }

    #[test]
    fn confidence_stays_in_unit_range(ctx in context(), backed in any::<bool>(), boost in -1.0f32..2.0) {
        let (_, confidence) =
            ProficiencyCalculator::default().calculate_proficiency("Python", &ctx, None, backed, boost);
        prop_assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn boost_never_lowers_confidence(ctx in context(), low in 0.0f32..0.5, extra in 0.0f32..0.5) {
        let calc = ProficiencyCalculator::default();
        let (level_low, conf_low) = calc.calculate_proficiency("SQL", &ctx, None, false, low);
        let (level_high, conf_high) = calc.calculate_proficiency("SQL", &ctx, None, false, low + extra);
        prop_assert_eq!(level_low, level_high);
        prop_assert!(conf_high >= conf_low);
    }

    #[test]
    fn backing_only_adds(
        ctx in context(),
        confidence in 0.0f32..=1.0,
        skill in prop::sample::select(SKILLS),
        level in prop::sample::select(ProficiencyLevel::ALL.to_vec()),
    ) {
        let backer = CertificationBacker::new(
            builtin_taxonomy(),
            ProficiencyCalculator::default(),
            DEFAULT_BACKING_BOOST,
        );
        let before = SkillRecord {
            proficiency: level,
            ..record(skill, confidence, ctx)
        };
        let cert = SkillRecord {
            category: SkillCategory::domain(SkillCategory::CERTIFICATION_DOMAIN),
            ..record("AWS Certified Solutions Architect", 0.9, String::new())
        };
        let after = backer.back_skills(vec![before.clone()], &[cert]);
        prop_assert_eq!(after.len(), 1);
        prop_assert!(after[0].confidence >= before.confidence);
        prop_assert_eq!(&after[0].name, &before.name);
        prop_assert_eq!(&after[0].category, &before.category);
        prop_assert_eq!(after[0].proficiency, before.proficiency);
        prop_assert_eq!(after[0].source, before.source);
        prop_assert_eq!(&after[0].context, &before.context);
        if !after[0].is_backed {
            prop_assert_eq!(&after[0], &before);
        }
    }

    #[test]
    fn pipeline_records_are_well_formed(ctx in context()) {
        let engine = SkillEngine::new(builtin_taxonomy(), &Config::default()).unwrap();
        let doc = Document::new("cv", DocumentType::Resume, ctx);
        let records = engine.process_document(&doc, None);
        let taxonomy = engine.taxonomy();
        for record in &records {
            prop_assert!((0.0..=1.0).contains(&record.confidence));
            prop_assert!(record.extraction_confidence >= 0.5);
            prop_assert_eq!(taxonomy.resolve(&record.name), Some(record.name.as_str()));
            prop_assert!(!record.is_backed);
        }
    }
}
