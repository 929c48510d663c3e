//! End-to-end pipeline scenarios over the library API.

use std::sync::Arc;

use skillprof::annotate::{NoopAnnotator, RuleBasedAnnotator};
use skillprof::config::Config;
use skillprof::document::{Document, DocumentType, MemoryTextSource};
use skillprof::engine::{CancellationToken, SkillEngine};
use skillprof::error::SpError;
use skillprof::industry::{Industry, KeywordIndustryClassifier};
use skillprof::model::{ProficiencyLevel, SkillCategory};
use skillprof::proficiency::ProficiencyCalculator;
use skillprof::taxonomy::Taxonomy;
use skillprof::test_utils::fixtures::{UnitTestFixture, builtin_taxonomy};
use skillprof::test_utils::logging::TestLogger;
use skillprof::test_utils::samples;
use skillprof::text::clean_phrase;

fn engine() -> SkillEngine {
    SkillEngine::new(builtin_taxonomy(), &Config::default()).unwrap()
}

fn session(engine: &SkillEngine, docs: &[Document]) -> skillprof::engine::SessionReport {
    engine
        .run_session(
            docs,
            &RuleBasedAnnotator,
            &KeywordIndustryClassifier::default(),
            &CancellationToken::new(),
        )
        .unwrap()
}

#[test]
fn resume_profile_covers_expected_skills() {
    let log = TestLogger::new("resume_profile_covers_expected_skills");
    let doc = Document::new("cv", DocumentType::Resume, samples::TECH_RESUME);
    log.log_input("document", &doc.id);
    let report = engine().analyze_document(&doc, &RuleBasedAnnotator);
    let names: Vec<&str> = report.records.iter().map(|r| r.name.as_str()).collect();
    log.log_actual(&names);

    for expected in ["Python", "Docker", "AWS", "Kubernetes", "SQL", "Excel", "Machine Learning"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
    let mut sorted = names.clone();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len(), "one record per skill");
    log.pass();
}

#[test]
fn record_levels_match_their_context() {
    let doc = Document::new("cv", DocumentType::Resume, samples::TECH_RESUME);
    let engine = engine();
    let calculator = ProficiencyCalculator::default();
    for record in engine.analyze_document(&doc, &RuleBasedAnnotator).records {
        if record.category.is_certification() {
            continue;
        }
        let (level, calculated) =
            calculator.calculate_proficiency(&record.name, &record.context, None, false, 0.0);
        assert_eq!(record.proficiency, level, "{}", record.name);
        let expected = (record.extraction_confidence + calculated) / 2.0;
        assert!((record.confidence - expected).abs() < 1e-5, "{}", record.name);
    }
}

#[test]
fn senior_context_scores_expert() {
    let doc = Document::new(
        "cv",
        DocumentType::Resume,
        "Expertise in Python. 5+ years of enterprise Python architecture, led the team.",
    );
    let records = engine().process_document(&doc, None);
    let python = records.iter().find(|r| r.name == "Python").unwrap();
    assert_eq!(python.proficiency, ProficiencyLevel::Expert);
    assert!(python.confidence > 0.7);
}

#[test]
fn filler_words_do_not_block_resolution() {
    let taxonomy = builtin_taxonomy();
    assert_eq!(clean_phrase("a strong Python"), "Python");
    assert_eq!(taxonomy.resolve(&clean_phrase("a strong Python")), Some("Python"));
    assert_eq!(taxonomy.resolve("dbms"), Some("Database Management Systems"));
}

#[test]
fn compound_term_resolves_to_one_skill() {
    let doc = Document::new(
        "cv",
        DocumentType::Resume,
        "Designed database management systems for banks.",
    );
    let report = engine().analyze_document(&doc, &RuleBasedAnnotator);
    let dbms: Vec<_> = report
        .records
        .iter()
        .filter(|r| r.name == "Database Management Systems")
        .collect();
    assert_eq!(dbms.len(), 1);
    assert!((dbms[0].extraction_confidence - 0.85).abs() < 1e-6);
}

#[test]
fn certificate_backs_matching_resume_skill() {
    let log = TestLogger::new("certificate_backs_matching_resume_skill");
    let engine = engine();
    let resume = Document::new("cv", DocumentType::Resume, samples::TECH_RESUME);
    let cert = Document::new("cert", DocumentType::Certification, samples::AWS_CERTIFICATE);

    log.log_step("resume alone");
    let alone = session(&engine, std::slice::from_ref(&resume));
    let unbacked = alone.documents[0]
        .records
        .iter()
        .find(|r| r.name == "AWS")
        .cloned()
        .unwrap();
    assert!(!unbacked.is_backed);

    log.log_step("resume with certificate");
    let both = session(&engine, &[resume, cert]);
    let cv = both.documents.iter().find(|d| d.document_id == "cv").unwrap();
    let backed = cv.records.iter().find(|r| r.name == "AWS").unwrap();
    log.log_actual(backed);
    assert!(backed.is_backed);
    assert_eq!(
        backed.backing_certificate.as_deref(),
        Some("AWS Certified Solutions Architect")
    );
    assert!(backed.confidence >= unbacked.confidence);

    let cert_report = both.documents.iter().find(|d| d.document_id == "cert").unwrap();
    assert!(cert_report.records.iter().all(|r| !r.is_backed));

    let profile = both.profile();
    assert!(profile.iter().find(|r| r.name == "AWS").unwrap().is_backed);
    log.pass();
}

#[test]
fn bare_mention_without_evidence() {
    let calculator = ProficiencyCalculator::default();
    let (level, confidence) = calculator.calculate_proficiency("Excel", "", None, false, 0.0);
    assert_eq!(level, ProficiencyLevel::Beginner);
    assert!((confidence - 0.5).abs() < 1e-6);

    let doc = Document::new("cv", DocumentType::Resume, samples::BARE_MENTIONS);
    let records = engine().process_document(&doc, None);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Excel");
    assert!((0.5..=1.0).contains(&records[0].confidence));
}

#[test]
fn annotator_failure_degrades_to_patterns() {
    let doc = Document::new("cv", DocumentType::Resume, samples::TECH_RESUME);
    let engine = engine();
    let degraded = engine.analyze_document(&doc, &NoopAnnotator);
    let full = engine.analyze_document(&doc, &RuleBasedAnnotator);
    assert!(degraded.structural_skipped);
    assert!(!full.structural_skipped);
    assert!(!degraded.records.is_empty());
    assert!(degraded.records.len() <= full.records.len());
}

#[test]
fn session_detects_industry_when_unset() {
    let engine = engine();
    let docs = vec![
        Document::new("nurse", DocumentType::Resume, samples::HEALTHCARE_RESUME),
        Document::new("fixed", DocumentType::Resume, samples::BARE_MENTIONS)
            .with_industry(Industry::Finance),
    ];
    let report = session(&engine, &docs);
    let nurse = report.documents.iter().find(|d| d.document_id == "nurse").unwrap();
    assert_eq!(nurse.industry, Some(Industry::Healthcare));
    let fixed = report.documents.iter().find(|d| d.document_id == "fixed").unwrap();
    assert_eq!(fixed.industry, Some(Industry::Finance));
}

#[test]
fn cancelled_session_reports_skipped_documents() {
    let engine = engine();
    let docs = vec![
        Document::new("a", DocumentType::Resume, samples::TECH_RESUME),
        Document::new("b", DocumentType::Resume, samples::BARE_MENTIONS),
    ];
    let token = CancellationToken::new();
    token.cancel();
    let report = engine
        .run_session(&docs, &RuleBasedAnnotator, &KeywordIndustryClassifier::default(), &token)
        .unwrap();
    assert!(report.cancelled());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn documents_load_from_text_source() {
    let mut source = MemoryTextSource::new();
    source.insert("cv", samples::BARE_MENTIONS).insert("blank", "   ");

    let doc = Document::from_source(&source, "cv", DocumentType::Resume).unwrap();
    assert_eq!(doc.text, samples::BARE_MENTIONS);
    assert!(matches!(
        Document::from_source(&source, "blank", DocumentType::Resume),
        Err(SpError::DocumentEmpty(_))
    ));
    assert!(matches!(
        Document::from_source(&source, "missing", DocumentType::Resume),
        Err(SpError::DocumentNotFound(_))
    ));
}

#[test]
fn custom_taxonomy_adds_skills() {
    let fixture = UnitTestFixture::new();
    let taxonomy = fixture.load_taxonomy(
        "taxonomy.json",
        r#"{
            "robotics_skills": ["ROS"],
            "certifications": [{ "name": "ROS Developer", "related": ["ROS"] }]
        }"#,
    );
    assert_eq!(taxonomy.resolve("ros"), Some("ROS"));
    assert_eq!(
        taxonomy.category_of("ROS"),
        Some(&SkillCategory::domain("robotics"))
    );
    assert!(taxonomy.is_related("ROS Developer", "ROS"));

    let engine = SkillEngine::new(Arc::clone(&taxonomy), &Config::default()).unwrap();
    let doc = Document::new("cv", DocumentType::Resume, "Experienced in ROS and Python.");
    let names: Vec<String> = engine
        .process_document(&doc, None)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert!(names.contains(&"ROS".to_string()));
    assert!(names.contains(&"Python".to_string()));
}

#[test]
fn dangling_related_skill_is_rejected() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_file(
        "bad.yaml",
        "skills:\n  - name: Bevy\n    category: technical\n    related: [Nonexistent Engine]\n",
    );
    let err = Taxonomy::load(Some(&path)).unwrap_err();
    assert!(matches!(err, SpError::DanglingRelated { .. }), "{err:?}");
}

#[test]
fn learned_skills_resolve_afterwards() {
    let engine = engine();
    let doc = Document::new(
        "cv",
        DocumentType::Resume,
        "Proficient in Python, SQL and Underwater Basketweaving",
    );
    let report = engine.analyze_document(&doc, &RuleBasedAnnotator);
    assert!(report.records.iter().all(|r| r.name != "Underwater Basketweaving"));
    assert!(
        report
            .mentions
            .iter()
            .any(|m| m.raw_text == "Underwater Basketweaving")
    );

    let mut learned_record = report.records[0].clone();
    learned_record.name = "Underwater Basketweaving".to_string();
    learned_record.confidence = 0.9;
    let learned = engine.taxonomy().with_learned_skills(&[learned_record], 0.7);
    assert_eq!(
        learned.resolve("underwater basketweaving"),
        Some("Underwater Basketweaving")
    );
    assert_eq!(engine.taxonomy().resolve("underwater basketweaving"), None);
}
