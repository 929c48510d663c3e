//! The extraction pipeline and its batch driver.
//!
//! Per document: pattern and structural extraction run concurrently, the
//! candidates are validated and merged, and every surviving skill is
//! scored. Across a session documents fan out over rayon; certification
//! backing runs once every document has finished.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::annotate::{Annotations, LinguisticAnnotator};
use crate::backing::{CertificationBacker, DocumentSkills};
use crate::config::Config;
use crate::document::{Document, DocumentType};
use crate::error::{Result, SpError};
use crate::extract::{CandidateMention, CertificateDetails, PatternExtractor, StructuralExtractor, certificate_details};
use crate::industry::{Industry, IndustryClassifier};
use crate::merge::Merger;
use crate::model::{SkillCategory, SkillRecord, clamp_unit};
use crate::proficiency::ProficiencyCalculator;
use crate::taxonomy::Taxonomy;
use crate::text::{context_window, split_sentences};
use crate::validator::SkillValidator;

/// Cooperative cancellation shared between a session and its caller.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Everything produced for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub document_id: String,
    pub document_type: DocumentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    /// Validated candidates, pattern output first.
    pub mentions: Vec<CandidateMention>,
    pub records: Vec<SkillRecord>,
    /// Structural extraction failed or had nothing to work with.
    pub structural_skipped: bool,
}

/// Outcome of [`SkillEngine::run_session`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub documents: Vec<DocumentReport>,
    /// Ids of documents not started because the session was cancelled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl SessionReport {
    #[must_use]
    pub fn cancelled(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// One record per skill across all documents: backed records first,
    /// then higher confidence, then higher proficiency. Sorted by
    /// confidence, highest first.
    #[must_use]
    pub fn profile(&self) -> Vec<SkillRecord> {
        let mut best: HashMap<&str, &SkillRecord> = HashMap::new();
        for record in self.documents.iter().flat_map(|d| &d.records) {
            let replace = best.get(record.name.as_str()).is_none_or(|kept| {
                (record.is_backed, record.confidence, record.proficiency)
                    > (kept.is_backed, kept.confidence, kept.proficiency)
            });
            if replace {
                best.insert(&record.name, record);
            }
        }
        let mut profile: Vec<SkillRecord> = best.into_values().cloned().collect();
        profile.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.name.cmp(&b.name))
        });
        profile
    }
}

pub struct SkillEngine {
    taxonomy: Arc<Taxonomy>,
    validator: SkillValidator,
    patterns: PatternExtractor,
    structural: StructuralExtractor,
    merger: Merger,
    calculator: ProficiencyCalculator,
    backer: CertificationBacker,
    context_sentences: usize,
    structural_enabled: bool,
    threads: usize,
}

impl SkillEngine {
    /// Wire the pipeline over a loaded taxonomy. Fails on invalid custom
    /// templates.
    pub fn new(taxonomy: Arc<Taxonomy>, config: &Config) -> Result<Self> {
        let calculator = ProficiencyCalculator::new(config.scoring.weights);
        Ok(Self {
            validator: SkillValidator::new(Arc::clone(&taxonomy)),
            patterns: PatternExtractor::with_custom(&config.extraction.custom_patterns)?,
            structural: StructuralExtractor::new(Arc::clone(&taxonomy)),
            merger: Merger::new(config.scoring.min_known_confidence),
            calculator,
            backer: CertificationBacker::new(
                Arc::clone(&taxonomy),
                calculator,
                config.scoring.backing_boost,
            ),
            context_sentences: config.extraction.context_sentences as usize,
            structural_enabled: config.extraction.structural,
            threads: config.session.threads as usize,
            taxonomy,
        })
    }

    /// Load the configured taxonomy, then wire the pipeline.
    pub fn from_config(config: &Config) -> Result<Self> {
        let custom = config.taxonomy.custom_path.as_deref().map(std::path::Path::new);
        let taxonomy = Taxonomy::load(custom)?;
        info!(skills = taxonomy.len(), "taxonomy loaded");
        Self::new(Arc::new(taxonomy), config)
    }

    #[must_use]
    pub const fn taxonomy(&self) -> &Arc<Taxonomy> {
        &self.taxonomy
    }

    #[must_use]
    pub const fn calculator(&self) -> &ProficiencyCalculator {
        &self.calculator
    }

    /// Pre-backing records for a document with caller-supplied annotations.
    /// `None` skips structural extraction.
    #[must_use]
    pub fn process_document(&self, document: &Document, annotations: Option<&Annotations>) -> Vec<SkillRecord> {
        let supplied = annotations.cloned().ok_or_else(|| SpError::Annotation("no annotations supplied".to_string()));
        self.run_pipeline(document, || supplied).records
    }

    /// Full report for a document, annotating it with `annotator`.
    #[must_use]
    pub fn analyze_document(&self, document: &Document, annotator: &dyn LinguisticAnnotator) -> DocumentReport {
        self.run_pipeline(document, || annotator.annotate(&document.text))
    }

    /// Back records of non-certification documents against all
    /// certification documents.
    #[must_use]
    pub fn back_across_session(
        &self,
        documents: BTreeMap<String, DocumentSkills>,
    ) -> BTreeMap<String, DocumentSkills> {
        self.backer.back_across_session(documents)
    }

    fn run_pipeline<F>(&self, document: &Document, annotate: F) -> DocumentReport
    where
        F: FnOnce() -> Result<Annotations> + Send,
    {
        let text = document.text.as_str();
        let industry = document.industry;

        let (pattern, structural) = rayon::join(
            || self.patterns.extract(text, industry),
            || {
                if self.structural_enabled {
                    Some(annotate().and_then(|annotations| {
                        if annotations.is_empty() {
                            return Err(SpError::Annotation("annotator returned nothing".to_string()));
                        }
                        self.structural.extract(text, &annotations)
                    }))
                } else {
                    None
                }
            },
        );

        let (structural, structural_skipped) = match structural {
            Some(Ok(mentions)) => (mentions, false),
            Some(Err(err)) if text.trim().is_empty() => {
                debug!(document = %document.id, error = %err, "empty document, structural skipped");
                (Vec::new(), true)
            }
            Some(Err(err)) => {
                warn!(document = %document.id, error = %err, "structural extraction skipped");
                (Vec::new(), true)
            }
            None => (Vec::new(), false),
        };

        let pattern: Vec<CandidateMention> = pattern
            .into_iter()
            .filter(|m| self.validator.is_valid_skill_candidate(&m.raw_text))
            .collect();
        let structural: Vec<CandidateMention> = structural
            .into_iter()
            .filter(|m| self.validator.is_valid_skill_candidate(&m.raw_text))
            .collect();
        debug!(
            document = %document.id,
            pattern = pattern.len(),
            structural = structural.len(),
            "validated candidates"
        );

        let mentions: Vec<CandidateMention> = pattern.iter().chain(&structural).cloned().collect();
        let merged = self.merger.merge(&self.taxonomy, pattern, structural);
        let records = self.score(document, merged);

        info!(
            document = %document.id,
            doc_type = %document.doc_type,
            skills = records.len(),
            structural_skipped,
            "document analyzed"
        );
        DocumentReport {
            document_id: document.id.clone(),
            document_type: document.doc_type,
            industry,
            mentions,
            records,
            structural_skipped,
        }
    }

    fn score(&self, document: &Document, merged: BTreeMap<String, CandidateMention>) -> Vec<SkillRecord> {
        let text = document.text.as_str();
        let sentences = split_sentences(text);
        let details = if document.doc_type == DocumentType::Certification {
            certificate_details(text)
        } else {
            CertificateDetails::default()
        };

        merged
            .into_iter()
            .map(|(name, mention)| {
                let window = context_window(text, &sentences, mention.context_span, self.context_sentences);
                let context = window.slice(text).unwrap_or_default().trim().to_string();
                let category = self
                    .taxonomy
                    .category_of(&name)
                    .cloned()
                    .unwrap_or(SkillCategory::Technical);
                let certification_text = if document.doc_type == DocumentType::Certification {
                    Some(context.as_str())
                } else if category.is_certification() {
                    Some(name.as_str())
                } else {
                    None
                };
                let (proficiency, calculated) =
                    self.calculator
                        .calculate_proficiency(&name, &context, certification_text, false, 0.0);

                SkillRecord {
                    confidence: clamp_unit((mention.base_confidence + calculated) / 2.0),
                    name,
                    category,
                    proficiency,
                    is_backed: false,
                    backing_certificate: None,
                    issuer: details.issuer.clone(),
                    issued: details.issued.clone(),
                    source: mention.source_method,
                    extraction_confidence: mention.base_confidence,
                    context,
                }
            })
            .collect()
    }

    /// Analyze `documents` in parallel, then back them across the session.
    ///
    /// Documents not yet started when `cancel` fires are listed in
    /// [`SessionReport::skipped`]; documents in flight finish.
    pub fn run_session(
        &self,
        documents: &[Document],
        annotator: &dyn LinguisticAnnotator,
        classifier: &dyn IndustryClassifier,
        cancel: &CancellationToken,
    ) -> Result<SessionReport> {
        info!(documents = documents.len(), annotator = annotator.name(), "session started");

        let analyze = || -> Vec<Option<DocumentReport>> {
            documents
                .par_iter()
                .map(|document| {
                    if cancel.is_cancelled() {
                        return None;
                    }
                    if document.industry.is_some() {
                        return Some(self.analyze_document(document, annotator));
                    }
                    let mut classified = document.clone();
                    classified.industry = classifier.classify(&document.text);
                    Some(self.analyze_document(&classified, annotator))
                })
                .collect()
        };

        let outcomes = if self.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .map_err(|err| SpError::ThreadPool(err.to_string()))?;
            pool.install(analyze)
        } else {
            analyze()
        };

        let mut reports = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for (document, outcome) in documents.iter().zip(outcomes) {
            match outcome {
                Some(report) => reports.push(report),
                None => skipped.push(document.id.clone()),
            }
        }
        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "session cancelled");
        }

        let evidence: Vec<SkillRecord> = reports
            .iter()
            .filter(|r| r.document_type == DocumentType::Certification)
            .flat_map(|r| r.records.iter().cloned())
            .collect();
        for report in reports
            .iter_mut()
            .filter(|r| r.document_type != DocumentType::Certification)
        {
            let records = std::mem::take(&mut report.records);
            report.records = self.backer.back_skills(records, &evidence);
        }

        info!(completed = reports.len(), skipped = skipped.len(), "session finished");
        Ok(SessionReport {
            documents: reports,
            skipped,
        })
    }
}
