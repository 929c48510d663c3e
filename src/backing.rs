//! Cross-document certification backing.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::DocumentType;
use crate::model::{SkillRecord, clamp_unit};
use crate::proficiency::ProficiencyCalculator;
use crate::taxonomy::Taxonomy;

/// Default confidence boost for backed skills.
pub const DEFAULT_BACKING_BOOST: f32 = 0.15;

/// Records of one document, keyed by document id in session maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSkills {
    pub document_type: DocumentType,
    pub records: Vec<SkillRecord>,
}

#[derive(Debug, Clone)]
pub struct CertificationBacker {
    taxonomy: Arc<Taxonomy>,
    calculator: ProficiencyCalculator,
    boost: f32,
}

impl CertificationBacker {
    #[must_use]
    pub const fn new(taxonomy: Arc<Taxonomy>, calculator: ProficiencyCalculator, boost: f32) -> Self {
        Self {
            taxonomy,
            calculator,
            boost,
        }
    }

    /// The certification skill backing `record`, if any. Exact name matches
    /// take priority over related-skill matches.
    fn backing_for<'a>(&self, record: &SkillRecord, evidence: &'a [SkillRecord]) -> Option<&'a SkillRecord> {
        evidence
            .iter()
            .find(|cert| cert.name == record.name)
            .or_else(|| {
                evidence
                    .iter()
                    .find(|cert| self.taxonomy.is_related(&cert.name, &record.name))
            })
    }

    /// Mark records corroborated by `certification_records`.
    ///
    /// Never adds, removes or renames records, and never lowers confidence
    /// or changes proficiency.
    #[must_use]
    pub fn back_skills(
        &self,
        mut records: Vec<SkillRecord>,
        certification_records: &[SkillRecord],
    ) -> Vec<SkillRecord> {
        if certification_records.is_empty() {
            return records;
        }
        let mut backed = 0usize;
        for record in records.iter_mut().filter(|r| !r.is_backed) {
            let Some(cert) = self.backing_for(record, certification_records) else {
                continue;
            };
            let (_, rescored) = self.calculator.calculate_proficiency(
                &record.name,
                &record.context,
                Some(&cert.name),
                true,
                self.boost,
            );
            let candidate = clamp_unit((record.extraction_confidence + rescored) / 2.0);
            record.is_backed = true;
            record.backing_certificate = Some(cert.name.clone());
            record.issuer.clone_from(&cert.issuer);
            record.issued.clone_from(&cert.issued);
            record.confidence = record.confidence.max(candidate);
            backed += 1;
        }
        debug!(backed, total = records.len(), "backed records");
        records
    }

    /// Back every non-certification document with evidence from all
    /// certification documents in the session.
    #[must_use]
    pub fn back_across_session(
        &self,
        mut documents: BTreeMap<String, DocumentSkills>,
    ) -> BTreeMap<String, DocumentSkills> {
        let evidence = certification_evidence(documents.values());
        info!(
            documents = documents.len(),
            evidence = evidence.len(),
            "backing session"
        );
        for skills in documents
            .values_mut()
            .filter(|d| d.document_type != DocumentType::Certification)
        {
            let records = std::mem::take(&mut skills.records);
            skills.records = self.back_skills(records, &evidence);
        }
        documents
    }
}

/// All records from certification documents, in iteration order.
pub fn certification_evidence<'a>(
    documents: impl IntoIterator<Item = &'a DocumentSkills>,
) -> Vec<SkillRecord> {
    documents
        .into_iter()
        .filter(|d| d.document_type == DocumentType::Certification)
        .flat_map(|d| d.records.iter().cloned())
        .collect()
}
