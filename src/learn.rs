//! Offline taxonomy growth from skills the current taxonomy misses.
//!
//! A session keeps every validated mention, resolved or not. Confident
//! unresolved ones become records, [`Taxonomy::with_learned_skills`] decides
//! which are new, and those are appended to a custom taxonomy file that a
//! later run loads with `--taxonomy`.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::engine::SessionReport;
use crate::error::Result;
use crate::model::{ProficiencyLevel, SkillCategory, SkillRecord};
use crate::taxonomy::{FileFormat, SkillDefinition, Taxonomy, TaxonomyFile, normalize_key};
use crate::text::clean_phrase;

/// One record per unresolved mention phrase, at its highest base confidence.
#[must_use]
pub fn unresolved_records(taxonomy: &Taxonomy, session: &SessionReport) -> Vec<SkillRecord> {
    let mut best: BTreeMap<String, SkillRecord> = BTreeMap::new();
    for mention in session
        .documents
        .iter()
        .flat_map(|report| &report.mentions)
        .filter(|mention| mention.canonical_name.is_none())
    {
        let name = clean_phrase(&mention.raw_text);
        let key = normalize_key(&name);
        if key.is_empty() || taxonomy.resolve(&name).is_some() {
            continue;
        }
        if best
            .get(&key)
            .is_some_and(|kept| kept.confidence >= mention.base_confidence)
        {
            continue;
        }
        best.insert(
            key,
            SkillRecord {
                name,
                category: SkillCategory::Technical,
                proficiency: ProficiencyLevel::default(),
                confidence: mention.base_confidence,
                is_backed: false,
                backing_certificate: None,
                issuer: None,
                issued: None,
                source: mention.source_method,
                extraction_confidence: mention.base_confidence,
                context: String::new(),
            },
        );
    }
    debug!(unresolved = best.len(), "collected unresolved mentions");
    best.into_values().collect()
}

/// Entries `learned` knows that `base` does not, as file definitions.
#[must_use]
pub fn learned_definitions(base: &Taxonomy, learned: &Taxonomy) -> Vec<SkillDefinition> {
    learned
        .entries()
        .filter(|entry| base.resolve_exact(&entry.name).is_none())
        .map(|entry| SkillDefinition {
            name: entry.name.clone(),
            category: Some(entry.category.clone()),
            aliases: Vec::new(),
            related: None,
        })
        .collect()
}

/// Learn skills above `min_confidence` from `session` and append them to
/// the taxonomy file at `path`, creating it when missing.
///
/// Returns the names added. An existing file keeps its content.
pub fn learn_into(
    taxonomy: &Taxonomy,
    session: &SessionReport,
    min_confidence: f32,
    path: &Path,
) -> Result<Vec<String>> {
    FileFormat::from_path(path)?;
    let exists = path.exists();
    let mut file = if exists {
        TaxonomyFile::from_path(path)?
    } else {
        TaxonomyFile::default()
    };

    let learned = taxonomy.with_learned_skills(&unresolved_records(taxonomy, session), min_confidence);
    let added: Vec<SkillDefinition> = learned_definitions(taxonomy, &learned)
        .into_iter()
        .filter(|definition| !file.defines(&definition.name))
        .collect();
    let names: Vec<String> = added.iter().map(|definition| definition.name.clone()).collect();

    if !added.is_empty() || !exists {
        file.skills.extend(added);
        file.write(path)?;
    }
    info!(path = %path.display(), added = names.len(), "learned skills written");
    Ok(names)
}
