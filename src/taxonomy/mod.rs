//! Skill taxonomy: canonical names, categories, aliases and related skills.
//!
//! A [`Taxonomy`] is an immutable snapshot built once per session and shared
//! behind an `Arc`. Lookups are case-insensitive and whitespace-normalized.
//! Resolution tries an exact alias match first, then a compound match that
//! scans aliases longest first and requires word boundaries on both sides,
//! so "relational database management systems" lands on the single
//! "Database Management Systems" entry rather than on a shorter alias.

mod builtin;
mod loader;

use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, SpError};
use crate::model::{SkillCategory, SkillRecord};

pub use loader::{FileFormat, SkillDefinition, TaxonomyFile};

/// Aliases shorter than this only resolve on an exact match.
const MIN_COMPOUND_ALIAS_CHARS: usize = 3;

/// Normalize a raw phrase into a lookup key.
///
/// NFKC, lowercase, collapsed whitespace, surrounding punctuation removed.
/// A leading `.` survives (".NET"); a trailing one does not.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let lowered = raw.nfkc().collect::<String>().to_lowercase();
    let collapsed = lowered.split_whitespace().join(" ");
    collapsed
        .trim_start_matches(is_edge_punct)
        .trim_end_matches(|c: char| c == '.' || is_edge_punct(c))
        .to_string()
}

fn is_edge_punct(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}' | '*'
                | '•' | '·' | '|' | '–' | '—' | '`'
        )
}

/// Whether `needle` occurs in `haystack` with non-alphanumeric neighbours.
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn is_exact_only(alias: &str) -> bool {
    alias.chars().count() < MIN_COMPOUND_ALIAS_CHARS || builtin::EXACT_ONLY.contains(&alias)
}

/// Aliases derived from a display name.
fn generated_aliases(name: &str) -> Vec<String> {
    let key = normalize_key(name);
    let mut aliases = vec![key.clone()];

    if let Some((base, rest)) = key.split_once('(') {
        aliases.push(normalize_key(base));
        aliases.push(normalize_key(rest.trim_end_matches(')')));
    }
    if let Some((_, tail)) = key.split_once(": ") {
        aliases.push(normalize_key(tail));
    }
    if let Some(base) = key.strip_suffix(".js") {
        aliases.push(base.to_string());
        aliases.push(format!("{base}js"));
    }
    if key.contains(' ') && key.chars().all(|c| c.is_alphabetic() || c == ' ') {
        aliases.push(key.replace(' ', "-"));
    }
    if key.contains('-') && key.chars().all(|c| c.is_alphabetic() || c == '-') {
        aliases.push(key.replace('-', " "));
    }

    aliases.retain(|alias| !alias.is_empty());
    aliases.into_iter().unique().collect()
}

/// A canonical taxonomy entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntry {
    /// Display-cased canonical name.
    pub name: String,
    pub category: SkillCategory,
    /// Normalized aliases that resolve to this entry.
    pub aliases: Vec<String>,
    /// Canonical names of explicitly related skills, most related first.
    pub related: Vec<String>,
}

/// Result of a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub canonical: &'a str,
    /// `true` for a whole-phrase alias match, `false` for a compound hit.
    pub exact: bool,
}

#[derive(Debug, Clone)]
pub struct Taxonomy {
    entries: BTreeMap<String, SkillEntry>,
    aliases: HashMap<String, String>,
    compound: Vec<(String, String)>,
    stacks: Vec<Vec<String>>,
}

impl Taxonomy {
    /// The built-in taxonomy with no custom additions.
    pub fn builtin() -> Result<Self> {
        TaxonomyBuilder::with_builtin().build()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = &SkillEntry> {
        self.entries.values()
    }

    /// Iterate certification entries.
    pub fn certifications(&self) -> impl Iterator<Item = &SkillEntry> {
        self.entries
            .values()
            .filter(|entry| entry.category.is_certification())
    }

    /// Look up an entry by canonical name or any alias.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&SkillEntry> {
        self.aliases
            .get(&normalize_key(name))
            .and_then(|key| self.entries.get(key))
    }

    /// Resolve a raw phrase, reporting whether the hit was exact.
    #[must_use]
    pub fn resolve_match(&self, raw: &str) -> Option<Resolution<'_>> {
        let key = normalize_key(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(entry) = self.aliases.get(&key).and_then(|k| self.entries.get(k)) {
            return Some(Resolution {
                canonical: &entry.name,
                exact: true,
            });
        }

        self.compound
            .iter()
            .find(|(alias, _)| contains_word(&key, alias))
            .and_then(|(_, k)| self.entries.get(k))
            .map(|entry| Resolution {
                canonical: &entry.name,
                exact: false,
            })
    }

    /// Resolve a raw phrase to its canonical name.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        self.resolve_match(raw).map(|hit| hit.canonical)
    }

    /// Resolve only on a whole-phrase alias match.
    #[must_use]
    pub fn resolve_exact(&self, raw: &str) -> Option<&str> {
        self.entry(raw).map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub fn category_of(&self, canonical: &str) -> Option<&SkillCategory> {
        self.entry(canonical).map(|entry| &entry.category)
    }

    /// Related skills, most related first.
    ///
    /// Explicit edges come first, then peers from the same technology stack,
    /// then the remaining skills of the same category in alphabetical order.
    #[must_use]
    pub fn related_skills(&self, canonical: &str, limit: usize) -> Vec<String> {
        let Some(entry) = self.entry(canonical) else {
            return Vec::new();
        };
        let own_key = normalize_key(&entry.name);

        let stack_peers = self
            .stacks
            .iter()
            .filter(|stack| stack.contains(&own_key))
            .flatten()
            .filter_map(|key| self.entries.get(key))
            .map(|peer| peer.name.clone());

        let category_peers = self
            .entries
            .values()
            .filter(|peer| peer.category == entry.category)
            .map(|peer| peer.name.clone());

        entry
            .related
            .iter()
            .cloned()
            .chain(stack_peers)
            .chain(category_peers)
            .filter(|name| *name != entry.name)
            .unique()
            .take(limit)
            .collect()
    }

    /// Whether `other` is an explicit related skill of `skill`.
    #[must_use]
    pub fn is_related(&self, skill: &str, other: &str) -> bool {
        let (Some(entry), Some(target)) = (self.entry(skill), self.entry(other)) else {
            return false;
        };
        entry.related.iter().any(|name| *name == target.name)
    }

    /// A new snapshot that also knows every confident record name it lacked.
    ///
    /// Names that already resolve exactly are left alone; `self` is unchanged.
    #[must_use]
    pub fn with_learned_skills(&self, records: &[SkillRecord], min_confidence: f32) -> Self {
        let mut learned = self.clone();
        let mut added = 0usize;

        for record in records {
            if record.confidence <= min_confidence {
                continue;
            }
            let key = normalize_key(&record.name);
            if key.is_empty() || learned.aliases.contains_key(&key) {
                continue;
            }
            learned.aliases.insert(key.clone(), key.clone());
            learned.entries.insert(
                key.clone(),
                SkillEntry {
                    name: record.name.clone(),
                    category: record.category.clone(),
                    aliases: vec![key],
                    related: Vec::new(),
                },
            );
            added += 1;
        }

        if added > 0 {
            learned.compound = compound_index(&learned.aliases);
            tracing::info!(added, total = learned.len(), "learned new skills");
        }
        learned
    }
}

fn compound_index(aliases: &HashMap<String, String>) -> Vec<(String, String)> {
    aliases
        .iter()
        .filter(|(alias, _)| !is_exact_only(alias))
        .map(|(alias, key)| (alias.clone(), key.clone()))
        .sorted_by(|(a, _), (b, _)| {
            let a_words = a.split(' ').count();
            let b_words = b.split(' ').count();
            b_words
                .cmp(&a_words)
                .then_with(|| b.len().cmp(&a.len()))
                .then_with(|| a.cmp(b))
        })
        .collect()
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Debug, Clone)]
struct Draft {
    name: String,
    category: SkillCategory,
    aliases: Vec<String>,
    related: Vec<String>,
    custom: bool,
}

/// Assembles a [`Taxonomy`], checking related edges at [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    drafts: BTreeMap<String, Draft>,
    order: Vec<String>,
    stacks: Vec<(String, Vec<String>)>,
}

impl TaxonomyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the built-in data.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut builder = Self::new();
        for name in builtin::TECHNICAL {
            builder.add_skill(name, SkillCategory::Technical);
        }
        for name in builtin::SOFT {
            builder.add_skill(name, SkillCategory::Soft);
        }
        for (domain, names) in builtin::DOMAINS {
            for name in *names {
                builder.add_skill(name, SkillCategory::domain(domain));
            }
        }
        for (name, acronym, related) in builtin::CERTIFICATIONS {
            builder.add_skill(name, SkillCategory::domain(SkillCategory::CERTIFICATION_DOMAIN));
            if let Some(acronym) = acronym {
                builder.add_alias(name, acronym);
            }
            for other in *related {
                builder.add_related(name, other);
            }
        }
        for (name, aliases) in builtin::EXTRA_ALIASES {
            for alias in *aliases {
                builder.add_alias(name, alias);
            }
        }
        for (label, members) in builtin::STACKS {
            builder.add_stack(label, members.iter().map(ToString::to_string).collect());
        }
        builder
    }

    /// Add a skill unless its name is already present.
    pub fn add_skill(&mut self, name: &str, category: SkillCategory) -> &mut Self {
        let key = normalize_key(name);
        if key.is_empty() || self.drafts.contains_key(&key) {
            return self;
        }
        self.order.push(key.clone());
        self.drafts.insert(
            key,
            Draft {
                name: name.trim().to_string(),
                category,
                aliases: generated_aliases(name),
                related: Vec::new(),
                custom: false,
            },
        );
        self
    }

    pub fn add_alias(&mut self, name: &str, alias: &str) -> &mut Self {
        let alias = normalize_key(alias);
        if let Some(draft) = self.drafts.get_mut(&normalize_key(name)) {
            if !alias.is_empty() && !draft.aliases.contains(&alias) {
                draft.aliases.push(alias);
            }
        }
        self
    }

    pub fn add_related(&mut self, name: &str, related: &str) -> &mut Self {
        if let Some(draft) = self.drafts.get_mut(&normalize_key(name)) {
            draft.related.push(related.trim().to_string());
        }
        self
    }

    pub fn add_stack(&mut self, label: &str, members: Vec<String>) -> &mut Self {
        self.stacks.push((label.to_string(), members));
        self
    }

    /// Insert or override an entry; overrides take precedence over existing data.
    ///
    /// `default_category` applies when the definition names none and the
    /// entry is new.
    pub fn upsert(
        &mut self,
        definition: SkillDefinition,
        default_category: Option<&SkillCategory>,
    ) -> Result<()> {
        let key = normalize_key(&definition.name);
        if key.is_empty() {
            return Err(SpError::TaxonomyInvalid(
                "skill definition with an empty name".to_string(),
            ));
        }

        let explicit_aliases = definition
            .aliases
            .iter()
            .map(|alias| normalize_key(alias))
            .filter(|alias| !alias.is_empty());

        if let Some(draft) = self.drafts.get_mut(&key) {
            draft.name = definition.name.trim().to_string();
            if let Some(category) = definition.category {
                draft.category = category;
            }
            for alias in explicit_aliases {
                if !draft.aliases.contains(&alias) {
                    draft.aliases.push(alias);
                }
            }
            if let Some(related) = definition.related {
                draft.related = related;
            }
            draft.custom = true;
            return Ok(());
        }

        let category = definition
            .category
            .or_else(|| default_category.cloned())
            .ok_or_else(|| {
                SpError::TaxonomyInvalid(format!("skill '{}' has no category", definition.name))
            })?;
        let mut aliases = generated_aliases(&definition.name);
        aliases.extend(explicit_aliases);
        let aliases = aliases.into_iter().unique().collect();

        self.order.push(key.clone());
        self.drafts.insert(
            key,
            Draft {
                name: definition.name.trim().to_string(),
                category,
                aliases,
                related: definition.related.unwrap_or_default(),
                custom: true,
            },
        );
        Ok(())
    }

    /// Freeze into a [`Taxonomy`].
    ///
    /// Alias precedence, lowest to highest: built-in aliases in insertion
    /// order, custom aliases, canonical names.
    pub fn build(self) -> Result<Taxonomy> {
        let mut aliases: HashMap<String, String> = HashMap::new();
        for key in &self.order {
            let draft = &self.drafts[key];
            if draft.custom {
                continue;
            }
            for alias in &draft.aliases {
                aliases.entry(alias.clone()).or_insert_with(|| key.clone());
            }
        }
        for key in &self.order {
            let draft = &self.drafts[key];
            if draft.custom {
                for alias in &draft.aliases {
                    aliases.insert(alias.clone(), key.clone());
                }
            }
        }
        for key in &self.order {
            aliases.insert(key.clone(), key.clone());
        }

        let mut entries = BTreeMap::new();
        for (key, draft) in &self.drafts {
            let mut related = Vec::with_capacity(draft.related.len());
            for other in &draft.related {
                let target = aliases
                    .get(&normalize_key(other))
                    .and_then(|k| self.drafts.get(k))
                    .ok_or_else(|| SpError::DanglingRelated {
                        skill: draft.name.clone(),
                        related: other.clone(),
                    })?;
                if target.name != draft.name && !related.contains(&target.name) {
                    related.push(target.name.clone());
                }
            }

            let own_aliases = aliases
                .iter()
                .filter(|(_, k)| *k == key)
                .map(|(alias, _)| alias.clone())
                .sorted()
                .collect();

            entries.insert(
                key.clone(),
                SkillEntry {
                    name: draft.name.clone(),
                    category: draft.category.clone(),
                    aliases: own_aliases,
                    related,
                },
            );
        }

        let mut stacks = Vec::with_capacity(self.stacks.len());
        for (label, members) in &self.stacks {
            let mut keys = Vec::with_capacity(members.len());
            for member in members {
                let key = aliases.get(&normalize_key(member)).ok_or_else(|| {
                    SpError::TaxonomyInvalid(format!(
                        "stack '{label}' lists unknown skill '{member}'"
                    ))
                })?;
                keys.push(key.clone());
            }
            stacks.push(keys);
        }

        let compound = compound_index(&aliases);
        tracing::debug!(
            entries = entries.len(),
            aliases = aliases.len(),
            stacks = stacks.len(),
            "built taxonomy"
        );

        Ok(Taxonomy {
            entries,
            aliases,
            compound,
            stacks,
        })
    }
}
