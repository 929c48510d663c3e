//! Custom taxonomy files (JSON, TOML or YAML).
//!
//! Two shapes are accepted and may be mixed in one file:
//!
//! ```json
//! {
//!   "technical_skills": ["Zig", "Bevy"],
//!   "robotics_skills": ["ROS"],
//!   "skills": [{ "name": "Bevy", "category": "technical", "related": ["Rust"] }],
//!   "certifications": [{ "name": "ROS Developer", "aliases": ["rosd"], "related": ["ROS"] }]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Taxonomy, TaxonomyBuilder, normalize_key};
use crate::error::{Result, SpError};
use crate::model::SkillCategory;

/// One skill as written in a custom taxonomy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillCategory>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Replaces the existing related list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(SpError::TaxonomyInvalid(format!(
                "unsupported taxonomy file extension: {}",
                path.display()
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<SkillDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certifications: Vec<SkillDefinition>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stacks: BTreeMap<String, Vec<String>>,
    /// Flat `<category>_skills` lists.
    #[serde(flatten)]
    pub lists: BTreeMap<String, Vec<String>>,
}

impl TaxonomyFile {
    pub fn parse(raw: &str, format: FileFormat) -> Result<Self> {
        let parsed = match format {
            FileFormat::Json => serde_json::from_str(raw).map_err(|err| err.to_string()),
            FileFormat::Toml => toml::from_str(raw).map_err(|err| err.to_string()),
            FileFormat::Yaml => serde_yaml::from_str(raw).map_err(|err| err.to_string()),
        };
        parsed.map_err(|err| SpError::TaxonomyInvalid(format!("parse taxonomy: {err}")))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpError::TaxonomyNotFound(path.display().to_string()));
        }
        let format = FileFormat::from_path(path)?;
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw, format).map_err(|err| match err {
            SpError::TaxonomyInvalid(msg) => {
                SpError::TaxonomyInvalid(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Render in `format`; the output parses back with [`parse`](Self::parse).
    pub fn render(&self, format: FileFormat) -> Result<String> {
        match format {
            FileFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|err| SpError::TaxonomyInvalid(format!("render taxonomy: {err}"))),
            FileFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }

    /// Write to `path` in the format its extension names.
    pub fn write(&self, path: &Path) -> Result<()> {
        let rendered = self.render(FileFormat::from_path(path)?)?;
        std::fs::write(path, rendered)?;
        Ok(())
    }

    /// Whether any skill, certification or list entry is named `name`.
    #[must_use]
    pub fn defines(&self, name: &str) -> bool {
        let key = normalize_key(name);
        self.skills
            .iter()
            .chain(&self.certifications)
            .map(|definition| definition.name.as_str())
            .chain(self.lists.values().flatten().map(String::as_str))
            .any(|defined| normalize_key(defined) == key)
    }

    /// Merge this file into `builder`; file entries take precedence.
    pub fn apply(self, builder: &mut TaxonomyBuilder) -> Result<()> {
        for (key, names) in self.lists {
            let category = list_category(&key)?;
            for name in names {
                builder.upsert(
                    SkillDefinition {
                        name,
                        category: Some(category.clone()),
                        aliases: Vec::new(),
                        related: None,
                    },
                    None,
                )?;
            }
        }

        for definition in self.skills {
            builder.upsert(definition, None)?;
        }

        let certification = SkillCategory::domain(SkillCategory::CERTIFICATION_DOMAIN);
        for definition in self.certifications {
            builder.upsert(definition, Some(&certification))?;
        }

        for (label, members) in self.stacks {
            builder.add_stack(&label, members);
        }
        Ok(())
    }
}

fn list_category(key: &str) -> Result<SkillCategory> {
    match key {
        "technical_skills" => Ok(SkillCategory::Technical),
        "soft_skills" => Ok(SkillCategory::Soft),
        other => match other.strip_suffix("_skills") {
            Some(domain) if !domain.is_empty() => Ok(SkillCategory::domain(domain)),
            _ => Err(SpError::TaxonomyInvalid(format!(
                "unknown taxonomy key '{other}'"
            ))),
        },
    }
}

impl Taxonomy {
    /// Built-in taxonomy merged with an optional custom file.
    pub fn load(custom_path: Option<&Path>) -> Result<Self> {
        let mut builder = TaxonomyBuilder::with_builtin();
        if let Some(path) = custom_path {
            let file = TaxonomyFile::from_path(path)?;
            file.apply(&mut builder)?;
            tracing::info!(path = %path.display(), "merged custom taxonomy");
        }
        builder.build()
    }
}
