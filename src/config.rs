use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpError};
use crate::proficiency::SignalWeights;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path (argument or `SKILLPROF_CONFIG`) replaces the
    /// global/project lookup. Otherwise the global file is applied first and
    /// `skillprof.toml` in `project_root` patches it. Environment overrides
    /// are applied last.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKILLPROF_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(SpError::Config(format!(
                        "config file {} does not exist",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a config from TOML text, on top of the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| SpError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("skillprof/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join("skillprof.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SpError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SpError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.taxonomy {
            self.taxonomy.merge(patch);
        }
        if let Some(patch) = patch.extraction {
            self.extraction.merge(patch);
        }
        if let Some(patch) = patch.scoring {
            self.scoring.merge(patch);
        }
        if let Some(patch) = patch.session {
            self.session.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("SKILLPROF_TAXONOMY") {
            self.taxonomy.custom_path = Some(value);
        }
        if let Some(value) = env_u32("SKILLPROF_CONTEXT_SENTENCES")? {
            self.extraction.context_sentences = value;
        }
        if let Some(value) = env_bool("SKILLPROF_STRUCTURAL") {
            self.extraction.structural = value;
        }
        if let Some(value) = env_f32("SKILLPROF_BACKING_BOOST")? {
            self.scoring.backing_boost = value;
        }
        if let Some(value) = env_u32("SKILLPROF_THREADS")? {
            self.session.threads = value;
        }
        Ok(())
    }

    /// Reject values outside their meaningful ranges.
    pub fn validate(&self) -> Result<()> {
        let unit = |name: &str, value: f32| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(SpError::Config(format!("{name} must be within [0, 1], got {value}")))
            }
        };

        unit("taxonomy.learn_threshold", self.taxonomy.learn_threshold)?;
        unit("scoring.backing_boost", self.scoring.backing_boost)?;
        unit("scoring.min_known_confidence", self.scoring.min_known_confidence)?;
        for pattern in &self.extraction.custom_patterns {
            unit("extraction.custom_patterns.confidence", pattern.confidence)?;
        }

        let weights = &self.scoring.weights;
        for (name, value) in weights.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(SpError::Config(format!(
                    "scoring.weights.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if weights.total() <= 0.0 {
            return Err(SpError::Config(
                "scoring.weights must not all be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Custom taxonomy file merged over the built-in data.
    #[serde(default)]
    pub custom_path: Option<String>,
    /// Minimum mention confidence for `analyze --learn-into` to learn a skill.
    #[serde(default = "default_learn_threshold")]
    pub learn_threshold: f32,
}

const fn default_learn_threshold() -> f32 {
    0.7
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            custom_path: None,
            learn_threshold: default_learn_threshold(),
        }
    }
}

impl TaxonomyConfig {
    fn merge(&mut self, patch: TaxonomyPatch) {
        if let Some(value) = patch.custom_path {
            self.custom_path = Some(value);
        }
        if let Some(value) = patch.learn_threshold {
            self.learn_threshold = value;
        }
    }
}

/// A user-supplied extraction template with one capture group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub pattern: String,
    #[serde(default = "default_custom_confidence")]
    pub confidence: f32,
}

const fn default_custom_confidence() -> f32 {
    0.7
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Sentences on each side of a mention used as scoring context.
    #[serde(default = "default_context_sentences")]
    pub context_sentences: u32,
    /// Run the structural extractor when annotations are available.
    #[serde(default = "default_true")]
    pub structural: bool,
    #[serde(default)]
    pub custom_patterns: Vec<CustomPattern>,
}

const fn default_context_sentences() -> u32 {
    1
}

const fn default_true() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            context_sentences: default_context_sentences(),
            structural: true,
            custom_patterns: Vec::new(),
        }
    }
}

impl ExtractionConfig {
    fn merge(&mut self, patch: ExtractionPatch) {
        if let Some(value) = patch.context_sentences {
            self.context_sentences = value;
        }
        if let Some(value) = patch.structural {
            self.structural = value;
        }
        if let Some(values) = patch.custom_patterns {
            for pattern in values {
                if !self.custom_patterns.contains(&pattern) {
                    self.custom_patterns.push(pattern);
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: SignalWeights,
    /// Confidence boost applied when a certification backs a skill.
    #[serde(default = "default_backing_boost")]
    pub backing_boost: f32,
    /// Floor applied to merged mentions of known skills.
    #[serde(default = "default_min_known_confidence")]
    pub min_known_confidence: f32,
}

const fn default_backing_boost() -> f32 {
    0.15
}

const fn default_min_known_confidence() -> f32 {
    0.5
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            backing_boost: default_backing_boost(),
            min_known_confidence: default_min_known_confidence(),
        }
    }
}

impl ScoringConfig {
    fn merge(&mut self, patch: ScoringPatch) {
        if let Some(weights) = patch.weights {
            weights.apply(&mut self.weights);
        }
        if let Some(value) = patch.backing_boost {
            self.backing_boost = value;
        }
        if let Some(value) = patch.min_known_confidence {
            self.min_known_confidence = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Worker threads for a session; 0 uses the global rayon pool.
    #[serde(default)]
    pub threads: u32,
}

impl SessionConfig {
    fn merge(&mut self, patch: SessionPatch) {
        if let Some(value) = patch.threads {
            self.threads = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub taxonomy: Option<TaxonomyPatch>,
    pub extraction: Option<ExtractionPatch>,
    pub scoring: Option<ScoringPatch>,
    pub session: Option<SessionPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TaxonomyPatch {
    pub custom_path: Option<String>,
    pub learn_threshold: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ExtractionPatch {
    pub context_sentences: Option<u32>,
    pub structural: Option<bool>,
    pub custom_patterns: Option<Vec<CustomPattern>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScoringPatch {
    pub weights: Option<WeightsPatch>,
    pub backing_boost: Option<f32>,
    pub min_known_confidence: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WeightsPatch {
    pub keywords: Option<f32>,
    pub duration: Option<f32>,
    pub cognitive: Option<f32>,
    pub project_scale: Option<f32>,
    pub responsibility: Option<f32>,
}

impl WeightsPatch {
    fn apply(self, weights: &mut SignalWeights) {
        if let Some(value) = self.keywords {
            weights.keywords = value;
        }
        if let Some(value) = self.duration {
            weights.duration = value;
        }
        if let Some(value) = self.cognitive {
            weights.cognitive = value;
        }
        if let Some(value) = self.project_scale {
            weights.project_scale = value;
        }
        if let Some(value) = self.responsibility {
            weights.responsibility = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SessionPatch {
    pub threads: Option<u32>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_u32(key: &str) -> Result<Option<u32>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u32>().map(Some).map_err(|err| {
            SpError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f32(key: &str) -> Result<Option<f32>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f32>().map(Some).map_err(|err| {
            SpError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!(config.taxonomy.custom_path.is_none());
        assert!((config.taxonomy.learn_threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.extraction.context_sentences, 1);
        assert!(config.extraction.structural);
        assert!((config.scoring.backing_boost - 0.15).abs() < f32::EPSILON);
        assert!((config.scoring.min_known_confidence - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.session.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.extraction.context_sentences, config.extraction.context_sentences);
        assert!((back.scoring.weights.duration - config.scoring.weights.duration).abs() < f32::EPSILON);
    }

    // =========================================================================
    // Patching
    // =========================================================================

    #[test]
    fn partial_patch_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [scoring.weights]
            duration = 0.5

            [session]
            threads = 4
            "#,
        )
        .unwrap();

        assert!((config.scoring.weights.duration - 0.5).abs() < f32::EPSILON);
        assert!((config.scoring.weights.responsibility - 0.25).abs() < f32::EPSILON);
        assert_eq!(config.session.threads, 4);
        assert!(config.extraction.structural);
    }

    #[test]
    fn custom_patterns_accumulate_without_duplicates() {
        let mut config = Config::default();
        let patch = || ConfigPatch {
            extraction: Some(ExtractionPatch {
                custom_patterns: Some(vec![CustomPattern {
                    pattern: r"(?i)fluent in ([a-z]+)".to_string(),
                    confidence: 0.6,
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };
        config.merge_patch(patch());
        config.merge_patch(patch());
        assert_eq!(config.extraction.custom_patterns.len(), 1);
    }

    #[test]
    fn unknown_section_is_rejected() {
        let err = Config::from_toml_str("[search]\nlimit = 3\n").unwrap_err();
        assert!(matches!(err, SpError::Config(_)));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn out_of_range_boost_is_rejected() {
        let err = Config::from_toml_str("[scoring]\nbacking_boost = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("backing_boost"));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let err = Config::from_toml_str("[scoring.weights]\ncognitive = -0.1\n").unwrap_err();
        assert!(err.to_string().contains("cognitive"));
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let raw = "[scoring.weights]\nkeywords = 0.0\nduration = 0.0\ncognitive = 0.0\n\
                   project_scale = 0.0\nresponsibility = 0.0\n";
        assert!(Config::from_toml_str(raw).is_err());
    }

    // =========================================================================
    // File loading
    // =========================================================================

    #[test]
    fn load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[extraction]\ncontext_sentences = 2\n").unwrap();

        let config = Config::load(Some(&path), dir.path()).unwrap();
        assert_eq!(config.extraction.context_sentences, 2);
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn load_patch_reports_parse_errors_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[scoring\n").unwrap();

        let err = Config::load_patch(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
