//! Error handling for skillprof.
//!
//! This module provides:
//! - [`SpError`]: The main error enum for all operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Serializable error with suggestion and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for skillprof operations.
#[derive(Error, Debug)]
pub enum SpError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid taxonomy: {0}")]
    TaxonomyInvalid(String),

    #[error("Taxonomy file not found: {0}")]
    TaxonomyNotFound(String),

    #[error("Skill '{skill}' lists unknown related skill '{related}'")]
    DanglingRelated { skill: String, related: String },

    #[error("Invalid extraction pattern '{pattern}': {reason}")]
    PatternCompile { pattern: String, reason: String },

    #[error("Annotation failed: {0}")]
    Annotation(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Document is empty: {0}")]
    DocumentEmpty(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Session cancelled after {completed} of {total} documents")]
    Cancelled { completed: usize, total: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl SpError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Yaml(_) | Self::Toml(_) => ErrorCode::TaxonomyParseError,
            Self::TaxonomyInvalid(_) => ErrorCode::TaxonomyInvalid,
            Self::TaxonomyNotFound(_) => ErrorCode::TaxonomyNotFound,
            Self::DanglingRelated { .. } => ErrorCode::TaxonomyDanglingRelated,
            Self::PatternCompile { .. } => ErrorCode::PatternCompile,
            Self::Annotation(_) => ErrorCode::AnnotationFailed,
            Self::DocumentNotFound(_) => ErrorCode::DocumentNotFound,
            Self::DocumentEmpty(_) => ErrorCode::DocumentEmpty,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Cancelled { .. } => ErrorCode::SessionCancelled,
            Self::ThreadPool(_) => ErrorCode::ThreadPoolError,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::TaxonomyNotFound(path) => Some(serde_json::json!({ "path": path })),
            Self::DanglingRelated { skill, related } => {
                Some(serde_json::json!({ "skill": skill, "related": related }))
            }
            Self::PatternCompile { pattern, reason } => {
                Some(serde_json::json!({ "pattern": pattern, "reason": reason }))
            }
            Self::DocumentNotFound(id) | Self::DocumentEmpty(id) => {
                Some(serde_json::json!({ "document_id": id }))
            }
            Self::Cancelled { completed, total } => {
                Some(serde_json::json!({ "completed": completed, "total": total }))
            }
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_sp_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "TAXONOMY_INVALID")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    pub recoverable: bool,

    /// Error category (e.g., "taxonomy", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an [`SpError`].
    #[must_use]
    pub fn from_sp_error(err: &SpError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<SpError> for StructuredError {
    fn from(err: SpError) -> Self {
        Self::from_sp_error(&err)
    }
}

impl From<&SpError> for StructuredError {
    fn from(err: &SpError) -> Self {
        Self::from_sp_error(err)
    }
}

/// Result type alias using SpError.
pub type Result<T> = std::result::Result<T, SpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sp_error_code_mapping() {
        assert_eq!(
            SpError::TaxonomyInvalid("x".into()).code(),
            ErrorCode::TaxonomyInvalid
        );
        assert_eq!(SpError::Config("bad".into()).code(), ErrorCode::ConfigInvalid);
        assert_eq!(
            SpError::DanglingRelated {
                skill: "AWS".into(),
                related: "Nope".into()
            }
            .code(),
            ErrorCode::TaxonomyDanglingRelated
        );
    }

    #[test]
    fn test_json_errors_map_to_serialization_code() {
        let err: SpError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert_eq!(err.code(), ErrorCode::SerializationError);
        assert!(ErrorCode::all().all(|code| code.numeric() != 303));
    }

    #[test]
    fn test_structured_error_from_sp_error() {
        let err = SpError::PatternCompile {
            pattern: "(unclosed".into(),
            reason: "unclosed group".into(),
        };
        let structured = StructuredError::from_sp_error(&err);

        assert_eq!(structured.code, ErrorCode::PatternCompile);
        assert_eq!(structured.numeric_code, 201);
        assert!(structured.message.contains("(unclosed"));
        assert!(structured.suggestion.contains("(unclosed"));
        assert_eq!(structured.category, "extraction");
    }

    #[test]
    fn test_structured_error_serialization() {
        let err = StructuredError::new(ErrorCode::TaxonomyNotFound, "missing file");
        let json = serde_json::to_string(&err).unwrap();

        assert!(json.contains("TAXONOMY_NOT_FOUND"));
        assert!(json.contains("\"numeric_code\":102"));
        assert!(json.contains("\"category\":\"taxonomy\""));
        assert!(!json.contains("\"context\""));
    }

    #[test]
    fn test_structured_error_display() {
        let err = StructuredError::new(ErrorCode::ConfigInvalid, "bad weight");
        assert_eq!(err.to_string(), "[E302] bad weight");
    }

    #[test]
    fn test_cancelled_context() {
        let err = SpError::Cancelled {
            completed: 2,
            total: 5,
        };
        let ctx = err.context().unwrap();
        assert_eq!(ctx["completed"], 2);
        assert_eq!(ctx["total"], 5);
    }
}
