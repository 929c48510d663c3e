//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Taxonomy errors
//! - 2xx: Extraction errors
//! - 3xx: Config errors
//! - 4xx: Document errors
//! - 5xx: Session errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `TaxonomyInvalid` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Taxonomy errors (1xx)
    // ========================================
    /// E101: Taxonomy source has invalid content
    TaxonomyInvalid,
    /// E102: Custom taxonomy file does not exist
    TaxonomyNotFound,
    /// E103: Taxonomy file could not be parsed
    TaxonomyParseError,
    /// E104: A related-skill edge points at an unknown skill
    TaxonomyDanglingRelated,

    // ========================================
    // Extraction errors (2xx)
    // ========================================
    /// E201: An extraction template failed to compile
    PatternCompile,
    /// E202: The linguistic annotator failed
    AnnotationFailed,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file not found
    ConfigNotFound,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Document errors (4xx)
    // ========================================
    /// E401: Document source has no text for the requested id
    DocumentNotFound,
    /// E402: Document text was empty
    DocumentEmpty,

    // ========================================
    // Session errors (5xx)
    // ========================================
    /// E501: Session was cancelled before completion
    SessionCancelled,
    /// E502: Worker pool could not be created
    ThreadPoolError,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Serialization/deserialization failed
    SerializationError,
    /// E602: IO operation failed
    IoError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `TaxonomyInvalid` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::TaxonomyInvalid => 101,
            Self::TaxonomyNotFound => 102,
            Self::TaxonomyParseError => 103,
            Self::TaxonomyDanglingRelated => 104,

            Self::PatternCompile => 201,
            Self::AnnotationFailed => 202,

            Self::ConfigNotFound => 301,
            Self::ConfigInvalid => 302,

            Self::DocumentNotFound => 401,
            Self::DocumentEmpty => 402,

            Self::SessionCancelled => 501,
            Self::ThreadPoolError => 502,

            Self::SerializationError => 601,
            Self::IoError => 602,

            Self::InternalError => 901,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::TaxonomyInvalid => "Check the custom taxonomy file: every skill needs a non-empty name and a known category",
            Self::TaxonomyNotFound => "Check the taxonomy path in config or SKILLPROF_TAXONOMY",
            Self::TaxonomyParseError => "The taxonomy file must be JSON, TOML or YAML. Check its syntax",
            Self::TaxonomyDanglingRelated => "Every related skill must also be defined as a skill or certification",

            Self::PatternCompile => "Fix the regex in [extraction] custom_patterns. Each pattern needs one capture group",
            Self::AnnotationFailed => "Structural extraction was skipped. Pattern extraction results are still available",

            Self::ConfigNotFound => "Create skillprof.toml or pass --config <path>",
            Self::ConfigInvalid => "Check TOML syntax and value ranges in the config file",

            Self::DocumentNotFound => "Check the document path or identifier",
            Self::DocumentEmpty => "The document has no text. Convert it to plain text first",

            Self::SessionCancelled => "The run was interrupted. Re-run to process the skipped documents",
            Self::ThreadPoolError => "Lower [session] threads or unset SKILLPROF_THREADS",

            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",

            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::SerializationError | Self::InternalError)
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "taxonomy",
            2 => "extraction",
            3 => "config",
            4 => "document",
            5 => "session",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::TaxonomyInvalid,
            Self::TaxonomyNotFound,
            Self::TaxonomyParseError,
            Self::TaxonomyDanglingRelated,
            Self::PatternCompile,
            Self::AnnotationFailed,
            Self::ConfigNotFound,
            Self::ConfigInvalid,
            Self::DocumentNotFound,
            Self::DocumentEmpty,
            Self::SessionCancelled,
            Self::ThreadPoolError,
            Self::SerializationError,
            Self::IoError,
            Self::InternalError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
