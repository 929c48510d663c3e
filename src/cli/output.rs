use clap::ValueEnum;
use serde::Serialize;

use crate::error::{ErrorCode, Result, SpError, StructuredError};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    /// Rich error with structured information
    #[serde(rename = "error")]
    StructuredError {
        /// Error code enum value (e.g., "TAXONOMY_INVALID")
        code: ErrorCode,
        /// Numeric error code (e.g., 101)
        numeric_code: u16,
        message: String,
        /// Actionable suggestion for recovery
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
    /// Some documents were not processed
    Partial { completed: usize, skipped: usize },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

/// Create a robot error response from an [`SpError`] with structured information.
pub fn robot_error_structured(err: &SpError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: err.to_structured().into(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

impl From<StructuredError> for RobotStatus {
    fn from(err: StructuredError) -> Self {
        Self::StructuredError {
            code: err.code,
            numeric_code: err.numeric_code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
            recoverable: err.recoverable,
            category: err.category,
        }
    }
}

impl<T> RobotResponse<T> {
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    #[must_use]
    pub fn partial(mut self, completed: usize, skipped: usize) -> Self {
        self.status = RobotStatus::Partial { completed, skipped };
        self
    }
}

/// Print a response as pretty JSON on stdout.
pub fn emit_json<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(response)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_shape() {
        let json = serde_json::to_value(robot_ok(vec![1, 2])).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json.get("warnings").is_none());
    }

    #[test]
    fn structured_error_response() {
        let err = SpError::PatternCompile {
            pattern: "(x".to_string(),
            reason: "unclosed group".to_string(),
        };
        let json = serde_json::to_value(robot_error_structured(&err)).unwrap();
        assert_eq!(json["status"]["error"]["code"], "PATTERN_COMPILE");
        assert_eq!(json["status"]["error"]["numeric_code"], 201);
        assert!(
            json["status"]["error"]["suggestion"]
                .as_str()
                .unwrap()
                .contains("(x")
        );
    }

    #[test]
    fn partial_status() {
        let json = serde_json::to_value(robot_ok(()).partial(1, 2)).unwrap();
        assert_eq!(json["status"]["partial"]["skipped"], 2);
    }
}
