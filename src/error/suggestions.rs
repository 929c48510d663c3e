//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints that
//! name the offending pattern, skill or path.

use serde_json::Value;

use super::codes::ErrorCode;

/// Generate a context-aware suggestion for an error.
#[must_use]
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::PatternCompile => suggest_pattern_compile(context),
        ErrorCode::TaxonomyDanglingRelated => suggest_dangling_related(context),
        ErrorCode::TaxonomyNotFound => suggest_taxonomy_not_found(context),
        ErrorCode::SessionCancelled => suggest_session_cancelled(context),
        _ => code.suggestion().to_string(),
    }
}

fn field<'a>(context: Option<&'a Value>, key: &str) -> Option<&'a str> {
    context.and_then(|c| c.get(key)).and_then(Value::as_str)
}

fn suggest_pattern_compile(context: Option<&Value>) -> String {
    match field(context, "pattern") {
        Some(pattern) => format!(
            "Pattern `{pattern}` in [extraction] custom_patterns is invalid. \
             Fix the regex and make sure it has exactly one capture group"
        ),
        None => ErrorCode::PatternCompile.suggestion().to_string(),
    }
}

fn suggest_dangling_related(context: Option<&Value>) -> String {
    match (field(context, "skill"), field(context, "related")) {
        (Some(skill), Some(related)) => format!(
            "Define '{related}' in the taxonomy file or remove it from the related list of '{skill}'"
        ),
        _ => ErrorCode::TaxonomyDanglingRelated.suggestion().to_string(),
    }
}

fn suggest_taxonomy_not_found(context: Option<&Value>) -> String {
    match field(context, "path") {
        Some(path) => format!(
            "No taxonomy at {path}. Fix [taxonomy] custom_path or SKILLPROF_TAXONOMY"
        ),
        None => ErrorCode::TaxonomyNotFound.suggestion().to_string(),
    }
}

fn suggest_session_cancelled(context: Option<&Value>) -> String {
    let completed = context.and_then(|c| c.get("completed")).and_then(Value::as_u64);
    let total = context.and_then(|c| c.get("total")).and_then(Value::as_u64);
    match (completed, total) {
        (Some(done), Some(total)) => format!(
            "Only {done} of {total} documents were processed. Re-run to cover the rest"
        ),
        _ => ErrorCode::SessionCancelled.suggestion().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_related_names_both_skills() {
        let ctx = serde_json::json!({ "skill": "AWS", "related": "Clod" });
        let hint = suggest_for_error(ErrorCode::TaxonomyDanglingRelated, Some(&ctx));
        assert!(hint.contains("'Clod'"));
        assert!(hint.contains("'AWS'"));
    }

    #[test]
    fn test_falls_back_to_static_suggestion() {
        assert_eq!(
            suggest_for_error(ErrorCode::ConfigInvalid, None),
            ErrorCode::ConfigInvalid.suggestion()
        );
        assert_eq!(
            suggest_for_error(ErrorCode::PatternCompile, None),
            ErrorCode::PatternCompile.suggestion()
        );
    }
}
