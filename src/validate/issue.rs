//! Failed check → Issue.

use crate::model::{Category, CheckConfig, Issue, Severity};

pub const DEFAULT_ACCESSIBILITY_ERROR: &str = "This content has an accessibility error.";
pub const DEFAULT_ACCESSIBILITY_WARNING: &str = "This content has an accessibility warning.";
pub const DEFAULT_VALIDATION_ERROR: &str = "This content has a validation error.";
pub const DEFAULT_VALIDATION_WARNING: &str = "This content has a validation warning.";

/// Message lookup: severity-specific, then generic, then the built-in default.
pub fn build_issue(check_name: &str, config: &CheckConfig) -> Issue {
    let generic = config.message.as_deref();
    let error_message = config
        .error_message
        .as_deref()
        .or(generic)
        .unwrap_or(default_message(config.category, Severity::Error));
    let warning_message = config
        .warning_message
        .as_deref()
        .or(generic)
        .unwrap_or(default_message(config.category, Severity::Warning));

    Issue {
        check_name: check_name.to_string(),
        severity: config.severity,
        category: config.category,
        priority: config.priority(),
        error_message: error_message.to_string(),
        warning_message: warning_message.to_string(),
        entity_id: None,
        field_key: None,
    }
}

fn default_message(category: Category, severity: Severity) -> &'static str {
    match (category, severity) {
        (Category::Accessibility, Severity::Error) => DEFAULT_ACCESSIBILITY_ERROR,
        (Category::Accessibility, Severity::Warning) => DEFAULT_ACCESSIBILITY_WARNING,
        (Category::Validation, Severity::Error) => DEFAULT_VALIDATION_ERROR,
        (Category::Validation, Severity::Warning) => DEFAULT_VALIDATION_WARNING,
    }
}

/// Ascending priority. Stable, so equal priorities keep check order.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by_key(|issue| issue.priority);
}
