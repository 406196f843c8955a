//! Per-entity and per-document validation results.

use serde::{Deserialize, Serialize};

use super::check::{Issue, Severity};
use super::entity::EntityId;

/// Error dominates Warning regardless of order; `None` when there are no issues.
pub fn dominant_severity<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Option<Severity> {
    let mut severity = None;
    for issue in issues {
        match issue.severity {
            Severity::Error => return Some(Severity::Error),
            Severity::Warning => severity = Some(Severity::Warning),
        }
    }
    severity
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityValidationResult {
    pub id: EntityId,
    pub kind: String,
    pub is_valid: bool,
    pub severity: Option<Severity>,
    pub issues: Vec<Issue>,
}

impl EntityValidationResult {
    pub fn valid(id: EntityId, kind: impl Into<String>) -> Self {
        EntityValidationResult {
            id,
            kind: kind.into(),
            is_valid: true,
            severity: None,
            issues: Vec::new(),
        }
    }

    /// Builds a result from issues already in priority order.
    pub fn from_issues(id: EntityId, kind: impl Into<String>, issues: Vec<Issue>) -> Self {
        EntityValidationResult {
            id,
            kind: kind.into(),
            is_valid: issues.is_empty(),
            severity: dominant_severity(&issues),
            issues,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.severity == Some(Severity::Error)
    }
}

/// Issues partitioned by where they came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuesBySource {
    /// Only entities that failed at least one check, in document order.
    pub entities: Vec<EntityValidationResult>,
    pub document_level: Vec<Issue>,
    pub fields: Vec<Issue>,
}

impl IssuesBySource {
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.entities
            .iter()
            .flat_map(|r| r.issues.iter())
            .chain(self.document_level.iter())
            .chain(self.fields.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentValidationResult {
    pub issues_by_source: IssuesBySource,
    pub has_errors: bool,
    pub has_warnings: bool,
    pub blocking: bool,
}

impl DocumentValidationResult {
    pub fn new(issues_by_source: IssuesBySource) -> Self {
        let has_errors = issues_by_source.iter().any(Issue::is_error);
        let has_warnings = issues_by_source
            .iter()
            .any(|i| i.severity == Severity::Warning);
        DocumentValidationResult {
            issues_by_source,
            has_errors,
            has_warnings,
            blocking: has_errors,
        }
    }

    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues_by_source.iter()
    }

    pub fn issue_count(&self) -> usize {
        self.issues().count()
    }

    pub fn severity(&self) -> Option<Severity> {
        dominant_severity(self.issues())
    }
}
