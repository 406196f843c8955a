//! Serde target for externally supplied rule snapshots.

use std::collections::HashMap;

use serde::Deserialize;

use super::check_set::CheckSet;
use crate::model::{Category, CheckConfig, Severity};

fn default_enabled() -> bool {
    true
}

/// A rule as authored. `type` is kept as text so one unrecognized value
/// drops only that rule instead of failing the whole snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCheckConfig {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default, rename = "type")]
    rule_type: Option<String>,
    #[serde(default)]
    category: Category,
    message: Option<String>,
    error_message: Option<String>,
    warning_message: Option<String>,
}

impl RawCheckConfig {
    /// `type: "none"` is the authored way to switch a rule off, so it
    /// becomes a disabled check: it still occupies its key (suppressing
    /// defaults, replacing an overlaid default) but never runs. A missing
    /// type reads as `warning`. Any other value yields `Err` with the
    /// offending type.
    pub(crate) fn normalize(self) -> Result<CheckConfig, String> {
        let (severity, enabled) = match self.rule_type.as_deref() {
            Some("error") => (Severity::Error, self.enabled),
            Some("warning") | None => (Severity::Warning, self.enabled),
            Some("none") => (Severity::Warning, false),
            Some(other) => return Err(other.to_string()),
        };
        Ok(CheckConfig {
            enabled,
            severity,
            category: self.category,
            message: self.message,
            error_message: self.error_message,
            warning_message: self.warning_message,
            validator: None,
        })
    }
}

/// `{ entities, documents, fields, overrides }`, each keyed by kind,
/// document context key or field key respectively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub entities: HashMap<String, CheckSet>,
    #[serde(default)]
    pub documents: HashMap<String, CheckSet>,
    #[serde(default)]
    pub fields: HashMap<String, CheckSet>,
    /// Per-check overlay on entity kinds.
    #[serde(default)]
    pub overrides: HashMap<String, CheckSet>,
}
