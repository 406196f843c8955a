//! Rule definitions and the issues they produce.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::entity::{Attributes, Entity, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Sort key for issues: errors first, then warnings.
    pub fn priority(self) -> u8 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Accessibility,
    Validation,
}

/// Check logic attached directly to a rule, replacing any built-in of the same name.
#[derive(Clone)]
pub struct CustomValidator(Arc<dyn Fn(&Attributes, &Entity) -> bool + Send + Sync>);

impl CustomValidator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Attributes, &Entity) -> bool + Send + Sync + 'static,
    {
        CustomValidator(Arc::new(f))
    }

    pub fn call(&self, attributes: &Attributes, entity: &Entity) -> bool {
        (self.0)(attributes, entity)
    }
}

impl fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomValidator(..)")
    }
}

/// One rule definition.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub enabled: bool,
    pub severity: Severity,
    pub category: Category,
    pub message: Option<String>,
    pub error_message: Option<String>,
    pub warning_message: Option<String>,
    pub validator: Option<CustomValidator>,
}

impl CheckConfig {
    pub fn new(severity: Severity) -> Self {
        CheckConfig {
            enabled: true,
            severity,
            category: Category::default(),
            message: None,
            error_message: None,
            warning_message: None,
            validator: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        CheckConfig::new(Severity::Error).with_message(message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        CheckConfig::new(Severity::Warning).with_message(message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_warning_message(mut self, message: impl Into<String>) -> Self {
        self.warning_message = Some(message.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&Attributes, &Entity) -> bool + Send + Sync + 'static,
    {
        self.validator = Some(CustomValidator::new(f));
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn priority(&self) -> u8 {
        self.severity.priority()
    }
}

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub check_name: String,
    pub severity: Severity,
    pub category: Category,
    pub priority: u8,
    pub error_message: String,
    pub warning_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_key: Option<String>,
}

impl Issue {
    /// The message matching this issue's severity.
    pub fn message(&self) -> &str {
        match self.severity {
            Severity::Error => &self.error_message,
            Severity::Warning => &self.warning_message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn with_entity(mut self, id: EntityId) -> Self {
        self.entity_id = Some(id);
        self
    }

    pub fn with_field(mut self, key: impl Into<String>) -> Self {
        self.field_key = Some(key.into());
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}] {}", self.severity, self.check_name, self.message())?;
        if let Some(id) = &self.entity_id {
            write!(f, " (entity '{}')", id)?;
        }
        if let Some(key) = &self.field_key {
            write!(f, " (field '{}')", key)?;
        }
        Ok(())
    }
}
