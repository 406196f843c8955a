//! Single-entity validation.

use crate::dispatch::Dispatcher;
use crate::model::{Entity, EntityValidationResult, Issue};
use crate::registry::{CheckSet, RuleRegistry};

use super::issue::{build_issue, sort_issues};

/// Validates one entity against the checks registered for its kind.
/// Never looks at siblings or ancestors.
#[derive(Debug, Clone, Copy)]
pub struct EntityValidator<'a> {
    registry: &'a RuleRegistry,
    dispatcher: &'a Dispatcher,
}

impl<'a> EntityValidator<'a> {
    pub fn new(registry: &'a RuleRegistry, dispatcher: &'a Dispatcher) -> Self {
        EntityValidator {
            registry,
            dispatcher,
        }
    }

    pub fn validate(&self, entity: &Entity) -> EntityValidationResult {
        let checks = self.registry.checks_for(&entity.kind);
        if checks.is_empty() {
            return EntityValidationResult::valid(entity.id.clone(), entity.kind.clone());
        }

        let issues = self
            .failed_checks(entity, &checks)
            .into_iter()
            .map(|issue| issue.with_entity(entity.id.clone()))
            .collect();
        EntityValidationResult::from_issues(entity.id.clone(), entity.kind.clone(), issues)
    }

    /// Issues for every enabled check in `checks` that `entity` fails,
    /// sorted by priority. Origin fields are left for the caller to set.
    pub(crate) fn failed_checks(&self, entity: &Entity, checks: &CheckSet) -> Vec<Issue> {
        let mut issues: Vec<Issue> = checks
            .iter()
            .filter(|(_, config)| config.enabled)
            .filter(|(name, config)| !self.dispatcher.run_check(entity, name, config))
            .map(|(name, config)| build_issue(name, config))
            .collect();
        sort_issues(&mut issues);
        issues
    }
}
