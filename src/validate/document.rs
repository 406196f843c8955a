//! Whole-document validation: entity tree, document-level checks and fields.

use tracing::debug;

use crate::config::EngineConfig;
use crate::dispatch::Dispatcher;
use crate::model::{
    DocumentContext, DocumentValidationResult, Entity, EntityId, EntityValidationResult, Field,
    Issue, IssuesBySource,
};
use crate::registry::RuleRegistry;

use super::entity::EntityValidator;
use super::heading::{self, HEADING_ORDER, HEADING_START, HeadingVerdict};
use super::issue::{build_issue, sort_issues};
use super::tree::DocumentTree;

/// One validation pass. The registry, dispatcher and config are borrowed
/// for the duration of the pass and never modified.
#[derive(Debug, Clone, Copy)]
pub struct DocumentValidator<'a> {
    registry: &'a RuleRegistry,
    dispatcher: &'a Dispatcher,
    config: &'a EngineConfig,
}

impl<'a> DocumentValidator<'a> {
    pub fn new(
        registry: &'a RuleRegistry,
        dispatcher: &'a Dispatcher,
        config: &'a EngineConfig,
    ) -> Self {
        DocumentValidator {
            registry,
            dispatcher,
            config,
        }
    }

    pub fn entity_validator(&self) -> EntityValidator<'a> {
        EntityValidator::new(self.registry, self.dispatcher)
    }

    pub fn validate_document(
        &self,
        roots: &[Entity],
        ctx: &DocumentContext,
    ) -> DocumentValidationResult {
        let tree = DocumentTree::build(roots);
        let validator = self.entity_validator();

        let entities = tree
            .pre_order()
            .into_iter()
            .map(|entity| validator.validate(entity))
            .filter(|result| !result.is_valid)
            .collect();

        DocumentValidationResult::new(IssuesBySource {
            entities,
            document_level: self.document_issues(&tree, ctx),
            fields: self.field_issues(ctx),
        })
    }

    /// Issues from checks that need the whole document, e.g. heading order.
    /// Grouped by check in registry order, then document order.
    pub fn document_issues(&self, tree: &DocumentTree<'_>, ctx: &DocumentContext) -> Vec<Issue> {
        let checks = self.registry.document_checks_for(&ctx.key);
        if checks.is_empty() {
            return Vec::new();
        }

        let policy = &self.config.headings;
        let headings = heading::collect_headings(tree, policy);
        let mut issues = Vec::new();

        for (name, config) in checks.iter().filter(|(_, c)| c.enabled) {
            let verdicts: Vec<HeadingVerdict<'_>> = match name {
                HEADING_ORDER => heading::order_verdicts(&headings),
                HEADING_START => heading::start_verdict(&headings, policy).into_iter().collect(),
                _ => {
                    debug!(check = name, context = %ctx.key, "unknown document-level check, skipping");
                    continue;
                }
            };

            for verdict in verdicts {
                let entity = verdict.heading.entity;
                if !self.dispatcher.apply_interceptors(verdict.valid, entity, name) {
                    issues.push(build_issue(name, config).with_entity(entity.id.clone()));
                }
            }
        }

        sort_issues(&mut issues);
        issues
    }

    /// Each field is validated as a pseudo-entity keyed by its field name.
    /// Fields with no registered checks pass.
    pub fn field_issues(&self, ctx: &DocumentContext) -> Vec<Issue> {
        ctx.fields
            .iter()
            .flat_map(|field| self.validate_field(field))
            .collect()
    }

    pub fn validate_field(&self, field: &Field) -> Vec<Issue> {
        let checks = self.registry.field_checks_for(&field.key);
        if checks.is_empty() {
            return Vec::new();
        }
        let entity = field.to_entity();
        self.entity_validator()
            .failed_checks(&entity, &checks)
            .into_iter()
            .map(|issue| issue.with_field(field.key.clone()))
            .collect()
    }

    /// One entity's own result plus the document-level issues attributed
    /// to it. The document scan is redone on every call.
    pub fn issues_for_entity(
        &self,
        roots: &[Entity],
        ctx: &DocumentContext,
        id: &EntityId,
    ) -> Option<EntityValidationResult> {
        let tree = DocumentTree::build(roots);
        let entity = tree.find(id)?;
        let own = self.entity_validator().validate(entity);

        let mut issues = own.issues;
        issues.extend(
            self.document_issues(&tree, ctx)
                .into_iter()
                .filter(|issue| issue.entity_id.as_ref() == Some(id)),
        );
        sort_issues(&mut issues);
        Some(EntityValidationResult::from_issues(own.id, own.kind, issues))
    }
}
