//! Validation phase.
//!
//! Entity checks see one entity at a time. Document checks see the whole
//! tree. Field checks run the entity pipeline over named document fields.

pub mod document;
pub mod entity;
pub mod heading;
pub mod issue;
pub mod tree;

pub use document::DocumentValidator;
pub use entity::EntityValidator;
pub use issue::build_issue;
pub use tree::DocumentTree;

use crate::config::EngineConfig;
use crate::dispatch::Dispatcher;
use crate::model::{DocumentContext, DocumentValidationResult, Entity, EntityValidationResult};
use crate::registry::RuleRegistry;

/// Validate a single entity.
pub fn validate_entity(
    registry: &RuleRegistry,
    dispatcher: &Dispatcher,
    entity: &Entity,
) -> EntityValidationResult {
    EntityValidator::new(registry, dispatcher).validate(entity)
}

/// Validate an entity tree together with its document context.
pub fn validate_document(
    registry: &RuleRegistry,
    dispatcher: &Dispatcher,
    config: &EngineConfig,
    roots: &[Entity],
    ctx: &DocumentContext,
) -> DocumentValidationResult {
    DocumentValidator::new(registry, dispatcher, config).validate_document(roots, ctx)
}
