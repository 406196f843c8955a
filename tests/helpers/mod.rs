use checker::config::EngineConfig;
use checker::dispatch::Dispatcher;
use checker::model::*;
use checker::registry::{CheckSet, RuleRegistry, Scope};

// =============================================================================
// Entity builders
// =============================================================================

pub fn image(id: &str, alt: &str) -> Entity {
    Entity::new(id, "core/image").with_attr("alt", alt)
}

pub fn heading(id: &str, level: u8) -> Entity {
    Entity::new(id, "core/heading")
        .with_attr("level", level)
        .with_attr("content", format!("Heading {}", id))
}

pub fn button(id: &str, text: &str, url: &str) -> Entity {
    Entity::new(id, "core/button")
        .with_attr("text", text)
        .with_attr("url", url)
}

pub fn group(id: &str, children: Vec<Entity>) -> Entity {
    Entity::new(id, "core/group").with_children(children)
}

/// Headings `h0`, `h1`, ... with the given ranks, in order.
pub fn headings(ranks: &[u8]) -> Vec<Entity> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, rank)| heading(&format!("h{}", i), *rank))
        .collect()
}

// =============================================================================
// Rule builders
// =============================================================================

/// An error-severity check that always fails.
pub fn failing_error(message: &str) -> CheckConfig {
    CheckConfig::error(message).with_validator(|_, _| false)
}

/// A warning-severity check that always fails.
pub fn failing_warning(message: &str) -> CheckConfig {
    CheckConfig::warning(message).with_validator(|_, _| false)
}

/// An empty registry (no engine defaults) with one external rule set.
pub fn registry_with(kind: &str, set: CheckSet) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Scope::Entity, kind, set);
    registry
}

/// Registry with only the heading document checks for context `post`.
pub fn heading_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(
        Scope::Document,
        "post",
        CheckSet::new()
            .with("heading_order", CheckConfig::error("Do not skip heading levels."))
            .with("heading_start", CheckConfig::warning("Start with a level 1 or 2 heading.")),
    );
    registry
}

pub fn post() -> DocumentContext {
    DocumentContext::new("post")
}

pub fn run_document(registry: &RuleRegistry, roots: &[Entity]) -> DocumentValidationResult {
    checker::validate::validate_document(
        registry,
        &Dispatcher::new(),
        &EngineConfig::default(),
        roots,
        &post(),
    )
}

// =============================================================================
// Assertions
// =============================================================================

pub fn check_names(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.check_name.as_str()).collect()
}

pub fn attributed_ids(issues: &[Issue]) -> Vec<&str> {
    issues
        .iter()
        .filter_map(|i| i.entity_id.as_ref().map(|id| id.as_str()))
        .collect()
}
