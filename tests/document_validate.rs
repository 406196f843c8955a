//! Whole-document validation: tree walk, heading rank checks, fields.

#[allow(dead_code)]
mod helpers;

use checker::config::{EngineConfig, HeadingPolicy};
use checker::dispatch::Dispatcher;
use checker::model::{
    CheckConfig, Document, DocumentContext, EntityId, Field, Severity,
};
use checker::registry::{CheckSet, RuleRegistry, Scope};
use checker::validate::DocumentValidator;
use helpers::*;

// =============================================================================
// Heading rank scenarios
// =============================================================================

#[test]
fn skipped_level_is_attributed_to_the_deeper_heading() {
    let result = run_document(&heading_registry(), &headings(&[1, 3]));
    let issues = &result.issues_by_source.document_level;
    assert_eq!(check_names(issues), vec!["heading_order"]);
    assert_eq!(attributed_ids(issues), vec!["h1"]);
}

#[test]
fn allowed_start_and_single_steps_pass() {
    let result = run_document(&heading_registry(), &headings(&[2, 3, 4]));
    assert!(result.issues_by_source.document_level.is_empty());
    assert!(!result.blocking);
}

#[test]
fn disallowed_start_is_attributed_to_the_first_heading() {
    let result = run_document(&heading_registry(), &headings(&[3, 4]));
    let issues = &result.issues_by_source.document_level;
    assert_eq!(check_names(issues), vec!["heading_start"]);
    assert_eq!(attributed_ids(issues), vec!["h0"]);
    // heading_start is a warning in this registry.
    assert!(!result.blocking);
    assert!(result.has_warnings);
}

#[test]
fn headings_nested_in_groups_are_scanned_in_document_order() {
    let roots = vec![
        heading("top", 1),
        group("cols", vec![group("col", vec![heading("inner", 2)])]),
        heading("tail", 4),
    ];
    let result = run_document(&heading_registry(), &roots);
    assert_eq!(
        attributed_ids(&result.issues_by_source.document_level),
        vec!["tail"]
    );
}

#[test]
fn starting_ranks_are_configurable() {
    let config = EngineConfig {
        headings: HeadingPolicy {
            allowed_starting_ranks: vec![1],
            ..HeadingPolicy::default()
        },
    };
    let registry = heading_registry();
    let dispatcher = Dispatcher::new();
    let validator = DocumentValidator::new(&registry, &dispatcher, &config);
    let result = validator.validate_document(&headings(&[2, 3]), &post());
    assert_eq!(
        check_names(&result.issues_by_source.document_level),
        vec!["heading_start"]
    );
}

#[test]
fn heading_kinds_and_rank_attribute_are_configurable() {
    let config = EngineConfig {
        headings: HeadingPolicy {
            kinds: vec!["acme/title".to_string()],
            rank_attribute: "rank".to_string(),
            ..HeadingPolicy::default()
        },
    };
    let roots = vec![
        checker::model::Entity::new("t1", "acme/title").with_attr("rank", 1),
        // Not a heading under this policy.
        heading("ignored", 6),
        checker::model::Entity::new("t2", "acme/title").with_attr("rank", 3),
    ];
    let registry = heading_registry();
    let dispatcher = Dispatcher::new();
    let result =
        DocumentValidator::new(&registry, &dispatcher, &config).validate_document(&roots, &post());
    assert_eq!(
        attributed_ids(&result.issues_by_source.document_level),
        vec!["t2"]
    );
}

#[test]
fn interceptors_can_override_document_level_verdicts() {
    let registry = heading_registry();
    let mut dispatcher = Dispatcher::new();
    dispatcher.intercept(|valid, _, attrs, name, _| {
        // Allow skips into level 3 sidebars.
        if name == "heading_order" && attrs.get("level").and_then(|v| v.as_u64()) == Some(3) {
            return true;
        }
        valid
    });
    let config = EngineConfig::default();
    let validator = DocumentValidator::new(&registry, &dispatcher, &config);

    let result = validator.validate_document(&headings(&[1, 3]), &post());
    assert!(result.issues_by_source.document_level.is_empty());

    let result = validator.validate_document(&headings(&[1, 4]), &post());
    assert_eq!(
        attributed_ids(&result.issues_by_source.document_level),
        vec!["h1"]
    );
}

#[test]
fn disabled_and_unknown_document_checks_produce_nothing() {
    let mut registry = RuleRegistry::new();
    registry.register(
        Scope::Document,
        "post",
        CheckSet::new()
            .with("heading_order", CheckConfig::error("order").disabled())
            .with("reading_level", CheckConfig::error("unknown check")),
    );
    let result = run_document(&registry, &headings(&[1, 4]));
    assert!(result.issues_by_source.document_level.is_empty());
}

#[test]
fn context_without_document_checks_skips_heading_scan() {
    let registry = heading_registry();
    let dispatcher = Dispatcher::new();
    let config = EngineConfig::default();
    let result = DocumentValidator::new(&registry, &dispatcher, &config)
        .validate_document(&headings(&[4, 1, 6]), &DocumentContext::new("attachment"));
    assert!(result.issues_by_source.document_level.is_empty());
}

#[test]
fn missing_rank_uses_default_rank() {
    let roots = vec![
        heading("h0", 1),
        // No level attribute: treated as level 2.
        checker::model::Entity::new("h1", "core/heading").with_attr("content", "x"),
        heading("h2", 3),
    ];
    let result = run_document(&heading_registry(), &roots);
    assert!(result.issues_by_source.document_level.is_empty());
}

// =============================================================================
// Re-deriving one entity's verdict
// =============================================================================

#[test]
fn issues_for_entity_merges_document_level_issues() {
    let registry = {
        let mut r = heading_registry();
        r.register(
            Scope::Entity,
            "core/heading",
            CheckSet::new().with("heading_note", failing_warning("note")),
        );
        r
    };
    let dispatcher = Dispatcher::new();
    let config = EngineConfig::default();
    let validator = DocumentValidator::new(&registry, &dispatcher, &config);
    let roots = headings(&[1, 3, 4]);

    let id = EntityId::from("h1");
    let first = validator.issues_for_entity(&roots, &post(), &id).unwrap();
    let second = validator.issues_for_entity(&roots, &post(), &id).unwrap();
    assert_eq!(first, second);
    // Error from the document scan sorts ahead of the entity's own warning.
    assert_eq!(check_names(&first.issues), vec!["heading_order", "heading_note"]);
    assert_eq!(first.severity, Some(Severity::Error));

    let clean = validator
        .issues_for_entity(&roots, &post(), &EntityId::from("h2"))
        .unwrap();
    assert_eq!(check_names(&clean.issues), vec!["heading_note"]);

    assert!(
        validator
            .issues_for_entity(&roots, &post(), &EntityId::from("missing"))
            .is_none()
    );
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn fields_are_validated_by_key() {
    let registry = RuleRegistry::with_defaults();
    let dispatcher = Dispatcher::new();
    let config = EngineConfig::default();
    let validator = DocumentValidator::new(&registry, &dispatcher, &config);

    let ctx = DocumentContext::new("post")
        .with_field(Field::new("title", "   "))
        .with_field(Field::new("subtitle", ""));
    let result = validator.validate_document(&[], &ctx);
    let fields = &result.issues_by_source.fields;
    assert_eq!(check_names(fields), vec!["field_required"]);
    assert_eq!(fields[0].field_key.as_deref(), Some("title"));
    assert_eq!(fields[0].entity_id, None);
    assert!(result.blocking);

    let ctx = DocumentContext::new("post").with_field(Field::new("title", "Hello"));
    assert!(!validator.validate_document(&[], &ctx).blocking);
}

// =============================================================================
// Tree walk and fixtures
// =============================================================================

#[test]
fn only_invalid_entities_are_collected_in_document_order() {
    let registry = RuleRegistry::with_defaults();
    let roots = vec![
        image("ok", "A lighthouse at dusk"),
        group("g", vec![button("b", "", "/x"), image("img", "")]),
    ];
    let result = run_document(&registry, &roots);
    let ids: Vec<&str> = result
        .issues_by_source
        .entities
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "img"]);
    assert!(result.issues_by_source.entities.iter().all(|r| !r.is_valid));
}

#[test]
fn fixture_post_against_fixture_registry() {
    let registry = RuleRegistry::from_json(include_str!("fixtures/registry.json")).unwrap();
    let document: Document = serde_json::from_str(include_str!("fixtures/post.json")).unwrap();
    let result = checker::validate::validate_document(
        &registry,
        &Dispatcher::new(),
        &EngineConfig::default(),
        &document.entities,
        &document.context,
    );

    let by_source = &result.issues_by_source;
    let ids: Vec<&str> = by_source.entities.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["image-hero", "button-cta"]);
    assert_eq!(by_source.entities[0].severity, Some(Severity::Warning));
    assert_eq!(check_names(&by_source.entities[1].issues), vec!["button_link"]);
    assert_eq!(by_source.entities[1].issues[0].message(), "Buttons need a link.");

    assert_eq!(attributed_ids(&by_source.document_level), vec!["heading-deep"]);

    let field_keys: Vec<&str> = by_source
        .fields
        .iter()
        .filter_map(|i| i.field_key.as_deref())
        .collect();
    assert_eq!(field_keys, vec!["title", "excerpt"]);

    assert!(result.has_errors);
    assert!(result.has_warnings);
    assert!(result.blocking);
    assert_eq!(result.issue_count(), 5);
    assert_eq!(result.severity(), Some(Severity::Error));
}

#[test]
fn mixed_document_snapshot() {
    let mut registry = RuleRegistry::new();
    registry.register(
        Scope::Entity,
        "core/image",
        CheckSet::new().with("image_alt_text", CheckConfig::error("Add alt text.")),
    );
    registry.register(
        Scope::Document,
        "post",
        CheckSet::new().with(
            "heading_order",
            CheckConfig::warning("Do not skip heading levels."),
        ),
    );
    let roots = vec![image("img-1", ""), heading("h-1", 2), heading("h-2", 4)];
    let result = run_document(&registry, &roots);
    insta::assert_json_snapshot!("mixed_document", result);
}
