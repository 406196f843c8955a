//! Rule registry: which checks apply to which entity kind, document
//! context and field.
//!
//! Resolution per key: if anything external is registered for the key,
//! engine defaults for that key are ignored entirely. Otherwise defaults
//! apply. Per-check overrides are then merged on top key by key.

pub mod check_set;
pub mod defaults;
pub mod snapshot;

use std::borrow::Cow;
use std::collections::HashMap;

pub use check_set::CheckSet;
pub use snapshot::RegistrySnapshot;

use crate::error::CheckerError;
use crate::model::CheckConfig;

/// Which rule table a registration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Entity,
    Document,
    Field,
}

#[derive(Debug, Clone, Default)]
struct RuleLayer {
    defaults: HashMap<String, CheckSet>,
    external: HashMap<String, CheckSet>,
    overrides: HashMap<String, CheckSet>,
}

impl RuleLayer {
    fn with_defaults(defaults: HashMap<String, CheckSet>) -> Self {
        RuleLayer {
            defaults,
            ..RuleLayer::default()
        }
    }

    fn resolve(&self, key: &str) -> Cow<'_, CheckSet> {
        let base = match self.external.get(key) {
            Some(set) if set.is_declared() => Some(set),
            _ => self.defaults.get(key),
        };

        match (base, self.overrides.get(key)) {
            (Some(base), None) => Cow::Borrowed(base),
            (None, None) => Cow::Owned(CheckSet::new()),
            (base, Some(overlay)) => {
                let mut merged = base.cloned().unwrap_or_default();
                merged.overlay(overlay);
                Cow::Owned(merged)
            }
        }
    }
}

/// Read-only during a validation pass. Mutations happen between passes and
/// bump [`RuleRegistry::revision`].
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    entities: RuleLayer,
    documents: RuleLayer,
    fields: RuleLayer,
    revision: u64,
}

impl RuleRegistry {
    /// A registry with no engine defaults.
    pub fn new() -> Self {
        RuleRegistry::default()
    }

    /// A registry seeded with the engine's default rules.
    pub fn with_defaults() -> Self {
        RuleRegistry {
            entities: RuleLayer::with_defaults(defaults::entity_defaults()),
            documents: RuleLayer::with_defaults(defaults::document_defaults()),
            fields: RuleLayer::with_defaults(defaults::field_defaults()),
            revision: 0,
        }
    }

    /// Engine defaults plus the snapshot's registrations.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> Self {
        let mut registry = RuleRegistry::with_defaults();
        registry.apply_snapshot(snapshot);
        registry
    }

    pub fn from_json(json: &str) -> Result<Self, CheckerError> {
        let snapshot: RegistrySnapshot =
            serde_json::from_str(json).map_err(CheckerError::Registry)?;
        Ok(RuleRegistry::from_snapshot(snapshot))
    }

    pub fn apply_snapshot(&mut self, snapshot: RegistrySnapshot) {
        for (kind, set) in snapshot.entities {
            self.register(Scope::Entity, kind, set);
        }
        for (key, set) in snapshot.documents {
            self.register(Scope::Document, key, set);
        }
        for (key, set) in snapshot.fields {
            self.register(Scope::Field, key, set);
        }
        for (kind, set) in snapshot.overrides {
            for (name, config) in set.iter() {
                self.override_check(Scope::Entity, kind.clone(), name, config.clone());
            }
        }
    }

    /// Replaces the external rule set for `key`.
    pub fn register(&mut self, scope: Scope, key: impl Into<String>, set: CheckSet) {
        self.layer_mut(scope).external.insert(key.into(), set);
        self.revision += 1;
    }

    /// Adds one check to the external rule set for `key`. The first check
    /// registered for a key suppresses that key's defaults.
    pub fn register_check(
        &mut self,
        scope: Scope,
        key: impl Into<String>,
        name: impl Into<String>,
        config: CheckConfig,
    ) {
        self.layer_mut(scope)
            .external
            .entry(key.into())
            .or_default()
            .insert(name, config);
        self.revision += 1;
    }

    /// Replaces a single check for `key` without touching the rest of its set.
    pub fn override_check(
        &mut self,
        scope: Scope,
        key: impl Into<String>,
        name: impl Into<String>,
        config: CheckConfig,
    ) {
        self.layer_mut(scope)
            .overrides
            .entry(key.into())
            .or_default()
            .insert(name, config);
        self.revision += 1;
    }

    pub fn checks_for(&self, kind: &str) -> Cow<'_, CheckSet> {
        self.entities.resolve(kind)
    }

    pub fn document_checks_for(&self, key: &str) -> Cow<'_, CheckSet> {
        self.documents.resolve(key)
    }

    pub fn field_checks_for(&self, key: &str) -> Cow<'_, CheckSet> {
        self.fields.resolve(key)
    }

    pub fn checks_in(&self, scope: Scope, key: &str) -> Cow<'_, CheckSet> {
        match scope {
            Scope::Entity => self.checks_for(key),
            Scope::Document => self.document_checks_for(key),
            Scope::Field => self.field_checks_for(key),
        }
    }

    /// Incremented on every external change; hosts compare it to decide
    /// whether a fresh pass is due.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn layer_mut(&mut self, scope: Scope) -> &mut RuleLayer {
        match scope {
            Scope::Entity => &mut self.entities,
            Scope::Document => &mut self.documents,
            Scope::Field => &mut self.fields,
        }
    }
}
