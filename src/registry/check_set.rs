//! Ordered check map. Iteration order is registration order, which is the
//! tie-break order for issues of equal priority.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use tracing::warn;

use super::snapshot::RawCheckConfig;
use crate::model::CheckConfig;

#[derive(Debug, Clone, Default)]
pub struct CheckSet {
    entries: Vec<(String, CheckConfig)>,
    /// Set when decoded from a non-empty authored map, even if every rule
    /// in it was dropped as unreadable.
    declared: bool,
}

impl CheckSet {
    pub fn new() -> Self {
        CheckSet::default()
    }

    pub fn with(mut self, name: impl Into<String>, config: CheckConfig) -> Self {
        self.insert(name, config);
        self
    }

    /// Replaces an existing check in place, otherwise appends.
    pub fn insert(&mut self, name: impl Into<String>, config: CheckConfig) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = config,
            None => self.entries.push((name, config)),
        }
    }

    /// Per-key merge: every check in `other` wins over a check of the same name.
    pub fn overlay(&mut self, other: &CheckSet) {
        for (name, config) in other.iter() {
            self.insert(name, config.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&CheckConfig> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this set counts as a registration for its key, i.e. whether
    /// it suppresses the key's engine defaults.
    pub fn is_declared(&self) -> bool {
        self.declared || !self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckConfig)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<String>> FromIterator<(N, CheckConfig)> for CheckSet {
    fn from_iter<I: IntoIterator<Item = (N, CheckConfig)>>(iter: I) -> Self {
        let mut set = CheckSet::new();
        for (name, config) in iter {
            set.insert(name, config);
        }
        set
    }
}

impl<'de> Deserialize<'de> for CheckSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CheckSetVisitor)
    }
}

struct CheckSetVisitor;

impl<'de> Visitor<'de> for CheckSetVisitor {
    type Value = CheckSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of check name to check config")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<CheckSet, A::Error> {
        let mut set = CheckSet::new();
        while let Some((name, raw)) = map.next_entry::<String, RawCheckConfig>()? {
            set.declared = true;
            match raw.normalize() {
                Ok(config) => set.insert(name, config),
                Err(rule_type) => {
                    warn!(check = %name, rule_type = %rule_type, "dropping check with unknown type")
                }
            }
        }
        Ok(set)
    }
}
