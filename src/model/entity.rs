//! Entity tree nodes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque key-value data interpreted only by check implementations.
pub type Attributes = serde_json::Map<String, Value>;

/// Stable per-entity handle used to report which entity failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId(id)
    }
}

/// A node in the content tree.
///
/// Accepts the block editor's own field names (`clientId`, `name`,
/// `innerBlocks`) as aliases so raw editor JSON decodes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(alias = "clientId")]
    pub id: EntityId,
    #[serde(alias = "name")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default, alias = "innerBlocks")]
    pub children: Vec<Entity>,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, kind: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            kind: kind.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Entity>) -> Self {
        self.children = children;
        self
    }

    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}
