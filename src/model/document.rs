//! Document-level context: the key selecting document checks, plus
//! auxiliary fields validated outside the entity tree.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entity::{Attributes, Entity, EntityId};

/// Attribute under which a field's value is exposed to checks.
pub const FIELD_VALUE_ATTRIBUTE: &str = "value";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub key: String,
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Field {
            key: key.into(),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// View the field as a childless entity keyed by the field name.
    pub fn to_entity(&self) -> Entity {
        let mut attributes = self.attributes.clone();
        attributes.insert(FIELD_VALUE_ATTRIBUTE.to_string(), self.value.clone());
        Entity {
            id: EntityId::new(self.key.clone()),
            kind: self.key.clone(),
            attributes,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContext {
    /// Selects the document-level rule set, e.g. a post type.
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl DocumentContext {
    pub fn new(key: impl Into<String>) -> Self {
        DocumentContext {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// A full content snapshot: context plus the root entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub context: DocumentContext,
    #[serde(default, alias = "blocks")]
    pub entities: Vec<Entity>,
}
