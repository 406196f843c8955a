//! Engine configuration. Every field has a default, so `{}` is a valid config.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CheckerError;
use crate::model::Entity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub headings: HeadingPolicy,
}

impl EngineConfig {
    /// Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, CheckerError> {
        if json.trim().is_empty() {
            return Ok(EngineConfig::default());
        }
        serde_json::from_str(json).map_err(CheckerError::Config)
    }
}

/// Which entities count as headings and how their rank is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingPolicy {
    pub kinds: Vec<String>,
    pub rank_attribute: String,
    /// Rank assumed when the attribute is missing or unreadable.
    pub default_rank: u8,
    pub allowed_starting_ranks: Vec<u8>,
}

impl Default for HeadingPolicy {
    fn default() -> Self {
        HeadingPolicy {
            kinds: vec!["core/heading".to_string()],
            rank_attribute: "level".to_string(),
            default_rank: 2,
            allowed_starting_ranks: vec![1, 2],
        }
    }
}

impl HeadingPolicy {
    pub fn is_heading(&self, entity: &Entity) -> bool {
        self.kinds.iter().any(|k| *k == entity.kind)
    }

    pub fn rank_of(&self, entity: &Entity) -> u8 {
        let rank = match entity.attr(&self.rank_attribute) {
            Some(Value::Number(n)) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<u8>().ok(),
            _ => None,
        };
        rank.unwrap_or(self.default_rank)
    }

    pub fn is_allowed_start(&self, rank: u8) -> bool {
        self.allowed_starting_ranks.contains(&rank)
    }
}
