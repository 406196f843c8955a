//! Save gate: whether the current document may be saved.

use serde::Serialize;
use tracing::debug;

use crate::model::DocumentValidationResult;

/// True iff any issue anywhere in the document is an error.
pub fn should_block_save(result: &DocumentValidationResult) -> bool {
    result.has_errors
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateTransition {
    Lock,
    Unlock,
}

/// Tracks the last decision so the host's save lock is toggled once per
/// change instead of on every pass. The decision itself is recomputed from
/// each result; only the previous boolean is kept.
#[derive(Debug, Clone, Default)]
pub struct SaveGate {
    last: Option<bool>,
}

impl SaveGate {
    pub fn new() -> Self {
        SaveGate::default()
    }

    /// Returns a transition when the decision differs from the previous
    /// one. The first observation always reports.
    pub fn observe(&mut self, result: &DocumentValidationResult) -> Option<GateTransition> {
        let blocking = should_block_save(result);
        if self.last == Some(blocking) {
            return None;
        }
        self.last = Some(blocking);
        let transition = if blocking {
            GateTransition::Lock
        } else {
            GateTransition::Unlock
        };
        debug!(?transition, "save gate changed");
        Some(transition)
    }

    pub fn is_locked(&self) -> bool {
        self.last == Some(true)
    }

    /// Forget the last decision, e.g. when a different document is loaded.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
