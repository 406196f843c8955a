//! Errors raised while decoding rule snapshots, configuration and content.
//!
//! Validation itself never fails: configuration gaps pass and misbehaving
//! checks are contained at the dispatcher.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("failed to parse rule registry JSON: {0}")]
    Registry(#[source] serde_json::Error),

    #[error("failed to parse engine config JSON: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to parse content JSON: {0}")]
    Content(#[source] serde_json::Error),
}

impl CheckerError {
    /// Stable code reported to the editor.
    pub fn code(&self) -> &'static str {
        match self {
            CheckerError::Registry(_) => "C001",
            CheckerError::Config(_) => "C002",
            CheckerError::Content(_) => "C003",
        }
    }
}
