//! WASM entry points for the editor.
//!
//! Every call decodes a fresh rule snapshot and content snapshot, runs one
//! pass and hands back plain JS values. Interceptors cannot cross this
//! boundary; hosts that need them use the Rust API.

use serde::{Deserialize, Serialize};
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::EngineConfig;
use crate::dispatch::Dispatcher;
use crate::error::CheckerError;
use crate::gate;
use crate::model::{Document, DocumentValidationResult, Entity, EntityValidationResult};
use crate::registry::RuleRegistry;
use crate::validate;

/// Validate a single entity JSON against a rule registry JSON.
/// Returns `{status: "ok", result}` or `{status: "errors", errors}`.
#[wasm_bindgen]
pub fn validate_entity(entity_json: &str, registry_json: &str) -> JsValue {
    let result = Outcome::from(validate_entity_inner(entity_json, registry_json));
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_entity_inner(
    entity_json: &str,
    registry_json: &str,
) -> Result<EntityValidationResult, CheckerError> {
    let registry = RuleRegistry::from_json(registry_json)?;
    let entity: Entity = serde_json::from_str(entity_json).map_err(CheckerError::Content)?;
    Ok(validate::validate_entity(&registry, &Dispatcher::new(), &entity))
}

/// Validate a document JSON (`{context, entities}`) against a rule registry
/// JSON. A blank `config_json` selects the default engine config.
#[wasm_bindgen]
pub fn validate_document(document_json: &str, registry_json: &str, config_json: &str) -> JsValue {
    let result = Outcome::from(validate_document_inner(
        document_json,
        registry_json,
        config_json,
    ));
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_document_inner(
    document_json: &str,
    registry_json: &str,
    config_json: &str,
) -> Result<DocumentValidationResult, CheckerError> {
    let registry = RuleRegistry::from_json(registry_json)?;
    let config = EngineConfig::from_json(config_json)?;
    let document: Document =
        serde_json::from_str(document_json).map_err(CheckerError::Content)?;
    Ok(validate::validate_document(
        &registry,
        &Dispatcher::new(),
        &config,
        &document.entities,
        &document.context,
    ))
}

/// Save gate for a document. Undecodable input never locks the editor; the
/// decode failure is logged and saving stays allowed.
#[wasm_bindgen]
pub fn should_block_save(document_json: &str, registry_json: &str, config_json: &str) -> bool {
    match validate_document_inner(document_json, registry_json, config_json) {
        Ok(result) => gate::should_block_save(&result),
        Err(e) => {
            warn!(code = e.code(), error = %e, "could not check document, not blocking save");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct ErrorDto {
    code: String,
    message: String,
}

impl From<CheckerError> for ErrorDto {
    fn from(e: CheckerError) -> Self {
        ErrorDto {
            code: e.code().to_string(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status")]
enum Outcome<T> {
    #[serde(rename = "ok")]
    Ok { result: T },
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}

impl<T> From<Result<T, CheckerError>> for Outcome<T> {
    fn from(result: Result<T, CheckerError>) -> Self {
        match result {
            Ok(result) => Outcome::Ok { result },
            Err(e) => Outcome::Errors {
                errors: vec![ErrorDto::from(e)],
            },
        }
    }
}
