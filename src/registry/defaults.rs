//! Engine-provided rules for well-known kinds. Applied only when nothing
//! external is registered for the kind.

use std::collections::HashMap;

use super::check_set::CheckSet;
use crate::dispatch::builtins::*;
use crate::model::CheckConfig;
use crate::validate::heading::{HEADING_ORDER, HEADING_START};

pub const IMAGE_KIND: &str = "core/image";
pub const BUTTON_KIND: &str = "core/button";
pub const HEADING_KIND: &str = "core/heading";
pub const TABLE_KIND: &str = "core/table";
pub const VIDEO_KIND: &str = "core/video";

pub const DOCUMENT_CONTEXTS: [&str; 2] = ["post", "page"];
pub const TITLE_FIELD: &str = "title";

pub fn entity_defaults() -> HashMap<String, CheckSet> {
    let mut defaults = HashMap::new();

    defaults.insert(
        IMAGE_KIND.to_string(),
        CheckSet::new()
            .with(
                IMAGE_ALT_TEXT,
                CheckConfig::error("Images must have alternative text or be marked decorative."),
            )
            .with(
                IMAGE_ALT_NOT_FILENAME,
                CheckConfig::warning("Alternative text should not be a file name."),
            )
            .with(
                IMAGE_ALT_LENGTH,
                CheckConfig::warning("Alternative text should be 125 characters or fewer."),
            )
            .with(
                IMAGE_ALT_CAPTION_MATCH,
                CheckConfig::warning("Alternative text should not repeat the caption."),
            ),
    );

    defaults.insert(
        BUTTON_KIND.to_string(),
        CheckSet::new()
            .with(BUTTON_TEXT, CheckConfig::error("Buttons must have text."))
            .with(BUTTON_LINK, CheckConfig::error("Buttons must link somewhere."))
            .with(
                BUTTON_GENERIC_TEXT,
                CheckConfig::warning("Button text should describe the action, not just \"click here\"."),
            ),
    );

    defaults.insert(
        HEADING_KIND.to_string(),
        CheckSet::new().with(
            HEADING_CONTENT,
            CheckConfig::error("Headings must not be empty."),
        ),
    );

    defaults.insert(
        TABLE_KIND.to_string(),
        CheckSet::new().with(
            TABLE_HEADERS,
            CheckConfig::error("Tables must have a header row."),
        ),
    );

    defaults.insert(
        VIDEO_KIND.to_string(),
        CheckSet::new().with(
            VIDEO_CAPTIONS,
            CheckConfig::warning("Videos should have captions."),
        ),
    );

    defaults
}

pub fn document_defaults() -> HashMap<String, CheckSet> {
    DOCUMENT_CONTEXTS
        .iter()
        .map(|ctx| {
            let set = CheckSet::new()
                .with(
                    HEADING_ORDER,
                    CheckConfig::error("Heading levels should not be skipped."),
                )
                .with(
                    HEADING_START,
                    CheckConfig::warning("The first heading should be level 1 or 2."),
                );
            (ctx.to_string(), set)
        })
        .collect()
}

pub fn field_defaults() -> HashMap<String, CheckSet> {
    let mut defaults = HashMap::new();
    defaults.insert(
        TITLE_FIELD.to_string(),
        CheckSet::new().with(
            FIELD_REQUIRED,
            CheckConfig::error("A title is required."),
        ),
    );
    defaults
}
