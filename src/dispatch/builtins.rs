//! Built-in check implementations, keyed by check name.
//!
//! Each check is a pure function of an entity's attributes and returns
//! `true` when the entity passes. Checks only look at their own attribute;
//! e.g. an image with no alt text passes `image_alt_length`, since
//! `image_alt_text` is the check that reports it.

use serde_json::Value;

use crate::model::{Attributes, Entity, FIELD_VALUE_ATTRIBUTE};

pub const IMAGE_ALT_TEXT: &str = "image_alt_text";
pub const IMAGE_ALT_NOT_FILENAME: &str = "image_alt_not_filename";
pub const IMAGE_ALT_LENGTH: &str = "image_alt_length";
pub const IMAGE_ALT_CAPTION_MATCH: &str = "image_alt_caption_match";
pub const BUTTON_TEXT: &str = "button_text";
pub const BUTTON_LINK: &str = "button_link";
pub const BUTTON_GENERIC_TEXT: &str = "button_generic_text";
pub const HEADING_CONTENT: &str = "heading_content";
pub const TABLE_HEADERS: &str = "table_headers";
pub const VIDEO_CAPTIONS: &str = "video_captions";
pub const FIELD_REQUIRED: &str = "field_required";
pub const FIELD_MAX_LENGTH: &str = "field_max_length";

pub const MAX_ALT_LENGTH: usize = 125;

const IMAGE_EXTENSIONS: [&str; 10] = [
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".bmp", ".tif", ".tiff", ".avif",
];

const GENERIC_BUTTON_TEXT: [&str; 9] = [
    "click here",
    "click",
    "here",
    "read more",
    "more",
    "learn more",
    "continue",
    "go",
    "link",
];

pub type BuiltinCheck = fn(&Attributes, &Entity) -> bool;

pub fn lookup(name: &str) -> Option<BuiltinCheck> {
    let check: BuiltinCheck = match name {
        IMAGE_ALT_TEXT => image_alt_text,
        IMAGE_ALT_NOT_FILENAME => image_alt_not_filename,
        IMAGE_ALT_LENGTH => image_alt_length,
        IMAGE_ALT_CAPTION_MATCH => image_alt_caption_match,
        BUTTON_TEXT => button_text,
        BUTTON_LINK => button_link,
        BUTTON_GENERIC_TEXT => button_generic_text,
        HEADING_CONTENT => heading_content,
        TABLE_HEADERS => table_headers,
        VIDEO_CAPTIONS => video_captions,
        FIELD_REQUIRED => field_required,
        FIELD_MAX_LENGTH => field_max_length,
        _ => return None,
    };
    Some(check)
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

fn image_alt_text(attrs: &Attributes, _: &Entity) -> bool {
    if attrs.get("isDecorative").and_then(Value::as_bool) == Some(true) {
        return true;
    }
    !text(attrs, "alt").is_empty()
}

fn image_alt_not_filename(attrs: &Attributes, _: &Entity) -> bool {
    let alt = text(attrs, "alt").to_lowercase();
    !IMAGE_EXTENSIONS.iter().any(|ext| alt.ends_with(ext))
}

fn image_alt_length(attrs: &Attributes, _: &Entity) -> bool {
    text(attrs, "alt").chars().count() <= MAX_ALT_LENGTH
}

fn image_alt_caption_match(attrs: &Attributes, _: &Entity) -> bool {
    let alt = text(attrs, "alt");
    let caption = text(attrs, "caption");
    if alt.is_empty() || caption.is_empty() {
        return true;
    }
    alt.to_lowercase() != caption.to_lowercase()
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

fn button_text(attrs: &Attributes, _: &Entity) -> bool {
    !text(attrs, "text").is_empty()
}

fn button_link(attrs: &Attributes, _: &Entity) -> bool {
    !text(attrs, "url").is_empty()
}

fn button_generic_text(attrs: &Attributes, _: &Entity) -> bool {
    let normalized = text(attrs, "text")
        .to_lowercase()
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .to_string();
    !GENERIC_BUTTON_TEXT.contains(&normalized.as_str())
}

// ---------------------------------------------------------------------------
// Structure and media
// ---------------------------------------------------------------------------

fn heading_content(attrs: &Attributes, _: &Entity) -> bool {
    !text(attrs, "content").is_empty()
}

fn table_headers(attrs: &Attributes, _: &Entity) -> bool {
    attrs
        .get("head")
        .and_then(Value::as_array)
        .is_some_and(|rows| !rows.is_empty())
}

fn video_captions(attrs: &Attributes, _: &Entity) -> bool {
    let Some(tracks) = attrs.get("tracks").and_then(Value::as_array) else {
        return false;
    };
    tracks.iter().any(|track| {
        matches!(
            track.get("kind").and_then(Value::as_str),
            Some("captions") | Some("subtitles")
        )
    })
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

fn field_required(attrs: &Attributes, _: &Entity) -> bool {
    match attrs.get(FIELD_VALUE_ATTRIBUTE) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !strip_tags(s).trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
    }
}

fn field_max_length(attrs: &Attributes, _: &Entity) -> bool {
    let Some(max) = attrs.get("maxLength").and_then(Value::as_u64) else {
        return true;
    };
    let len = text(attrs, FIELD_VALUE_ATTRIBUTE).chars().count();
    len as u64 <= max
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// String attribute with markup removed and whitespace trimmed.
/// Missing or non-string attributes read as empty.
fn text(attrs: &Attributes, key: &str) -> String {
    attrs
        .get(key)
        .and_then(Value::as_str)
        .map(|s| strip_tags(s).replace("&nbsp;", " ").trim().to_string())
        .unwrap_or_default()
}

/// Drops anything between `<` and `>`. Rich-text attributes hold inline
/// HTML such as `<strong>`.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
