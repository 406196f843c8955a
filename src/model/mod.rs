//! Content model consumed and produced by the checker.
//!
//! Entities and document contexts are the serde target for the editor's
//! content JSON. Results are created fresh on every pass and never mutated
//! after being handed back.

pub mod check;
pub mod document;
pub mod entity;
pub mod result;

pub use check::*;
pub use document::*;
pub use entity::*;
pub use result::*;
