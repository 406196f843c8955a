pub mod config;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod model;
pub mod registry;
pub mod validate;
pub mod wasm;
