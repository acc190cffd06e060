//! Render configuration for wings.
//!
//! This module defines the Config struct that controls the policies the
//! renderer applies where a template reaches outside its own text: missing
//! links and runaway link recursion. It supports forward-compatible YAML
//! parsing (unknown fields are ignored), defaults for every field, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::MissingLinkPolicy;
