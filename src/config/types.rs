//! Configuration types and defaults for wings.

use serde::{Deserialize, Serialize};

/// What to do when a `{@name}` tag names a link that is not in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingLinkPolicy {
    /// Fail the render with a missing link error (default).
    #[default]
    Error,
    /// Render the tag as an empty string.
    Empty,
}

impl MissingLinkPolicy {
    /// Parse a missing link policy from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "error" => Some(Self::Error),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_max_link_depth() -> u32 {
    32
}
