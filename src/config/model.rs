//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Options for one render call.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy for `{@name}` tags whose link is absent.
    #[serde(default)]
    pub missing_links: MissingLinkPolicy,

    /// How many links may expand inside one another before rendering fails.
    #[serde(default = "default_max_link_depth")]
    pub max_link_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missing_links: MissingLinkPolicy::default(),
            max_link_depth: default_max_link_depth(),
        }
    }
}
