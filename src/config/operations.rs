//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{Result, WingsError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(WingsError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            WingsError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| WingsError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| WingsError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `max_link_depth` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.max_link_depth == 0 {
            return Err(WingsError::UserError(
                "config validation failed: max_link_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
