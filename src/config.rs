//! Configuration for the joystick control.
//!
//! Handles parsing of YAML configuration, with per-field defaults so hosts
//! can supply only the settings they care about. An unrecognized mode name
//! is rejected at load time rather than surfacing later as an invalid
//! degree of freedom.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dof::DegreeOfFreedom;

/// Configuration error taxonomy for the load path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Joystick control configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JoystickConfig {
    /// Degree of freedom: `all`, `x`, `y`, or `none`.
    #[serde(default)]
    pub mode: DegreeOfFreedom,
    /// Whether the handle snaps back to center on release.
    #[serde(default = "default_true")]
    pub back_to_center: bool,
}

fn default_true() -> bool {
    true
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            mode: DegreeOfFreedom::All,
            back_to_center: true,
        }
    }
}

impl JoystickConfig {
    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = JoystickConfig::from_yaml("mode: x\nback_to_center: false\n").unwrap();
        assert_eq!(config.mode, DegreeOfFreedom::XOnly);
        assert!(!config.back_to_center);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = JoystickConfig::from_yaml("mode: y\n").unwrap();
        assert_eq!(config.mode, DegreeOfFreedom::YOnly);
        assert!(config.back_to_center);

        let config = JoystickConfig::from_yaml("back_to_center: false\n").unwrap();
        assert_eq!(config.mode, DegreeOfFreedom::All);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = JoystickConfig::from_yaml("{}\n").unwrap();
        assert_eq!(config.mode, DegreeOfFreedom::All);
        assert!(config.back_to_center);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = JoystickConfig::from_yaml("mode: diagonal\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
