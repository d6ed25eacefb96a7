//! Configuration loading for vastu-topo.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TopoError};
use crate::explore::ExplorerConfig;
use crate::localize::LocalizerConfig;

/// Top-level configuration, loadable from a TOML file.
///
/// ```toml
/// [exploration]
/// side = "clockwise"
/// sweep_both_sides = false
/// max_steps = 10000
///
/// [localization]
/// side = "clockwise"
/// max_probes = 32
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TopoConfig {
    /// Explorer settings.
    #[serde(default)]
    pub exploration: ExplorerConfig,

    /// Localizer settings.
    #[serde(default)]
    pub localization: LocalizerConfig,
}

impl TopoConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TopoError::Config(format!("failed to read config file: {}", e)))?;
        let config: TopoConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TopoConfig::parse("").unwrap();
        assert_eq!(config.exploration.side, Side::Clockwise);
        assert!(!config.exploration.sweep_both_sides);
        assert_eq!(config.localization.max_probes, 32);
    }

    #[test]
    fn test_partial_override() {
        let config = TopoConfig::parse(
            r#"
            [exploration]
            side = "counter-clockwise"
            sweep_both_sides = true

            [localization]
            max_probes = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.exploration.side, Side::CounterClockwise);
        assert!(config.exploration.sweep_both_sides);
        assert_eq!(config.exploration.max_steps, 10_000);
        assert_eq!(config.localization.max_probes, 4);
        assert_eq!(config.localization.side, Side::Clockwise);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TopoConfig::parse("= broken").unwrap_err();
        assert!(matches!(err, TopoError::Config(_)));
    }
}
