//! YAML configuration file support for the bellows configurator.
//!
//! One file carries the catalog source, matcher tolerances, suggestion
//! window and the default display units for a session. Every section is
//! optional and falls back to the built-in defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "plant floor kiosk"
//!
//! catalog:
//!   type: json_file
//!   path: "/srv/bellows/bellows_parts.json"
//!
//! matcher:
//!   diameter_tolerance: 0.20
//!   length_tolerance: 0.30
//!
//! index:
//!   length_window_in: 0.1
//!
//! units:
//!   diameter: "IN"
//!   length: "MM"
//!   pressure: "PSIG"
//!   temperature: "°F"
//! ```

use std::fs;
use std::path::Path;

use catalog::SourceConfig;
use matcher::{MatchConfig, MatchError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use units::{Dimension, Unit};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error(transparent)]
    Matcher(#[from] MatchError),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BellowsConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Primary catalog source; the bundled dataset is always the fallback.
    #[serde(default)]
    pub catalog: SourceConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub index: IndexYamlConfig,

    #[serde(default)]
    pub units: UnitsYamlConfig,
}

impl BellowsConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: BellowsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.matcher.validate()?;
        self.index.validate()?;
        self.units.validate()?;
        Ok(())
    }
}

impl Default for BellowsConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            catalog: SourceConfig::default(),
            matcher: MatchConfig::default(),
            index: IndexYamlConfig::default(),
            units: UnitsYamlConfig::default(),
        }
    }
}

/// Suggestion index YAML configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexYamlConfig {
    /// Absolute window, inches, for "lengths available at this diameter".
    #[serde(default = "default_length_window")]
    pub length_window_in: f64,
}

impl IndexYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.length_window_in.is_finite() || self.length_window_in <= 0.0 {
            return Err(ConfigLoadError::Validation(
                "index.length_window_in must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for IndexYamlConfig {
    fn default() -> Self {
        Self {
            length_window_in: default_length_window(),
        }
    }
}

/// Default display unit per query field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitsYamlConfig {
    #[serde(default = "default_length_unit")]
    pub diameter: String,

    #[serde(default = "default_length_unit")]
    pub length: String,

    #[serde(default = "default_pressure_unit")]
    pub pressure: String,

    #[serde(default = "default_temperature_unit")]
    pub temperature: String,
}

impl UnitsYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let checks = [
            ("diameter", &self.diameter, Dimension::Length),
            ("length", &self.length, Dimension::Length),
            ("pressure", &self.pressure, Dimension::Pressure),
            ("temperature", &self.temperature, Dimension::Temperature),
        ];
        for (field, token, dimension) in checks {
            if Unit::parse(token, dimension) == Unit::Unrecognized {
                return Err(ConfigLoadError::Validation(format!(
                    "units.{field} must be a known {dimension:?} unit, got {token:?}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for UnitsYamlConfig {
    fn default() -> Self {
        Self {
            diameter: default_length_unit(),
            length: default_length_unit(),
            pressure: default_pressure_unit(),
            temperature: default_temperature_unit(),
        }
    }
}

fn default_length_window() -> f64 {
    catalog::index::LENGTH_SUGGESTION_WINDOW_IN
}
fn default_length_unit() -> String {
    Dimension::Length.canonical_token().to_string()
}
fn default_pressure_unit() -> String {
    Dimension::Pressure.canonical_token().to_string()
}
fn default_temperature_unit() -> String {
    Dimension::Temperature.canonical_token().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matcher:
  diameter_tolerance: 0.1
units:
  length: "MM"
"#;

        let config = BellowsConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matcher.diameter_tolerance, 0.1);
        assert_eq!(config.matcher.length_tolerance, 0.30);
        assert_eq!(config.units.length, "MM");
        assert_eq!(config.units.diameter, "IN");
        assert_eq!(config.units.temperature, "°F");
        assert_eq!(config.catalog, SourceConfig::Bundled);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
catalog:
  type: json_file
  path: "/srv/bellows/bellows_parts.json"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = BellowsConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.catalog,
            SourceConfig::json_file("/srv/bellows/bellows_parts.json")
        );
    }

    #[test]
    fn test_default_config() {
        let config = BellowsConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.validate().is_ok());
        assert_eq!(config.index.length_window_in, 0.1);
    }

    #[test]
    fn test_version_validation() {
        let result = BellowsConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(result, Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"));
    }

    #[test]
    fn test_tolerance_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  length_tolerance: -1.0
"#;
        let result = BellowsConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("length_tolerance"));
    }

    #[test]
    fn test_unit_validation() {
        let yaml = r#"
version: "1.0"
units:
  pressure: "KPA"
"#;
        let result = BellowsConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("units.pressure"));
    }

    #[test]
    fn test_index_validation() {
        let yaml = r#"
version: "1.0"
index:
  length_window_in: 0
"#;
        assert!(BellowsConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = BellowsConfig::default();
        config.units.temperature = "°C".to_string();
        config.catalog = SourceConfig::json_file("parts.json");

        let yaml = config.to_yaml().unwrap();
        let parsed = BellowsConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let result = BellowsConfig::from_file("/nonexistent/bellows.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }
}
