//! Scheme selection from configuration documents.
//!
//! Experiment setups usually keep the projection scheme next to the rest of
//! their settings. [`TomographyConfig`] is the fragment this crate owns; it
//! can be embedded in a larger serde structure or parsed on its own from
//! JSON or YAML text. The caller is responsible for reading the text.
//!
//! ```yaml
//! scheme: three-basis
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AngleError, AngleResult};
use crate::scheme::Scheme;
use crate::table::AngleTable;

/// Projection settings for a tomography run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomographyConfig {
    /// Which angle table to use. Defaults to the six-projection scheme.
    pub scheme: Scheme,
}

impl TomographyConfig {
    /// Create a config for a scheme.
    pub fn new(scheme: Scheme) -> Self {
        Self { scheme }
    }

    /// Parse a JSON document.
    pub fn from_json_str(text: &str) -> AngleResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| AngleError::Config(e.to_string()))?;
        debug!("Loaded tomography config from JSON: scheme={}", config.scheme);
        Ok(config)
    }

    /// Parse a YAML document. An empty document yields the default config.
    pub fn from_yaml_str(text: &str) -> AngleResult<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml_ng::from_str(text).map_err(|e| AngleError::Config(e.to_string()))?;
        debug!("Loaded tomography config from YAML: scheme={}", config.scheme);
        Ok(config)
    }

    /// The angle table selected by this config.
    pub fn table(&self) -> AngleTable {
        AngleTable::for_scheme(self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = TomographyConfig::default();
        assert_eq!(config.scheme, Scheme::SixProjection);
        assert_eq!(config.table().len(), 6);
    }

    #[test]
    fn test_config_from_yaml() {
        let config = TomographyConfig::from_yaml_str("scheme: three-basis\n").unwrap();
        assert_eq!(config.scheme, Scheme::ThreeBasis);
        assert_eq!(config.table().len(), 3);
    }

    #[test]
    fn test_config_from_empty_yaml() {
        let config = TomographyConfig::from_yaml_str("").unwrap();
        assert_eq!(config, TomographyConfig::default());
    }

    #[test]
    fn test_config_from_json() {
        let config = TomographyConfig::from_json_str(r#"{"scheme": "six_projection"}"#).unwrap();
        assert_eq!(config.scheme, Scheme::SixProjection);

        let config = TomographyConfig::from_json_str("{}").unwrap();
        assert_eq!(config.scheme, Scheme::SixProjection);
    }

    #[test]
    fn test_config_unknown_scheme() {
        let err = TomographyConfig::from_yaml_str("scheme: four-basis\n").unwrap_err();
        match err {
            AngleError::Config(msg) => {
                assert!(msg.contains("Unknown projection scheme 'four-basis'"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_malformed() {
        let err = TomographyConfig::from_json_str("{\"scheme\": ").unwrap_err();
        assert!(matches!(err, AngleError::Config(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = TomographyConfig::new(Scheme::ThreeBasis);
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert_eq!(yaml.trim(), "scheme: three-basis");

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"scheme":"three-basis"}"#);
    }
}
