//! TOML configuration for the KP engine.
//!
//! Every section is optional. Missing values take the engine defaults:
//!
//! ```toml
//! default_location = "colombo"
//!
//! [ayanamsa]
//! mode = "new"
//!
//! [dasha]
//! mahadasha_count = 9
//! lookup_cycles = 2
//!
//! [horary]
//! max_iterations = 50
//! precision_seconds = 1
//! early_exit_deg = 0.0001
//! accept_deg = 0.5
//!
//! [locations.my_home]
//! name = "My Home"
//! latitude = 6.9
//! longitude = 79.9
//! utc_offset = 5.5
//! ```

pub mod error;

use std::collections::BTreeMap;
use std::path::Path;

use kp_search::{
    EngineConfig, GeoLocation, LayeredGazetteer, SriLankaGazetteer, resolve_location,
};
use kp_vedic_base::{AyanamshaSettings, DashaConfig, TimeFinderConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// Location used when a command names none.
pub const DEFAULT_LOCATION: &str = "colombo";

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KpConfig {
    pub default_location: String,
    pub ayanamsa: AyanamshaSettings,
    pub dasha: DashaConfig,
    pub horary: TimeFinderConfig,
    /// User locations keyed by name; they shadow built-ins with the same key.
    pub locations: BTreeMap<String, GeoLocation>,
}

impl Default for KpConfig {
    fn default() -> Self {
        Self {
            default_location: default_location(),
            ayanamsa: AyanamshaSettings::default(),
            dasha: DashaConfig::default(),
            horary: TimeFinderConfig::default(),
            locations: BTreeMap::new(),
        }
    }
}

impl KpConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), locations = config.locations.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        for (key, loc) in &self.locations {
            loc.validate()
                .map_err(|e| ConfigError::Invalid(format!("locations.{key}: {e}")))?;
        }
        resolve_location(&self.gazetteer(), &self.default_location)
            .map_err(|e| ConfigError::Invalid(format!("default_location: {e}")))?;
        Ok(())
    }

    /// Engine settings for the `kp_search` entry points.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            ayanamsa: self.ayanamsa,
            dasha: self.dasha,
            horary: self.horary,
        }
    }

    /// Built-in gazetteer with the configured locations layered on top.
    pub fn gazetteer(&self) -> LayeredGazetteer<SriLankaGazetteer> {
        LayeredGazetteer::new(SriLankaGazetteer).with_locations(
            self.locations
                .iter()
                .map(|(key, loc)| (key.as_str(), loc.clone())),
        )
    }

    /// Resolve `key`, or the configured default when `None`.
    pub fn location(&self, key: Option<&str>) -> Result<GeoLocation, kp_search::SearchError> {
        resolve_location(&self.gazetteer(), key.unwrap_or(&self.default_location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kp_vedic_base::AyanamshaMode;

    #[test]
    fn empty_file_gives_defaults() {
        let c = KpConfig::from_toml_str("").unwrap();
        assert_eq!(c, KpConfig::default());
        assert_eq!(c.default_location, "colombo");
        assert_eq!(c.ayanamsa.mode, AyanamshaMode::New);
        assert_eq!(c.dasha.mahadasha_count, 9);
        assert_eq!(c.horary.max_iterations, 50);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let c = KpConfig::from_toml_str("[horary]\naccept_deg = 1.0\n").unwrap();
        assert_eq!(c.horary.accept_deg, 1.0);
        assert_eq!(c.horary.precision_seconds, 1);
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(matches!(
            KpConfig::from_toml_str("colour = \"blue\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn location_defaults_to_configured_key() {
        let c = KpConfig::from_toml_str("default_location = \"Nuwara Eliya\"\n").unwrap();
        assert_eq!(c.location(None).unwrap().name, "Nuwara Eliya");
        assert_eq!(c.location(Some("galle")).unwrap().name, "Galle");
    }
}
