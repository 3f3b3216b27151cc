use std::{path::{Path, PathBuf}, time::Duration};

use anyhow::Context;
use serde::Deserialize;

use crate::{location::ProviderConfig, models::Coordinate};

pub const DEFAULT_FALLBACK: Coordinate = Coordinate::new(37.7749, -122.4194);

/// Map framing used by the venue and event tabs
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Center used whenever no location fix is available
    pub fallback: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub provider: ProviderConfig,
    /// Position fetch timeout in seconds, 0 disables it
    pub timeout_secs: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            timeout_secs: 15,
        }
    }
}

impl LocationConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub map: MapConfig,
    pub location: LocationConfig,
    /// Catalog fixture to load instead of the built-in one
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        toml::from_str(source).context("Failed to parse config")
    }

    /// Load a config file. A relative `catalog` path is taken relative to
    /// the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let mut config =
            Self::from_toml_str(&source).with_context(|| format!("Invalid config {:?}", path))?;
        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.map.fallback, DEFAULT_FALLBACK);
        assert_eq!(config.location.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = AppConfig::from_toml_str("[location]\ntimeout_secs = 0\n").unwrap();
        assert_eq!(config.location.timeout(), None);
    }
}
