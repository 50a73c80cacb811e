//! Local configuration

use std::path::Path;

use anyhow::Context as _;

/// Local configuration
#[derive(Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Magnitude formatting defaults
    pub magnitude: MagnitudeConfig,

    /// Digit grouping defaults
    pub spacify: SpacifyConfig,
}

/// Magnitude formatting defaults
#[derive(Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct MagnitudeConfig {
    /// Unit appended after the prefix
    pub unit: String,
    /// Decimal places, shortest representation if unset
    pub fixed_places: Option<usize>,
}

impl Default for MagnitudeConfig {
    fn default() -> Self {
        Self {
            unit: "Hz".to_owned(),
            fixed_places: None,
        }
    }
}

/// Digit grouping defaults
#[derive(Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct SpacifyConfig {
    /// Inserted between integer digit groups
    pub separator: String,
}

impl Default for SpacifyConfig {
    fn default() -> Self {
        Self {
            separator: ",".to_owned(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML data
    pub fn from_toml(toml_data: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(toml_data)?)
    }

    /// Read and parse configuration file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let toml_data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        Self::from_toml(&toml_data).with_context(|| format!("Failed to parse {:?}", path))
    }
}

/// Parse local configuration
pub fn parse_config() -> anyhow::Result<Config> {
    let binary_name = env!("CARGO_PKG_NAME");
    let xdg_dirs = xdg::BaseDirectories::with_prefix(binary_name);
    let config = if let Some(config_filepath) = xdg_dirs.find_config_file("config.toml") {
        log::debug!("Loading config from {:?}", config_filepath);
        Config::from_file(&config_filepath)?
    } else {
        log::debug!("No config file found, using defaults");
        Config::default()
    };
    log::trace!("{:?}", config);
    Ok(config)
}
