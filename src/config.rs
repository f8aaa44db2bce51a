use crate::remap::RemapOptions;
use crate::{RemapError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".sourcemap-remap.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub remap: RemapOptions,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LoaderConfig {
    /// Directory that source identities are resolved against
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Read original files from disk for `sourcesContent`
    #[serde(default)]
    pub read_content: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Pretty-print emitted JSON
    #[serde(default)]
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a file in the current directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, returning defaults if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            RemapError::Config(format!(
                "Failed to read config file {:?}: {}",
                config_path, e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            RemapError::Config(format!(
                "Failed to parse TOML config from {:?}: {}",
                config_path, e
            ))
        })?;

        Ok(config)
    }

    /// Load config, falling back to defaults with a warning if it cannot be read
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        match result {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }
}
