//! CLI configuration.
//!
//! Resolution order for the config file:
//! 1. `--config <path>` (or the `PARAMSEARCH_CONFIG` environment variable)
//! 2. `<platform config dir>/paramsearch/config.toml`
//!
//! A missing default file is not an error; built-in defaults apply. A
//! missing file that was named explicitly is.

use std::path::{Path, PathBuf};

use paramsearch_query::MapperConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project directory name under the platform config dir.
pub const PROJECT_NAME: &str = "paramsearch";

/// Settings the CLI reads from its config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Schema used when `--schema` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<String>,

    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Query builder settings.
    #[serde(default)]
    pub mapper: MapperConfig,
}

fn default_pretty() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            schema_path: None,
            pretty: default_pretty(),
            mapper: MapperConfig::default(),
        }
    }
}

impl CliConfig {
    /// Default config path for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config file path, preferring an explicit one.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads configuration following the resolution order above.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses one config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Saves the configuration as TOML, creating parent directories.
    ///
    /// An existing file is only replaced when `overwrite` is set.
    pub fn write_to(&self, path: &Path, overwrite: bool) -> Result<()> {
        if !overwrite && path.exists() {
            return Err(Error::config(format!(
                "{} exists; rerun with --force to replace it",
                path.display()
            )));
        }
        let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        if let Some(dir) = parent {
            std::fs::create_dir_all(dir).map_err(|e| Error::io_with_path(e, dir))?;
        }
        let rendered = self.to_toml_string()?;
        std::fs::write(path, rendered).map_err(|e| Error::io_with_path(e, path))?;
        log::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
