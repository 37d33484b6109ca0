//! Configuration for mazepath
//!
//! Read from a TOML file. Lookup order: an explicit path, then
//! `$MAZEPATH_CONFIG_DIR/config.toml`, then `<config dir>/mazepath/config.toml`.
//! A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{MazepathError, Result};

pub use types::{Config, MazeSettings, OutputSettings, MAX_CELLS};

const CONFIG_DIR: &str = "mazepath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MAZEPATH_CONFIG_DIR";

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    MazepathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given (it must exist), else from the default
    /// location if a file is there, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MazepathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.maze.validate()
    }
}

impl MazeSettings {
    /// Check dimensions and weight range
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            bail_invalid!("maze width", self.width);
        }
        if self.height == 0 {
            bail_invalid!("maze height", self.height);
        }
        let cells = u64::from(self.width) * u64::from(self.height);
        if cells > MAX_CELLS {
            bail_invalid!(
                "maze size",
                format!(
                    "{}x{} ({} cells, at most {} allowed)",
                    self.width, self.height, cells, MAX_CELLS
                )
            );
        }
        if self.min_weight == 0 {
            bail_invalid!("minimum weight", self.min_weight);
        }
        if self.min_weight > self.max_weight {
            bail_invalid!(
                "weight range",
                format!("{}..={}", self.min_weight, self.max_weight)
            );
        }
        Ok(())
    }
}
