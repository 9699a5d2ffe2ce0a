use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hide: HideOptions,
}

/// Policy fixed when an entry is created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HideOptions {
    /// Replace whatever already occupies the hidden/visible name instead of failing.
    /// Only meaningful where hiding renames the entry.
    #[serde(default)]
    pub overwrite: bool,
}

impl HideOptions {
    pub fn new(overwrite: bool) -> Self {
        Self { overwrite }
    }
}

impl Config {
    /// Load configuration from the default location.
    /// A missing file yields the defaults; nothing is written.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, contents)
            .context(format!("Failed to write config file: {:?}", path))?;

        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?;
        Ok(config_dir.join("veil").join("config.toml"))
    }
}
