// Configuration management for ReelPipe
// Handles loading/saving settings, with sensible defaults when config is missing

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file to load; the bundled demo catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: PathBuf,
    pub filter: String, // RUST_LOG wins over this when set
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            logging: LoggingConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        let log_dir = config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("reelpipe")
            .join("logs");

        Self {
            log_dir,
            filter: "info,reelpipe=debug".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load from the user's config directory, writing defaults the first time
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path()?)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            info!("Wrote default config to {}", path.display());
            Ok(config)
        }
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("reelpipe");

        Ok(config_dir.join("config.toml"))
    }
}
