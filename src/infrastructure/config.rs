// src/infrastructure/config.rs
use crate::constants::{CONFIG_DIR_NAME, DEFAULT_TIMEOUT_SECS, ENDPOINT_PLACEHOLDER};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// TOML configuration for termsync
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EndpointConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String { ENDPOINT_PLACEHOLDER.to_string() }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load the file if it exists, defaults otherwise
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Create default configuration file at path, creating parent directories
    pub fn create_default(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::default();
        config.create(path)?;
        Ok(config)
    }

    /// Write this configuration to a new file; an existing file is left alone
    pub fn create(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            bail!("Config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        self.save(path)
    }

    /// Same config with the endpoint URL replaced
    pub fn with_endpoint_url(mut self, url: &str) -> Self {
        self.endpoint.url = url.to_string();
        self
    }

    /// Endpoint from the file, `None` when blank
    pub fn endpoint_url(&self) -> Option<&str> {
        let url = self.endpoint.url.trim();
        (!url.is_empty()).then_some(url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.endpoint.timeout_secs)
    }
}

/// `<config_dir>/termsync/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not find config directory")?;
    Ok(base.join(CONFIG_DIR_NAME).join("config.toml"))
}
