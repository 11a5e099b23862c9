use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Persisted token configuration. At most one key today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

/// On-disk config backed by a JSON file at an explicit path, so tests
/// can point it at a temp directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default per-user config location.
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| MetricsError::ConfigError("No config directory found".to_string()))?;
        Ok(Self::new(base.join("dmetrics").join("config.json")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Read the config; a missing file is an empty config, not an error.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    /// Delete the config file. Clearing an absent config is a no-op.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
