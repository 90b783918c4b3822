// ABOUTME: Application configuration loaded from ~/.gemini-chat/config.toml with CLI overrides
// The login secret and the model list are intentionally not configurable

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::gemini::DEFAULT_BASE_URL;
use crate::models::ModelId;

const APP_DIR: &str = ".gemini-chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the Gemini REST API, without the `/models` suffix
    pub api_base_url: String,
    /// Model preselected when a session starts
    pub default_model: ModelId,
    /// Directory for log files; defaults to `~/.gemini-chat/logs`
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            default_model: ModelId::default(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Application directory under the user's home, or a relative fallback
    pub fn app_dir() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(APP_DIR))
    }

    pub fn default_path() -> PathBuf {
        Self::app_dir().join("config.toml")
    }

    /// Load from the default location; a missing file yields defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| Self::app_dir().join("logs"))
    }

    /// Apply command line overrides on top of file values
    pub fn with_overrides(mut self, model: Option<ModelId>, base_url: Option<String>) -> Self {
        if let Some(model) = model {
            self.default_model = model;
        }
        if let Some(base_url) = base_url {
            self.api_base_url = base_url;
        }
        self
    }
}
