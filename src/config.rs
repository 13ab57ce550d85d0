use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::engine::EngineKind;

const APP_NAME: &str = "bowix";
const CONFIG_FILE: &str = "config.json";

/// Persistent defaults stored in the user's config directory.
///
/// Every field has a serde default, so a partial or empty config file is
/// fine, and a missing file means "all defaults". Command-line flags win
/// over anything loaded from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Search strategy to build when none is requested
    #[serde(default)]
    pub engine: EngineKind,

    /// Query results retained by the LRU cache. 0 disables caching.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Corpus files larger than this many bytes are skipped
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

fn default_max_file_size() -> u64 {
    16 * 1024 * 1024 // 16MB
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            cache_capacity: default_cache_capacity(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or return defaults if no
    /// file exists.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let config: AppConfig =
                serde_json::from_str(&content).context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the user config directory
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join(CONFIG_FILE))
}
