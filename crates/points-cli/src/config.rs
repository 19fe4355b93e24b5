//! Config file for the points CLI.
//!
//! ```toml
//! [storage]
//! path = "/home/me/.local/share/points/game_memory.json"
//! key = "gameState"
//!
//! [display]
//! color = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use points_core::config::storage::{DEFAULT_FILE_NAME, DEFAULT_KEY};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cli::Args;

const APP_DIR: &str = "points";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Saved game file; `None` uses the platform data directory
    pub path: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Load the config named on the command line (or the default one) and
    /// apply command-line overrides. A missing or broken file yields defaults.
    pub fn resolve(args: &Args) -> Self {
        let mut config = match args.config.clone().or_else(Self::default_path) {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(c) => {
                    info!("Loaded config from {:?}", path);
                    c
                }
                Err(e) => {
                    warn!("Failed to load config: {:#}, using defaults", e);
                    Self::default()
                }
            },
            Some(path) if args.config.is_some() => {
                warn!("Config file {:?} not found, using defaults", path);
                Self::default()
            }
            _ => Self::default(),
        };

        if let Some(path) = &args.state_file {
            config.storage.path = Some(path.clone());
        }
        if let Some(key) = &args.key {
            config.storage.key = key.clone();
        }
        if args.no_color {
            config.display.color = false;
        }
        config
    }

    /// Saved game file, falling back to the platform data directory
    pub fn state_file(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join(DEFAULT_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
    }
}
