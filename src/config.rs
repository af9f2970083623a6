//! Configuration - starting numbers, speed and presentation defaults
//!
//! ```yaml
//! numbers: [64, 34, 25, 12, 22, 11, 90]
//! speed_ms: 1000
//! layout: horizontal
//! visualization: columns
//! ```

use crate::error::{Error, Result};
use crate::interpreter::{Layout, VisualizationType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "sortviz.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub numbers: Vec<i64>,
    pub speed_ms: u64,
    pub layout: Layout,
    pub visualization: VisualizationType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numbers: vec![64, 34, 25, 12, 22, 11, 90],
            speed_ms: 1000,
            layout: Layout::Horizontal,
            visualization: VisualizationType::Columns,
        }
    }
}

impl Config {
    /// Load from a YAML file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_yaml::from_str(&content).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Auto-detect a config file
    /// Priority:
    /// 1. ./sortviz.yml
    /// 2. <config dir>/sortviz/config.yml
    /// 3. Built-in defaults
    pub fn auto_load() -> Result<Self> {
        for path in Self::search_paths() {
            if path.exists() {
                log::info!("Loading config from: {}", path.display());
                return Self::from_file(&path);
            }
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sortviz").join("config.yml"));
        }
        paths
    }

    pub fn validate(&self) -> Result<()> {
        if self.speed_ms == 0 {
            return Err(Error::InvalidConfig("speed_ms must be greater than 0".into()));
        }
        Ok(())
    }
}
