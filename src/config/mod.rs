//! Connector configuration, stored as YAML.

use crate::errors::{ConnError, ConnResult};
use crate::models::mode::ConnectionMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectorConfig {
    /// Mode used by `open_with_default_mode`; resolved leniently like any
    /// other mode string.
    #[serde(default = "default_mode")]
    pub default_mode: String,
    /// How long the engine waits on a locked database before giving up.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    #[serde(default)]
    pub foreign_keys: bool,
}

fn default_mode() -> String {
    "read".to_string()
}
fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            default_mode: default_mode(),
            busy_timeout_ms: default_busy_timeout_ms(),
            foreign_keys: false,
        }
    }
}

impl ConnectorConfig {
    pub fn from_yaml_str(content: &str) -> ConnResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ConnError::Config(e.to_string()))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> ConnResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save_to(&self, path: &Path) -> ConnResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| ConnError::Config(e.to_string()))?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn mode(&self) -> ConnectionMode {
        ConnectionMode::resolve(&self.default_mode)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
