//! Configuration for pathweave
//!
//! Read from TOML. Every field has a default, so a missing file or a
//! partial one is fine.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{DistanceConfig, PathweaveConfig, RenderConfig, DEFAULT_RENDER_TIMEOUT_SECS};

impl PathweaveConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PathweaveConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load the user configuration (see [`global::config_path`])
    pub fn discover() -> Result<Self> {
        match global::config_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                tracing::debug!(error = %e, "config directory unavailable, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let max = self.distance.max_distance;
        if max.is_nan() || max <= 0.0 {
            bail_invalid!("distance.max_distance must be positive, got {}", max);
        }
        if self.render.timeout_secs == 0 {
            bail_invalid!("render.timeout_secs must be positive");
        }
        Ok(())
    }
}
