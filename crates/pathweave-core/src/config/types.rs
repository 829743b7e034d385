//! Configuration type definitions

use crate::analysis::{Strategy, DEFAULT_MAX_DISTANCE};
use crate::render::{ImageFormat, LayoutEngine};
use serde::{Deserialize, Serialize};

/// Default subprocess timeout for the layout engine, in seconds
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 120;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathweaveConfig {
    /// Shortest-path settings
    #[serde(default)]
    pub distance: DistanceConfig,

    /// Layout engine settings
    #[serde(default)]
    pub render: RenderConfig,
}

/// Configuration for distance queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// Ceiling for the bounded depth-first strategy (default 20.0)
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,

    /// Strategy used when none is requested explicitly
    #[serde(default)]
    pub strategy: Strategy,
}

/// Configuration for the external layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Layout engine executable to invoke
    #[serde(default)]
    pub engine: LayoutEngine,

    /// Directory holding the engine binaries (optional; PATH lookup otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_path: Option<String>,

    /// Default output format
    #[serde(default)]
    pub format: ImageFormat,

    /// Seconds before a running engine is killed
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_distance() -> f64 {
    DEFAULT_MAX_DISTANCE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_RENDER_TIMEOUT_SECS
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            strategy: Strategy::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            engine: LayoutEngine::default(),
            bin_path: None,
            format: ImageFormat::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
