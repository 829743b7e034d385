//! Location of the user-level configuration file (~/.config/pathweave/config.toml)

use std::path::PathBuf;

use crate::error::{GraphError, Result};

const CONFIG_DIR: &str = "pathweave";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "PATHWEAVE_CONFIG_DIR";

/// Path of the user configuration file
pub fn config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| GraphError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_path_in(config_dir))
}

pub(crate) fn config_path_in(dir: PathBuf) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Returns true if the config directory is overridden via environment variable
pub fn is_config_dir_overridden() -> bool {
    std::env::var(CONFIG_DIR_ENV_VAR).is_ok()
}

/// Returns the source description for display purposes
pub fn source_display() -> String {
    if is_config_dir_overridden() {
        "custom config directory".to_string()
    } else {
        "~/.config/pathweave/config.toml".to_string()
    }
}
