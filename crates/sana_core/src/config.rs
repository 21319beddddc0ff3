//! Engine configuration.
//!
//! Matching policy knobs live in config.toml under the user config dir.
//! Every field has a default; a missing file means default configuration.

use crate::error::SanaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "sana";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "SANA_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity ratio for a fuzzy keyword hit (valid: 0.0-1.0)
    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,

    /// Maximum conditions covered in one reply (valid: >= 1)
    #[serde(default = "default_reply_cap")]
    pub reply_cap: usize,
}

fn default_fuzzy_cutoff() -> f64 {
    0.75
}

fn default_reply_cap() -> usize {
    2
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: default_fuzzy_cutoff(),
            reply_cap: default_reply_cap(),
        }
    }
}

impl EngineConfig {
    /// Validate value ranges. Surfaced before the engine accepts any input.
    pub fn validate(&self) -> Result<(), SanaError> {
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) {
            return Err(SanaError::InvalidConfig(format!(
                "fuzzy_cutoff must be within 0.0-1.0, got {}",
                self.fuzzy_cutoff
            )));
        }
        if self.reply_cap == 0 {
            return Err(SanaError::InvalidConfig(
                "reply_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, SanaError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the discovered path, or defaults when no file exists
    pub fn load() -> Result<Self, SanaError> {
        match discover_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Config path discovery chain
///
/// Priority:
/// 1. $SANA_CONFIG environment variable (explicit override)
/// 2. XDG config dir: ~/.config/sana/config.toml
pub fn discover_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
