//! User-level configuration loaded from `~/.taggit/config.toml`.
//!
//! The file is optional; missing fields fall back to their `Default` values.

mod loader;
pub use loader::{load_user_config, load_user_config_from};
use crate::capability::Capability;
use crate::codec::PlistFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
/// Whether tag attributes are touched at all.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaggingMode {
    /// Enabled on macOS only.
    #[default]
    Auto,
    Enabled,
    Disabled,
}
impl TaggingMode {
    #[must_use]
    pub fn capability(self) -> Capability {
        match self {
            Self::Auto => Capability::detect(),
            Self::Enabled => Capability::Enabled,
            Self::Disabled => Capability::Disabled,
        }
    }
}
/// Tagging settings (`[tagging]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TaggingConfig {
    #[serde(default)]
    pub mode: TaggingMode,
    #[serde(default)]
    pub plist_format: PlistFormat,
}
/// Top-level user configuration, deserialized from `~/.taggit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub tagging: TaggingConfig,
}
/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".taggit").join("config.toml"))
}
#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
