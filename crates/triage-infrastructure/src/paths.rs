//! Path management for triage configuration files.
//!
//! ```text
//! ~/.config/triage/            # Config directory (platform config dir)
//! ├── config.toml              # TriageConfig
//! └── catalog.toml             # Default target for `catalog export`
//! ```

use std::path::PathBuf;

use triage_core::error::{Result, TriageError};

const APP_DIR: &str = "triage";
const CONFIG_FILE: &str = "config.toml";
const CATALOG_FILE: &str = "catalog.toml";

/// Resolves the locations of triage files for the current platform.
pub struct TriagePaths;

impl TriagePaths {
    /// Returns the triage configuration directory (e.g. `~/.config/triage/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| TriageError::config("Cannot find config directory"))
    }

    /// Returns the path to `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the conventional path for a user catalog.
    pub fn catalog_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CATALOG_FILE))
    }
}
