use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::report::DEFAULT_REPORT_FILE_NAME;
use crate::session::EntryMode;

/// User configuration stored in `config.toml`.
///
/// Every field has a default, so a missing file or a file that only sets
/// some keys still yields a complete configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    #[serde(default)]
    pub entry_mode: EntryMode,
    #[serde(default = "default_report_file_name")]
    pub report_file_name: String,
    /// Directory reports are saved to; the working directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,
    /// Custom catalog TOML; the built-in catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Keys accepted by [`TriageConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["entry_mode", "report_file_name", "report_dir", "catalog_path"];

fn default_report_file_name() -> String {
    DEFAULT_REPORT_FILE_NAME.to_string()
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            entry_mode: EntryMode::default(),
            report_file_name: default_report_file_name(),
            report_dir: None,
            catalog_path: None,
        }
    }
}

impl TriageConfig {
    /// Where a report should be written.
    ///
    /// `dir_override` wins over `report_dir`, which wins over the working
    /// directory.
    pub fn report_path(&self, dir_override: Option<&Path>) -> PathBuf {
        let dir = dir_override
            .or(self.report_dir.as_deref())
            .unwrap_or_else(|| Path::new("."));
        dir.join(&self.report_file_name)
    }

    /// Sets one key from its textual form.
    ///
    /// An empty value or `none` clears `report_dir` and `catalog_path`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "entry_mode" => {
                self.entry_mode = value.parse().map_err(|_| {
                    TriageError::config(format!(
                        "entry_mode must be 'direct' or 'infer', got '{value}'"
                    ))
                })?;
            }
            "report_file_name" => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(TriageError::config(format!(
                        "report_file_name must be a plain file name, got '{value}'"
                    )));
                }
                self.report_file_name = value.to_string();
            }
            "report_dir" => self.report_dir = optional_path(value),
            "catalog_path" => self.catalog_path = optional_path(value),
            _ => {
                return Err(TriageError::config(format!(
                    "unknown key '{key}'; expected one of: {}",
                    CONFIG_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(value))
    }
}
