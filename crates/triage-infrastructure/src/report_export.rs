//! Writing reports to disk.

use std::path::{Path, PathBuf};

use triage_core::TriageConfig;
use triage_core::error::Result;

use crate::storage::write_atomic;

/// Writes `report` to the location `config` resolves for it and returns the
/// path written. An existing file is replaced.
pub fn save_report(
    report: &str,
    config: &TriageConfig,
    dir_override: Option<&Path>,
) -> Result<PathBuf> {
    let path = config.report_path(dir_override);
    write_atomic(&path, report)?;
    tracing::info!(path = %path.display(), "saved report");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_override_dir_wins() {
        let configured = TempDir::new().unwrap();
        let override_dir = TempDir::new().unwrap();
        let config = TriageConfig {
            report_dir: Some(configured.path().to_path_buf()),
            ..TriageConfig::default()
        };

        let path =
            save_report("Pharmacy First Report", &config, Some(override_dir.path())).unwrap();

        assert_eq!(path, override_dir.path().join("symptom_report.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "Pharmacy First Report");
        assert!(!configured.path().join("symptom_report.txt").exists());
    }

    #[test]
    fn test_custom_file_name() {
        let dir = TempDir::new().unwrap();
        let config = TriageConfig {
            report_dir: Some(dir.path().to_path_buf()),
            report_file_name: "triage.txt".to_string(),
            ..TriageConfig::default()
        };

        let path = save_report("x", &config, None).unwrap();
        assert_eq!(path, dir.path().join("triage.txt"));
    }
}
