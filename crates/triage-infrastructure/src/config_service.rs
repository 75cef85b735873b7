//! Configuration service implementation.
//!
//! Loads `TriageConfig` from `~/.config/triage/config.toml` and resolves the
//! catalog the wizard should run against.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use triage_core::TriageConfig;
use triage_core::catalog::{Catalog, CatalogRepository, builtin_catalog};
use triage_core::error::Result;

use crate::paths::TriagePaths;
use crate::storage::AtomicTomlFile;
use crate::toml_catalog_repository::TomlCatalogRepository;

/// Reads and writes the user configuration file.
pub struct ConfigService {
    file: AtomicTomlFile<TriageConfig>,
}

impl ConfigService {
    /// Creates a service for the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TriagePaths::config_file()?))
    }

    /// Creates a service for a custom config path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Loads the configuration.
    ///
    /// A missing or empty file yields the defaults; a malformed file is an
    /// error.
    pub fn load(&self) -> Result<TriageConfig> {
        match self.file.load()? {
            Some(config) => Ok(config),
            None => {
                tracing::debug!(path = %self.path().display(), "no config file, using defaults");
                Ok(TriageConfig::default())
            }
        }
    }

    /// Applies `f` to the stored configuration under an exclusive lock.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut TriageConfig) -> Result<()>,
    {
        self.file.update(TriageConfig::default(), f)
    }
}

/// Returns the catalog `config` points at.
///
/// Without a `catalog_path` this is the shared built-in catalog. A configured
/// path that cannot be loaded is an error; it never silently falls back.
pub fn resolve_catalog(config: &TriageConfig) -> Result<Arc<Catalog>> {
    match &config.catalog_path {
        Some(path) => {
            let catalog = TomlCatalogRepository::with_path(path.clone()).load()?;
            tracing::info!(
                path = %path.display(),
                conditions = catalog.len(),
                "using custom catalog"
            );
            Ok(Arc::new(catalog))
        }
        None => Ok(builtin_catalog()),
    }
}
