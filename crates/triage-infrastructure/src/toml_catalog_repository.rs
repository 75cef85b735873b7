//! TOML-based CatalogRepository implementation

use std::fs;
use std::path::{Path, PathBuf};

use triage_core::catalog::{Catalog, CatalogRepository};
use triage_core::error::{Result, TriageError};

use crate::paths::TriagePaths;
use crate::storage::write_atomic;

/// Stores a condition catalog as `[[condition]]` tables in a TOML file.
///
/// Loaded catalogs go through the same validation as the built-in one.
pub struct TomlCatalogRepository {
    path: PathBuf,
}

impl TomlCatalogRepository {
    /// Creates a repository at the default location (~/.config/triage/catalog.toml)
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(TriagePaths::catalog_file()?))
    }

    /// Creates a repository backed by `path`
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepository for TomlCatalogRepository {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            return Err(TriageError::not_found(
                "catalog",
                self.path.display().to_string(),
            ));
        }
        let content = fs::read_to_string(&self.path)?;
        let catalog = Catalog::from_toml_str(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            conditions = catalog.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let content = catalog.to_toml_string()?;
        write_atomic(&self.path, &content)?;
        tracing::info!(path = %self.path.display(), "saved catalog");
        Ok(())
    }
}
