//! Catalog repository trait.

use super::model::Catalog;
use crate::error::Result;

/// An abstract source of condition catalogs.
///
/// Implementations must return validated catalogs; `Catalog::new` and
/// `Catalog::from_toml_str` already validate, so loaders should go through
/// one of them.
pub trait CatalogRepository: Send + Sync {
    /// Loads the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Catalog)`: A validated catalog
    /// - `Err(TriageError)`: The source could not be read or failed validation
    fn load(&self) -> Result<Catalog>;

    /// Persists the catalog, replacing the existing one.
    fn save(&self, catalog: &Catalog) -> Result<()>;
}
