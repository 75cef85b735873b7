use std::path::PathBuf;

use anyhow::{Context, Result};

use triage_core::catalog::{Catalog, CatalogRepository, Condition};
use triage_infrastructure::TomlCatalogRepository;

pub fn list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.conditions())?);
        return Ok(());
    }

    for (index, condition) in catalog.conditions().iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_condition(condition);
    }
    Ok(())
}

fn print_condition(condition: &Condition) {
    println!("{} ({})", condition.name, condition.id);
    println!("  symptoms:  {}", condition.symptoms.join(", "));
    if !condition.red_flags.is_empty() {
        println!("  red flags: {}", condition.red_flags.join(", "));
    }
    if let Some(pathway) = &condition.pharmacy_pathway {
        let who = pathway
            .gender
            .map(|g| format!("{} ", g))
            .unwrap_or_default();
        println!(
            "  pharmacy:  {}aged {}-{}",
            who, pathway.min_age, pathway.max_age
        );
    }
}

/// Writes `catalog` as TOML so it can be edited and configured as
/// `catalog_path`.
pub fn export(catalog: &Catalog, path: PathBuf) -> Result<()> {
    let repo = TomlCatalogRepository::with_path(path);
    repo.save(catalog)
        .with_context(|| format!("Failed to export catalog to {}", repo.path().display()))?;
    println!(
        "✅ Exported {} conditions to {}",
        catalog.len(),
        repo.path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use triage_core::catalog::builtin_catalog;

    #[test]
    fn test_export_writes_loadable_catalog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");

        export(&builtin_catalog(), path.clone()).unwrap();

        let loaded = TomlCatalogRepository::with_path(path).load().unwrap();
        assert_eq!(loaded.len(), 7);
        assert_eq!(loaded.conditions()[0].id, "uti");
    }

    #[test]
    fn test_condition_json_shape() {
        let catalog = builtin_catalog();
        let value = serde_json::to_value(catalog.conditions()).unwrap();
        assert_eq!(value[0]["id"], "uti");
        assert_eq!(value[0]["pharmacy_pathway"]["min_age"], 16);
        assert!(value[1].get("pharmacy_pathway").is_none());
    }
}
