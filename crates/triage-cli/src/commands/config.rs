use anyhow::{Context, Result};

use triage_core::TriageConfig;
use triage_infrastructure::ConfigService;

pub fn show(service: &ConfigService, config: &TriageConfig) -> Result<()> {
    println!("# {}", service.path().display());
    if !service.path().exists() {
        println!("# (file not found, showing defaults)");
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn path(service: &ConfigService) {
    println!("{}", service.path().display());
}

/// Changes one key in the config file, creating it when missing.
pub fn set(service: &ConfigService, key: &str, value: &str) -> Result<()> {
    service
        .update(|config| config.set(key, value))
        .with_context(|| format!("Failed to update {}", service.path().display()))?;
    println!("✅ Set {} in {}", key, service.path().display());
    Ok(())
}
