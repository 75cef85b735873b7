use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use triage_core::{Gender, TriageConfig};
use triage_infrastructure::{ConfigService, resolve_catalog};

mod commands;

use commands::check::CheckRequest;

#[derive(Parser)]
#[command(name = "triage", version)]
#[command(about = "Pharmacy First triage - check whether a pharmacy can treat a condition", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use a custom catalog TOML instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate eligibility in one shot
    Check {
        /// Condition id or name; omit to infer it from --symptom
        #[arg(long)]
        condition: Option<String>,

        /// Symptom you have (repeatable)
        #[arg(long = "symptom", value_name = "SYMPTOM")]
        symptoms: Vec<String>,

        #[arg(long, default_value = "")]
        age: String,

        /// male or female
        #[arg(long)]
        gender: Option<Gender>,

        #[arg(long)]
        pregnant: bool,

        /// Red flag you have (repeatable)
        #[arg(long = "red-flag", value_name = "FLAG")]
        red_flags: Vec<String>,

        /// Save the report, optionally into DIR
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or export the condition catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Inspect or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List conditions with their symptoms and red flags
    List {
        #[arg(long)]
        json: bool,
    },
    /// Write the active catalog to a TOML file
    Export { path: PathBuf },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Change one setting (entry_mode, report_file_name, report_dir, catalog_path)
    Set {
        key: String,
        /// New value; 'none' clears report_dir and catalog_path
        value: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

/// Loads the config file; `--catalog` overrides the configured catalog.
fn load_config(service: &ConfigService, catalog: Option<PathBuf>) -> Result<TriageConfig> {
    let mut config = service
        .load()
        .with_context(|| format!("Failed to load config from {}", service.path().display()))?;
    if let Some(path) = catalog {
        config.catalog_path = Some(path);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = match cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };

    match cli.command {
        Commands::Check {
            condition,
            symptoms,
            age,
            gender,
            pregnant,
            red_flags,
            save,
            json,
        } => {
            let config = load_config(&service, cli.catalog)?;
            let catalog = resolve_catalog(&config).context("Failed to load catalog")?;
            let request = CheckRequest {
                condition,
                symptoms,
                age,
                gender,
                pregnant,
                red_flags,
            };
            commands::check::run(catalog, &config, request, save, json)?;
        }
        Commands::Catalog { action } => {
            let config = load_config(&service, cli.catalog)?;
            let catalog = resolve_catalog(&config).context("Failed to load catalog")?;
            match action {
                CatalogAction::List { json } => commands::catalog::list(&catalog, json)?,
                CatalogAction::Export { path } => commands::catalog::export(&catalog, path)?,
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = load_config(&service, cli.catalog)?;
                commands::config::show(&service, &config)?
            }
            ConfigAction::Path => commands::config::path(&service),
            ConfigAction::Set { key, value } => commands::config::set(&service, &key, &value)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_set_arguments() {
        let cli = Cli::try_parse_from(["triage", "config", "set", "report_dir", "none"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Set { key, value },
            } => {
                assert_eq!(key, "report_dir");
                assert_eq!(value, "none");
            }
            _ => panic!("expected config set"),
        }
    }
}
