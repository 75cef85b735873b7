mod animation;
mod commands;
mod helper;
mod view;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use triage_core::{EntryMode, InteractionResult, TriageConfig, Wizard, WizardStep};
use triage_infrastructure::{ConfigService, resolve_catalog, save_report};

use crate::animation::RandomToggleDriver;
use crate::commands::{Command, HELP};
use crate::helper::CliHelper;
use crate::view::Choices;

/// Interactive Pharmacy First eligibility wizard.
#[derive(Parser, Debug)]
#[command(name = "triage-repl", version)]
struct Args {
    /// Start from symptoms and infer the condition
    #[arg(long)]
    infer: bool,

    /// Use a custom catalog TOML instead of the configured one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

/// Loads the configuration; an unreadable file falls back to defaults so the
/// wizard can still run.
fn load_config(path: Option<PathBuf>) -> TriageConfig {
    let service = match path {
        Some(path) => ConfigService::with_path(path),
        None => match ConfigService::new() {
            Ok(service) => service,
            Err(e) => {
                tracing::warn!(error = %e, "config directory unavailable, using defaults");
                return TriageConfig::default();
            }
        },
    };

    service.load().unwrap_or_else(|e| {
        tracing::warn!(path = %service.path().display(), error = %e, "ignoring unreadable config");
        TriageConfig::default()
    })
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = load_config(args.config);
    if args.infer {
        config.entry_mode = EntryMode::Infer;
    }
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = resolve_catalog(&config).context("Failed to load catalog")?;
    let symptoms: Vec<String> = catalog.all_symptoms().iter().map(|s| s.to_string()).collect();

    let mut wizard = Wizard::new(catalog, config.entry_mode)
        .with_animation(Box::new(RandomToggleDriver::new()));

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(symptoms)));

    println!("{}", "=== Pharmacy First Triage ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands or 'quit' to exit.".bright_black());
    view::render_step(&wizard);

    // ===== Main REPL Loop =====
    loop {
        let prompt = format!("{}> ", wizard.step());
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<Command>() {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{}", message.yellow());
                        continue;
                    }
                };

                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                let redraw = execute(&mut wizard, &config, command);

                if animates(&wizard) {
                    wizard.tick_animation();
                }
                if redraw {
                    view::render_step(&wizard);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Runs one command against the wizard. Returns true when the step view
/// should be redrawn.
fn execute(wizard: &mut Wizard, config: &TriageConfig, command: Command) -> bool {
    let result = match command {
        Command::Next => wizard.advance(),
        Command::Back => wizard.go_back(),
        Command::Reset => wizard.reset(),
        Command::Submit => wizard.submit(),
        Command::Symptom(symptom) => {
            let symptom = catalog_spelling(wizard, symptom);
            wizard.toggle_symptom(&symptom)
        }
        Command::Age(age) => wizard.set_age(&age),
        Command::Gender(gender) => wizard.set_gender(gender),
        Command::Pregnant(pregnant) => wizard.set_pregnant(pregnant),
        Command::Pick(number) => match pick(wizard, number) {
            Some(result) => result,
            None => {
                println!("{}", "No such item here.".yellow());
                return false;
            }
        },
        Command::Save(dir) => {
            save(wizard, config, dir.as_deref().map(Path::new));
            return false;
        }
        Command::Show => return true,
        Command::Help => {
            println!("{}", HELP.bright_black());
            return false;
        }
        Command::Quit => return false,
    };

    view::report_result(&result)
}

/// The symptom shimmer only runs while choosing symptoms freely.
fn animates(wizard: &Wizard) -> bool {
    wizard.mode() == EntryMode::Infer && wizard.step() == WizardStep::Selection
}

/// Typed symptoms match case-insensitively; the session stores the catalog
/// spelling so inference and the report see the same text.
fn catalog_spelling(wizard: &Wizard, typed: String) -> String {
    match wizard.catalog().canonical_symptom(&typed) {
        Some(symptom) => symptom.to_string(),
        None => typed,
    }
}

/// Maps a 1-based pick onto the list shown for the current step.
fn pick(wizard: &mut Wizard, number: usize) -> Option<InteractionResult> {
    let index = number.checked_sub(1)?;
    match Choices::for_step(wizard) {
        Choices::Conditions(ids) => {
            let id = ids.get(index)?.to_string();
            Some(wizard.select_condition(&id))
        }
        Choices::Symptoms(symptoms) => {
            let symptom = symptoms.get(index)?.to_string();
            Some(wizard.toggle_symptom(&symptom))
        }
        Choices::RedFlags(flags) => {
            let flag = flags.get(index)?.to_string();
            Some(wizard.toggle_red_flag(&flag))
        }
        Choices::Nothing => None,
    }
}

fn save(wizard: &Wizard, config: &TriageConfig, dir: Option<&Path>) {
    let Some(report) = wizard.export_report() else {
        println!("{}", "No report yet; submit the assessment first.".yellow());
        return;
    };
    match save_report(report, config, dir) {
        Ok(path) => println!("{}", format!("Report saved to {}", path.display()).green()),
        Err(e) => eprintln!("{}", format!("Failed to save report: {}", e).red()),
    }
}
