//! Colored terminal rendering of wizard state.

use colored::Colorize;

use triage_core::inference::UNDETERMINED;
use triage_core::{EntryMode, InteractionResult, Outcome, Wizard, WizardStep};

/// Items the user can pick by number at the current step.
pub enum Choices<'a> {
    Conditions(Vec<&'a str>),
    Symptoms(Vec<&'a str>),
    RedFlags(Vec<&'a str>),
    Nothing,
}

impl<'a> Choices<'a> {
    pub fn for_step(wizard: &'a Wizard) -> Self {
        match (wizard.step(), wizard.mode()) {
            (WizardStep::Selection, EntryMode::Direct) | (WizardStep::Inference, _) => {
                Choices::Conditions(
                    wizard
                        .catalog()
                        .conditions()
                        .iter()
                        .map(|c| c.id.as_str())
                        .collect(),
                )
            }
            (WizardStep::Selection, EntryMode::Infer) | (WizardStep::SymptomDetail, _) => {
                Choices::Symptoms(wizard.symptom_choices())
            }
            (WizardStep::Intake, _) => {
                Choices::RedFlags(wizard.red_flag_choices().iter().map(String::as_str).collect())
            }
            _ => Choices::Nothing,
        }
    }
}

/// Prints the screen for the current step.
pub fn render_step(wizard: &Wizard) {
    let session = wizard.session();
    println!();
    println!(
        "{}",
        format!("== {} ==", title(wizard.step())).bright_magenta().bold()
    );

    match wizard.step() {
        WizardStep::Intro => {
            println!("Check whether a pharmacist can treat your condition under Pharmacy First.");
            println!("{}", "Type 'next' to begin or 'help' for commands.".bright_black());
        }
        WizardStep::Selection => {
            match wizard.mode() {
                EntryMode::Direct => {
                    println!("Pick your condition by number, then 'next'.");
                    list_conditions(wizard);
                }
                EntryMode::Infer => {
                    println!("Toggle the symptoms you have by number or '+name', then 'next'.");
                    list_symptoms(wizard);
                }
            }
            render_animation(wizard);
        }
        WizardStep::Inference => {
            let name = session
                .inference
                .as_ref()
                .map(|inference| inference.display_name(wizard.catalog()))
                .unwrap_or(UNDETERMINED);
            println!("Your symptoms most closely match: {}", name.bright_yellow().bold());
            if wizard.selected_condition().is_none() {
                println!(
                    "{}",
                    "No condition matched. Pick one by number or go 'back'.".yellow()
                );
            } else {
                println!("{}", "Type 'next' to continue, or pick another condition.".bright_black());
            }
            list_conditions(wizard);
        }
        WizardStep::SymptomDetail => {
            println!("Which of these symptoms do you have?");
            list_symptoms(wizard);
        }
        WizardStep::Intake => render_intake(wizard),
        WizardStep::Result => render_result(wizard),
    }
}

fn title(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Intro => "Pharmacy First",
        WizardStep::Selection => "Select",
        WizardStep::Inference => "Likely condition",
        WizardStep::SymptomDetail => "Symptoms",
        WizardStep::Intake => "About you",
        WizardStep::Result => "Result",
    }
}

fn list_conditions(wizard: &Wizard) {
    let selected = wizard.session().selected_condition.as_deref();
    for (index, condition) in wizard.catalog().conditions().iter().enumerate() {
        let line = format!("  {:>2}. {}", index + 1, condition.name);
        if selected == Some(condition.id.as_str()) {
            println!("{} {}", line.green().bold(), "(selected)".green());
        } else {
            println!("{}", line);
        }
    }
}

fn list_symptoms(wizard: &Wizard) {
    let selected = &wizard.session().selected_symptoms;
    let choices = wizard.symptom_choices();
    for (index, symptom) in choices.iter().enumerate() {
        print_toggle(index + 1, symptom, selected.contains(*symptom));
    }

    let extra: Vec<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|s| !choices.contains(s))
        .collect();
    if !extra.is_empty() {
        println!("{}", format!("  also: {}", extra.join(", ")).bright_black());
    }
}

fn render_animation(wizard: &Wizard) {
    let frame = wizard.frame();
    if frame.is_empty() {
        return;
    }
    let floating: Vec<&str> = frame.highlighted().collect();
    println!("{}", format!("  ~ {} ~", floating.join("  ")).bright_black().italic());
}

fn render_intake(wizard: &Wizard) {
    let inputs = &wizard.session().user_inputs;
    let value = |text: String| {
        if text.is_empty() {
            "not set".bright_black().to_string()
        } else {
            text.bright_white().to_string()
        }
    };

    println!("  Age:      {}", value(inputs.age.trim().to_string()));
    println!(
        "  Gender:   {}",
        value(inputs.gender.map(|g| g.to_string()).unwrap_or_default())
    );
    if wizard.pregnancy_applicable() {
        println!("  Pregnant: {}", if inputs.pregnant { "yes" } else { "no" });
    }

    let flags = wizard.red_flag_choices();
    if !flags.is_empty() {
        println!("Do you have any of these? (pick by number)");
        for (index, flag) in flags.iter().enumerate() {
            print_toggle(index + 1, flag, inputs.selected_red_flags.contains(flag));
        }
    }
    println!(
        "{}",
        "Set 'age', 'gender' (and 'pregnant'), then 'submit'.".bright_black()
    );
}

fn render_result(wizard: &Wizard) {
    let session = wizard.session();
    if let Some(outcome) = session.result {
        let message = outcome.message();
        let styled = match outcome {
            Outcome::UrgentReferral => message.red().bold(),
            Outcome::PharmacyEligible => message.green().bold(),
            Outcome::NotEligible => message.yellow().bold(),
        };
        println!("{}", styled);
    }
    if let Some(report) = wizard.export_report() {
        println!();
        for line in report.lines() {
            println!("  {}", line);
        }
    }
    println!();
    println!("{}", "Type 'save [dir]' to download the report or 'reset' to start over.".bright_black());
}

fn print_toggle(number: usize, label: &str, on: bool) {
    if on {
        println!("  {:>2}. {} {}", number, "[x]".green().bold(), label.green());
    } else {
        println!("  {:>2}. [ ] {}", number, label);
    }
}

/// Prints feedback for an operation. Returns true when the screen should be
/// redrawn.
pub fn report_result(result: &InteractionResult) -> bool {
    match result {
        InteractionResult::NoOp => {
            println!("{}", "Nothing to do.".bright_black());
            false
        }
        InteractionResult::Changed | InteractionResult::StepChanged(_) => true,
        InteractionResult::Blocked(reason) => {
            println!("{}", reason.to_string().yellow());
            false
        }
        InteractionResult::Completed(outcome) => {
            println!("{}", format!("Assessment complete: {}", outcome).bright_green());
            true
        }
    }
}
