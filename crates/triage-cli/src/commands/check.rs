use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use indexmap::IndexSet;
use serde::Serialize;

use triage_core::catalog::Catalog;
use triage_core::{
    EntryMode, Gender, Inference, InteractionResult, Outcome, TriageConfig, Wizard, WizardStep,
};
use triage_infrastructure::save_report;

/// Answers for a one-shot check, as collected from flags.
#[derive(Debug, Clone, Default)]
pub struct CheckRequest {
    /// Condition id or name; `None` means infer it from `symptoms`
    pub condition: Option<String>,
    pub symptoms: Vec<String>,
    pub age: String,
    pub gender: Option<Gender>,
    pub pregnant: bool,
    pub red_flags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub condition_id: String,
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference: Option<Inference>,
    pub outcome: Outcome,
    pub message: String,
    pub report: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
}

/// Runs the request through the wizard the same way an interactive user
/// would, stopping at the first refused step.
pub fn evaluate(catalog: Arc<Catalog>, request: &CheckRequest) -> Result<CheckOutput> {
    let mode = if request.condition.is_some() {
        EntryMode::Direct
    } else {
        EntryMode::Infer
    };
    let symptoms = distinct_symptoms(&catalog, &request.symptoms);
    let red_flags: IndexSet<&str> = request.red_flags.iter().map(|f| f.trim()).collect();
    let mut wizard = Wizard::new(catalog, mode);

    accept(wizard.advance())?;
    match &request.condition {
        Some(condition) => accept(wizard.select_condition(condition))?,
        None => {
            for symptom in &symptoms {
                accept(wizard.toggle_symptom(symptom))?;
            }
            accept(wizard.advance())?;
        }
    }
    accept(wizard.advance())?;

    if mode == EntryMode::Direct {
        for symptom in &symptoms {
            accept(wizard.toggle_symptom(symptom))?;
        }
    }
    accept(wizard.advance())?;

    accept(wizard.set_age(&request.age))?;
    accept(wizard.set_gender(request.gender))?;
    accept(wizard.set_pregnant(request.pregnant))?;
    for flag in &red_flags {
        accept(wizard.toggle_red_flag(flag))?;
    }

    let outcome = match wizard.submit() {
        InteractionResult::Completed(outcome) => outcome,
        other => return Err(refused(other)),
    };
    debug_assert_eq!(wizard.step(), WizardStep::Result);

    let condition = wizard
        .selected_condition()
        .ok_or_else(|| anyhow!("no condition after submit"))?;
    let report = wizard
        .export_report()
        .ok_or_else(|| anyhow!("no report after submit"))?;

    Ok(CheckOutput {
        condition_id: condition.id.clone(),
        condition: condition.name.clone(),
        inference: wizard.session().inference.clone(),
        outcome,
        message: outcome.message().to_string(),
        report: report.to_string(),
        saved_to: None,
    })
}

/// Flags name each answer once; toggling is not. Symptoms are folded onto
/// their catalog spelling first.
fn distinct_symptoms(catalog: &Catalog, symptoms: &[String]) -> IndexSet<String> {
    symptoms
        .iter()
        .map(|s| match catalog.canonical_symptom(s) {
            Some(symptom) => symptom.to_string(),
            None => s.trim().to_string(),
        })
        .collect()
}

fn accept(result: InteractionResult) -> Result<()> {
    match result {
        InteractionResult::Blocked(_) => Err(refused(result)),
        _ => Ok(()),
    }
}

fn refused(result: InteractionResult) -> anyhow::Error {
    match result {
        InteractionResult::Blocked(reason) => anyhow!("{}", reason),
        other => anyhow!("unexpected wizard response: {:?}", other),
    }
}

pub fn run(
    catalog: Arc<Catalog>,
    config: &TriageConfig,
    request: CheckRequest,
    save: Option<Option<PathBuf>>,
    json: bool,
) -> Result<()> {
    if request.condition.is_none() && request.symptoms.is_empty() {
        bail!("pass --condition, or one or more --symptom to infer it");
    }

    let mut output = evaluate(catalog, &request)?;

    if let Some(dir) = save {
        let path = save_report(&output.report, config, dir.as_deref())?;
        output.saved_to = Some(path);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(inference) = &output.inference {
        println!("🔎 Inferred condition: {} ({})", output.condition, inference);
    }
    let icon = match output.outcome {
        Outcome::UrgentReferral => "🚨",
        Outcome::PharmacyEligible => "✅",
        Outcome::NotEligible => "ℹ️ ",
    };
    println!("{} {}: {}", icon, output.outcome, output.message);
    println!();
    println!("{}", output.report);
    if let Some(path) = &output.saved_to {
        println!();
        println!("💾 Report saved to {}", path.display());
    }

    Ok(())
}
