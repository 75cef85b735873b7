//! Plain-text report rendering.
//!
//! The report is a pure function of the session and the catalog: rendering
//! the same state twice yields byte-identical text.

use crate::catalog::Catalog;
use crate::session::Session;

/// File name hosts use when offering the report for download.
pub const DEFAULT_REPORT_FILE_NAME: &str = "symptom_report.txt";

const TITLE: &str = "Pharmacy First Report";
const NONE: &str = "None";

/// Renders the report for `session`.
///
/// Returns `None` while no condition is selected (or the selected id is not
/// part of `catalog`).
pub fn render(session: &Session, catalog: &Catalog) -> Option<String> {
    let condition = session
        .selected_condition
        .as_deref()
        .and_then(|id| catalog.get(id))?;
    let inputs = &session.user_inputs;

    let gender = inputs
        .gender
        .map(|g| g.to_string())
        .unwrap_or_else(|| "Not specified".to_string());

    let lines = [
        TITLE.to_string(),
        String::new(),
        format!("Condition: {}", condition.name),
        format!("Symptoms: {}", join_inline(session.selected_symptoms.iter())),
        format!("Age: {}", inputs.age.trim()),
        format!("Gender: {gender}"),
        format!("Pregnant: {}", if inputs.pregnant { "Yes" } else { "No" }),
        format!(
            "Red Flags: {}",
            join_inline(inputs.selected_red_flags.iter())
        ),
        String::new(),
        "Over-the-counter (OTC) Treatments:".to_string(),
        join_lines(&condition.otc_options),
        String::new(),
        "When to Seek Medical Attention:".to_string(),
        join_lines(&condition.escalation_criteria),
    ];

    Some(lines.join("\n"))
}

fn join_inline<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        NONE.to_string()
    } else {
        joined
    }
}

fn join_lines(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        items.join("\n")
    }
}
