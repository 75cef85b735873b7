//! Wizard stages and entry strategy.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The visible stages of the wizard, in flow order.
///
/// Evaluation is not a stage of its own: it runs on submit and lands the
/// session on `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Initial splash; nothing is collected yet.
    #[default]
    #[strum(to_string = "intro")]
    Intro,
    /// Pick a condition (direct mode) or free-form symptoms (infer mode).
    #[strum(to_string = "selection")]
    Selection,
    /// Confirm or override the condition inferred from symptoms.
    #[strum(to_string = "inference")]
    Inference,
    /// Check the symptoms specific to the chosen condition.
    #[strum(to_string = "symptom detail")]
    SymptomDetail,
    /// Age, gender, pregnancy and red flags.
    #[strum(to_string = "intake")]
    Intake,
    /// Outcome and summary are available.
    #[strum(to_string = "result")]
    Result,
}

/// How the user reaches a condition at the selection stage.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntryMode {
    /// Condition-first: the user picks a condition from the catalog.
    #[default]
    Direct,
    /// Symptoms-first: the condition is inferred from free-form symptoms.
    Infer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_entry_mode_parses_case_insensitively() {
        assert_eq!(EntryMode::from_str("Infer").unwrap(), EntryMode::Infer);
        assert_eq!(EntryMode::from_str("direct").unwrap(), EntryMode::Direct);
        assert!(EntryMode::from_str("guess").is_err());
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(WizardStep::SymptomDetail.to_string(), "symptom detail");
        assert_eq!(WizardStep::default(), WizardStep::Intro);
    }
}
