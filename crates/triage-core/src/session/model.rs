//! Session domain model.
//!
//! All fields are transient and live only for one wizard run. The engine is
//! the only writer; hosts read the session through `Wizard::session`.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::step::WizardStep;
use crate::eligibility::Outcome;
use crate::inference::Inference;

/// Gender as collected at intake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

/// Demographic and risk inputs collected at intake.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInputs {
    /// Raw age text as typed; parsed only when rules are evaluated
    pub age: String,
    /// `None` until the user picks one
    pub gender: Option<Gender>,
    /// Only asked when gender is Female, but stored independently of it
    pub pregnant: bool,
    /// Red flags ticked for the selected condition, in selection order
    pub selected_red_flags: IndexSet<String>,
}

/// The mutable state of one wizard run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Current wizard stage
    pub step: WizardStep,
    /// Id of the chosen or inferred condition
    pub selected_condition: Option<String>,
    /// Last inference outcome (infer mode only)
    pub inference: Option<Inference>,
    /// Selected symptoms, in selection order
    pub selected_symptoms: IndexSet<String>,
    pub user_inputs: UserInputs,
    /// Outcome of the eligibility rules, set on submit
    pub result: Option<Outcome>,
    /// Report snapshot taken on submit
    pub summary: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the session has been evaluated.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }
}

/// Adds `value` if absent, removes it if present, keeping the order of the
/// remaining entries. Returns true when the value is present afterwards.
pub(crate) fn toggle_entry(set: &mut IndexSet<String>, value: &str) -> bool {
    if set.shift_remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_toggle_twice_restores_set() {
        let mut set: IndexSet<String> = ["Fever", "Cough"].iter().map(|s| s.to_string()).collect();
        let before = set.clone();

        assert!(toggle_entry(&mut set, "Rash"));
        assert!(!toggle_entry(&mut set, "Rash"));
        assert_eq!(set, before);

        assert!(!toggle_entry(&mut set, "Fever"));
        assert!(toggle_entry(&mut set, "Fever"));
        // Re-adding appends, so only membership is restored.
        assert_eq!(set.len(), before.len());
    }

    #[test]
    fn test_toggle_preserves_selection_order() {
        let mut set = IndexSet::new();
        toggle_entry(&mut set, "b");
        toggle_entry(&mut set, "a");
        toggle_entry(&mut set, "c");
        toggle_entry(&mut set, "a");
        let order: Vec<&str> = set.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["b", "c"]);
    }

    #[test]
    fn test_gender_parses_case_insensitively() {
        assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
        assert_eq!(Gender::from_str("MALE").unwrap(), Gender::Male);
        assert!(Gender::from_str("other").is_err());
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.step, WizardStep::Intro);
        assert!(session.selected_condition.is_none());
        assert!(session.selected_symptoms.is_empty());
        assert!(!session.is_complete());
    }
}
