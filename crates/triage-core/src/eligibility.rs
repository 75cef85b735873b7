//! Eligibility rules.
//!
//! Rules are evaluated in order and the first match decides:
//!
//! 1. Any red flag ticked: urgent referral.
//! 2. The condition has a pharmacy pathway that admits the recorded gender and
//!    numeric age: pharmacy-eligible.
//! 3. Otherwise: not eligible, refer to a GP.

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::catalog::Condition;
use crate::session::UserInputs;

/// Outcome of the eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[strum(to_string = "urgent referral")]
    UrgentReferral,
    #[strum(to_string = "pharmacy-eligible")]
    PharmacyEligible,
    #[strum(to_string = "not eligible")]
    NotEligible,
}

impl Outcome {
    /// Advice shown to the user for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::UrgentReferral => {
                "You have reported serious symptoms. Please seek immediate medical attention."
            }
            Outcome::PharmacyEligible => {
                "Recommended treatment: Antibiotics may be recommended. Visit a pharmacy for assessment and possible treatment."
            }
            Outcome::NotEligible => {
                "Based on your answers, this condition may not be suitable for Pharmacy First. Please consult your GP."
            }
        }
    }
}

/// Parses free-text age. Blank or non-numeric text yields `None`.
pub fn parse_age(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|age| age.is_finite())
}

/// Applies the eligibility rules to `condition` and `inputs`.
pub fn evaluate(condition: &Condition, inputs: &UserInputs) -> Outcome {
    if !inputs.selected_red_flags.is_empty() {
        return Outcome::UrgentReferral;
    }

    let admitted = condition
        .pharmacy_pathway
        .as_ref()
        .is_some_and(|pathway| pathway.admits(inputs.gender, parse_age(&inputs.age)));

    if admitted {
        Outcome::PharmacyEligible
    } else {
        Outcome::NotEligible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::session::Gender;

    fn inputs(age: &str, gender: Option<Gender>, red_flags: &[&str]) -> UserInputs {
        UserInputs {
            age: age.to_string(),
            gender,
            pregnant: false,
            selected_red_flags: red_flags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn evaluate_for(condition_id: &str, inputs: &UserInputs) -> Outcome {
        let catalog = builtin_catalog();
        let condition = catalog.get(condition_id).unwrap();
        evaluate(condition, inputs)
    }

    #[test]
    fn test_red_flag_beats_pharmacy_pathway() {
        let outcome = evaluate_for(
            "uti",
            &inputs("30", Some(Gender::Female), &["Blood in urine"]),
        );
        assert_eq!(outcome, Outcome::UrgentReferral);
    }

    #[test]
    fn test_red_flag_escalates_any_condition() {
        let outcome = evaluate_for("sinusitis", &inputs("", None, &["Visual changes"]));
        assert_eq!(outcome, Outcome::UrgentReferral);
    }

    #[test]
    fn test_uti_age_boundaries() {
        for age in ["16", "64", "30", " 40 ", "16.0"] {
            assert_eq!(
                evaluate_for("uti", &inputs(age, Some(Gender::Female), &[])),
                Outcome::PharmacyEligible,
                "age {age:?} should be eligible"
            );
        }
        for age in ["15", "65", "64.5", "abc", "", "-20"] {
            assert_eq!(
                evaluate_for("uti", &inputs(age, Some(Gender::Female), &[])),
                Outcome::NotEligible,
                "age {age:?} should not be eligible"
            );
        }
    }

    #[test]
    fn test_uti_requires_female() {
        assert_eq!(
            evaluate_for("uti", &inputs("30", Some(Gender::Male), &[])),
            Outcome::NotEligible
        );
        assert_eq!(
            evaluate_for("uti", &inputs("30", None, &[])),
            Outcome::NotEligible
        );
    }

    #[test]
    fn test_conditions_without_pathway_are_not_eligible() {
        assert_eq!(
            evaluate_for("shingles", &inputs("30", Some(Gender::Female), &[])),
            Outcome::NotEligible
        );
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("42"), Some(42.0));
        assert_eq!(parse_age(" 7.5 "), Some(7.5));
        assert_eq!(parse_age("forty"), None);
        assert_eq!(parse_age("   "), None);
        assert_eq!(parse_age("inf"), None);
        assert_eq!(parse_age("NaN"), None);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::UrgentReferral.to_string(), "urgent referral");
        assert_eq!(Outcome::PharmacyEligible.to_string(), "pharmacy-eligible");
        assert_eq!(Outcome::NotEligible.to_string(), "not eligible");
        assert!(Outcome::NotEligible.message().contains("consult your GP"));
    }
}
