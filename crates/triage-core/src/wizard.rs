//! The wizard engine.
//!
//! `Wizard` owns the single live [`Session`] and is the only place that
//! mutates it. Every operation is synchronous and returns an
//! [`InteractionResult`] describing what happened; requests that do not make
//! sense at the current step are reported as `Blocked` instead of failing.
//!
//! Flow (direct mode):
//!
//! ```text
//! Intro -> Selection -> SymptomDetail -> Intake --submit--> Result
//! ```
//!
//! Flow (infer mode):
//!
//! ```text
//! Intro -> Selection -> Inference -> SymptomDetail -> Intake --submit--> Result
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::animation::{AnimationDriver, AnimationFrame, StillDriver};
use crate::catalog::{Catalog, Condition};
use crate::eligibility::{self, Outcome};
use crate::inference::infer_condition;
use crate::report;
use crate::session::{EntryMode, Gender, Session, WizardStep, toggle_entry};

/// Why an operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockReason {
    #[error("select a condition first")]
    NoConditionSelected,
    #[error("no condition matches the selected symptoms; go back or pick a condition")]
    UndeterminedCondition,
    #[error("enter an age before submitting")]
    MissingAge,
    #[error("select a gender before submitting")]
    MissingGender,
    #[error("unknown condition '{0}'")]
    UnknownCondition(String),
    #[error("'{0}' is not a red flag for the selected condition")]
    RedFlagNotApplicable(String),
    #[error("the assessment is complete; start over to make changes")]
    SessionFinalized,
    #[error("not available at the {0} step")]
    NotAvailableInStep(WizardStep),
}

/// Result of a wizard operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionResult {
    /// Nothing changed.
    NoOp,
    /// Session data changed; the step did not.
    Changed,
    /// The wizard moved to the given step.
    StepChanged(WizardStep),
    /// The request was refused.
    Blocked(BlockReason),
    /// Submission evaluated the session; it is now at `Result`.
    Completed(Outcome),
}

impl InteractionResult {
    pub fn is_blocked(&self) -> bool {
        matches!(self, InteractionResult::Blocked(_))
    }
}

/// The wizard engine.
pub struct Wizard {
    catalog: Arc<Catalog>,
    mode: EntryMode,
    session: Session,
    animation: Box<dyn AnimationDriver>,
    frame: AnimationFrame,
}

impl Wizard {
    /// Creates a wizard with a fresh session and no animation.
    pub fn new(catalog: Arc<Catalog>, mode: EntryMode) -> Self {
        Self {
            catalog,
            mode,
            session: Session::new(),
            animation: Box::new(StillDriver),
            frame: AnimationFrame::default(),
        }
    }

    /// Replaces the cosmetic animation driver.
    pub fn with_animation(mut self, driver: Box<dyn AnimationDriver>) -> Self {
        self.animation = driver;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&self) -> WizardStep {
        self.session.step
    }

    pub fn selected_condition(&self) -> Option<&Condition> {
        self.session
            .selected_condition
            .as_deref()
            .and_then(|id| self.catalog.get(id))
    }

    /// Symptoms a host should offer at the current step.
    ///
    /// Free-form selection offers every catalog symptom; symptom detail offers
    /// those of the selected condition.
    pub fn symptom_choices(&self) -> Vec<&str> {
        match self.session.step {
            WizardStep::Selection if self.mode == EntryMode::Infer => self.catalog.all_symptoms(),
            WizardStep::SymptomDetail => self
                .selected_condition()
                .map(|c| c.symptoms.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Red flags of the selected condition.
    pub fn red_flag_choices(&self) -> &[String] {
        self.selected_condition()
            .map(|c| c.red_flags.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the pregnancy question should be shown.
    pub fn pregnancy_applicable(&self) -> bool {
        self.session.user_inputs.gender == Some(Gender::Female)
    }

    /// The report snapshot taken on submit, if any.
    pub fn export_report(&self) -> Option<&str> {
        self.session.summary.as_deref()
    }

    pub fn frame(&self) -> &AnimationFrame {
        &self.frame
    }

    /// Advances the cosmetic animation by one toggle.
    pub fn tick_animation(&mut self) -> &AnimationFrame {
        let pool = self.catalog.all_symptoms();
        if let Some(symptom) = self.animation.next_toggle(&pool) {
            self.frame.toggle(&symptom);
        }
        &self.frame
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Chooses a condition by id or display name.
    ///
    /// Available at `Selection` in direct mode and at `Inference` in infer
    /// mode (overriding the inferred condition).
    pub fn select_condition(&mut self, query: &str) -> InteractionResult {
        let step = self.session.step;
        let allowed = match self.mode {
            EntryMode::Direct => step == WizardStep::Selection,
            EntryMode::Infer => step == WizardStep::Inference,
        };
        if !allowed {
            return self.block_for_step();
        }

        let Some(id) = self.catalog.find(query).map(|c| c.id.clone()) else {
            return blocked(BlockReason::UnknownCondition(query.trim().to_string()));
        };

        if self.session.selected_condition.as_deref() == Some(id.as_str()) {
            return InteractionResult::NoOp;
        }

        self.apply_condition(Some(id));
        InteractionResult::Changed
    }

    /// Adds the symptom if absent, removes it if present.
    ///
    /// Any non-blank text is accepted; symptoms that appear in no catalog
    /// entry simply never match.
    pub fn toggle_symptom(&mut self, symptom: &str) -> InteractionResult {
        if let Some(reason) = self.edit_block() {
            return blocked(reason);
        }
        let symptom = symptom.trim();
        if symptom.is_empty() {
            return InteractionResult::NoOp;
        }

        let selected = toggle_entry(&mut self.session.selected_symptoms, symptom);
        debug!(symptom, selected, "toggled symptom");
        InteractionResult::Changed
    }

    /// Adds or removes a red flag of the selected condition.
    pub fn toggle_red_flag(&mut self, flag: &str) -> InteractionResult {
        if let Some(reason) = self.edit_block() {
            return blocked(reason);
        }
        let flag = flag.trim();
        let Some(condition) = self
            .session
            .selected_condition
            .as_deref()
            .and_then(|id| self.catalog.get(id))
        else {
            return blocked(BlockReason::NoConditionSelected);
        };
        if !condition.has_red_flag(flag) {
            return blocked(BlockReason::RedFlagNotApplicable(flag.to_string()));
        }

        let selected = toggle_entry(&mut self.session.user_inputs.selected_red_flags, flag);
        debug!(flag, selected, "toggled red flag");
        InteractionResult::Changed
    }

    /// Stores the raw age text; it is only parsed when rules run.
    pub fn set_age(&mut self, text: &str) -> InteractionResult {
        if let Some(reason) = self.edit_block() {
            return blocked(reason);
        }
        if self.session.user_inputs.age == text {
            return InteractionResult::NoOp;
        }
        self.session.user_inputs.age = text.to_string();
        InteractionResult::Changed
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) -> InteractionResult {
        if let Some(reason) = self.edit_block() {
            return blocked(reason);
        }
        if self.session.user_inputs.gender == gender {
            return InteractionResult::NoOp;
        }
        self.session.user_inputs.gender = gender;
        InteractionResult::Changed
    }

    pub fn set_pregnant(&mut self, pregnant: bool) -> InteractionResult {
        if let Some(reason) = self.edit_block() {
            return blocked(reason);
        }
        if self.session.user_inputs.pregnant == pregnant {
            return InteractionResult::NoOp;
        }
        self.session.user_inputs.pregnant = pregnant;
        InteractionResult::Changed
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Moves forward one step. At `Intake` this submits.
    pub fn advance(&mut self) -> InteractionResult {
        match self.session.step {
            WizardStep::Intro => self.transition(WizardStep::Selection),
            WizardStep::Selection => match self.mode {
                EntryMode::Direct => {
                    if self.session.selected_condition.is_none() {
                        return blocked(BlockReason::NoConditionSelected);
                    }
                    self.transition(WizardStep::SymptomDetail)
                }
                EntryMode::Infer => {
                    let inference = infer_condition(&self.catalog, &self.session.selected_symptoms);
                    let condition_id = inference.condition_id().map(str::to_string);
                    self.session.inference = Some(inference);
                    self.apply_condition(condition_id);
                    self.transition(WizardStep::Inference)
                }
            },
            WizardStep::Inference => {
                if self.session.selected_condition.is_none() {
                    return blocked(BlockReason::UndeterminedCondition);
                }
                self.transition(WizardStep::SymptomDetail)
            }
            WizardStep::SymptomDetail => self.transition(WizardStep::Intake),
            WizardStep::Intake => self.submit(),
            WizardStep::Result => InteractionResult::NoOp,
        }
    }

    /// Moves back one step. Collected data is kept.
    pub fn go_back(&mut self) -> InteractionResult {
        let target = match self.session.step {
            WizardStep::Intro | WizardStep::Result => return InteractionResult::NoOp,
            WizardStep::Selection => WizardStep::Intro,
            WizardStep::Inference => WizardStep::Selection,
            WizardStep::SymptomDetail => match self.mode {
                EntryMode::Direct => WizardStep::Selection,
                EntryMode::Infer => WizardStep::Inference,
            },
            WizardStep::Intake => WizardStep::SymptomDetail,
        };
        self.transition(target)
    }

    /// Evaluates the session and snapshots the report.
    ///
    /// Requires a selected condition, a non-blank age and a gender.
    pub fn submit(&mut self) -> InteractionResult {
        if self.session.step != WizardStep::Intake {
            return self.block_for_step();
        }
        let Some(condition) = self
            .session
            .selected_condition
            .as_deref()
            .and_then(|id| self.catalog.get(id))
        else {
            return blocked(BlockReason::NoConditionSelected);
        };
        let inputs = &self.session.user_inputs;
        if inputs.age.trim().is_empty() {
            return blocked(BlockReason::MissingAge);
        }
        if inputs.gender.is_none() {
            return blocked(BlockReason::MissingGender);
        }

        let outcome = eligibility::evaluate(condition, inputs);
        let Some(summary) = report::render(&self.session, &self.catalog) else {
            return blocked(BlockReason::NoConditionSelected);
        };

        info!(
            condition = %condition.id,
            outcome = %outcome,
            red_flags = inputs.selected_red_flags.len(),
            "evaluated eligibility"
        );

        self.session.result = Some(outcome);
        self.session.summary = Some(summary);
        self.transition(WizardStep::Result);
        InteractionResult::Completed(outcome)
    }

    /// Discards the session and starts over at `Intro`.
    pub fn reset(&mut self) -> InteractionResult {
        self.session = Session::new();
        self.frame.clear();
        debug!("wizard reset");
        InteractionResult::StepChanged(WizardStep::Intro)
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn transition(&mut self, to: WizardStep) -> InteractionResult {
        debug!(from = %self.session.step, to = %to, "wizard step changed");
        self.session.step = to;
        InteractionResult::StepChanged(to)
    }

    /// Sets the selected condition, dropping red flags that do not belong to it.
    fn apply_condition(&mut self, id: Option<String>) {
        let red_flags = &mut self.session.user_inputs.selected_red_flags;
        match id.as_deref().and_then(|id| self.catalog.get(id)) {
            Some(condition) => red_flags.retain(|flag| condition.has_red_flag(flag)),
            None => red_flags.clear(),
        }
        debug!(condition = ?id, "selected condition");
        self.session.selected_condition = id;
    }

    fn edit_block(&self) -> Option<BlockReason> {
        match self.session.step {
            WizardStep::Intro => Some(BlockReason::NotAvailableInStep(WizardStep::Intro)),
            WizardStep::Result => Some(BlockReason::SessionFinalized),
            _ => None,
        }
    }

    fn block_for_step(&self) -> InteractionResult {
        let reason = match self.session.step {
            WizardStep::Result => BlockReason::SessionFinalized,
            step => BlockReason::NotAvailableInStep(step),
        };
        blocked(reason)
    }
}

fn blocked(reason: BlockReason) -> InteractionResult {
    debug!(%reason, "wizard operation blocked");
    InteractionResult::Blocked(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;
    use crate::inference::Inference;

    fn direct() -> Wizard {
        Wizard::new(builtin_catalog(), EntryMode::Direct)
    }

    fn infer() -> Wizard {
        Wizard::new(builtin_catalog(), EntryMode::Infer)
    }

    /// Drives a direct-mode wizard to `Intake` with the given condition.
    fn at_intake(condition: &str) -> Wizard {
        let mut wizard = direct();
        wizard.advance();
        assert_eq!(wizard.select_condition(condition), InteractionResult::Changed);
        assert_eq!(
            wizard.advance(),
            InteractionResult::StepChanged(WizardStep::SymptomDetail)
        );
        assert_eq!(
            wizard.advance(),
            InteractionResult::StepChanged(WizardStep::Intake)
        );
        wizard
    }

    fn submit_uti(age: &str) -> Outcome {
        let mut wizard = at_intake("uti");
        wizard.set_age(age);
        wizard.set_gender(Some(Gender::Female));
        match wizard.submit() {
            InteractionResult::Completed(outcome) => outcome,
            other => panic!("expected completion, got {other:?}"),
        }
    }

    #[test]
    fn test_direct_flow_reaches_result() {
        let mut wizard = at_intake("Urinary Tract Infection");
        wizard.toggle_symptom("Painful urination");
        wizard.set_age("30");
        wizard.set_gender(Some(Gender::Female));

        assert_eq!(
            wizard.advance(),
            InteractionResult::Completed(Outcome::PharmacyEligible)
        );
        assert_eq!(wizard.step(), WizardStep::Result);
        assert_eq!(wizard.session().result, Some(Outcome::PharmacyEligible));
        let report = wizard.export_report().unwrap();
        assert!(report.contains("Condition: Urinary Tract Infection"));
        assert!(report.contains("Symptoms: Painful urination"));
    }

    #[test]
    fn test_advance_from_selection_requires_condition() {
        let mut wizard = direct();
        wizard.advance();
        assert_eq!(
            wizard.advance(),
            InteractionResult::Blocked(BlockReason::NoConditionSelected)
        );
        assert_eq!(wizard.step(), WizardStep::Selection);
    }

    #[test]
    fn test_unknown_condition_is_blocked() {
        let mut wizard = direct();
        wizard.advance();
        assert_eq!(
            wizard.select_condition("gout"),
            InteractionResult::Blocked(BlockReason::UnknownCondition("gout".to_string()))
        );
        assert!(wizard.session().selected_condition.is_none());
    }

    #[test]
    fn test_toggle_symptom_twice_is_identity() {
        let mut wizard = at_intake("shingles");
        wizard.toggle_symptom("Blisters");
        let before = wizard.session().selected_symptoms.clone();

        wizard.toggle_symptom("Painful rash");
        wizard.toggle_symptom("Painful rash");
        assert_eq!(wizard.session().selected_symptoms, before);
        assert!(before.contains("Blisters"));
    }

    #[test]
    fn test_blank_symptom_is_ignored() {
        let mut wizard = at_intake("shingles");
        assert_eq!(wizard.toggle_symptom("   "), InteractionResult::NoOp);
        assert!(wizard.session().selected_symptoms.is_empty());
    }

    #[test]
    fn test_red_flag_short_circuits_uti_rule() {
        let mut wizard = at_intake("uti");
        wizard.set_age("30");
        wizard.set_gender(Some(Gender::Female));
        assert_eq!(
            wizard.toggle_red_flag("Blood in urine"),
            InteractionResult::Changed
        );
        assert_eq!(
            wizard.submit(),
            InteractionResult::Completed(Outcome::UrgentReferral)
        );
    }

    #[test]
    fn test_boundary_ages() {
        assert_eq!(submit_uti("16"), Outcome::PharmacyEligible);
        assert_eq!(submit_uti("64"), Outcome::PharmacyEligible);
        assert_eq!(submit_uti("15"), Outcome::NotEligible);
        assert_eq!(submit_uti("65"), Outcome::NotEligible);
        assert_eq!(submit_uti("abc"), Outcome::NotEligible);
    }

    #[test]
    fn test_red_flag_must_belong_to_condition() {
        let mut wizard = at_intake("uti");
        assert_eq!(
            wizard.toggle_red_flag("Drooling"),
            InteractionResult::Blocked(BlockReason::RedFlagNotApplicable("Drooling".to_string()))
        );
        assert!(wizard.session().user_inputs.selected_red_flags.is_empty());
    }

    #[test]
    fn test_changing_condition_drops_foreign_red_flags() {
        let mut wizard = at_intake("uti");
        wizard.toggle_red_flag("Blood in urine");
        wizard.toggle_symptom("Urgency");

        wizard.go_back();
        wizard.go_back();
        assert_eq!(wizard.step(), WizardStep::Selection);
        wizard.select_condition("sore_throat");

        assert!(wizard.session().user_inputs.selected_red_flags.is_empty());
        assert!(wizard.session().selected_symptoms.contains("Urgency"));
    }

    #[test]
    fn test_submit_requires_age_and_gender() {
        let mut wizard = at_intake("uti");
        assert_eq!(
            wizard.submit(),
            InteractionResult::Blocked(BlockReason::MissingAge)
        );
        wizard.set_age("30");
        assert_eq!(
            wizard.submit(),
            InteractionResult::Blocked(BlockReason::MissingGender)
        );
        assert!(wizard.session().result.is_none());
        assert!(wizard.session().summary.is_none());
        assert!(wizard.export_report().is_none());
    }

    #[test]
    fn test_submit_outside_intake_is_blocked() {
        let mut wizard = direct();
        assert_eq!(
            wizard.submit(),
            InteractionResult::Blocked(BlockReason::NotAvailableInStep(WizardStep::Intro))
        );
    }

    #[test]
    fn test_back_navigation_keeps_data() {
        let mut wizard = at_intake("uti");
        wizard.set_age("40");
        wizard.set_gender(Some(Gender::Female));
        wizard.set_pregnant(true);
        wizard.toggle_red_flag("Severe abdominal pain");

        assert_eq!(
            wizard.go_back(),
            InteractionResult::StepChanged(WizardStep::SymptomDetail)
        );
        assert_eq!(
            wizard.go_back(),
            InteractionResult::StepChanged(WizardStep::Selection)
        );
        assert_eq!(
            wizard.go_back(),
            InteractionResult::StepChanged(WizardStep::Intro)
        );
        assert_eq!(wizard.go_back(), InteractionResult::NoOp);

        let inputs = &wizard.session().user_inputs;
        assert_eq!(inputs.age, "40");
        assert_eq!(inputs.gender, Some(Gender::Female));
        assert!(inputs.pregnant);
        assert_eq!(inputs.selected_red_flags.len(), 1);
        assert_eq!(wizard.session().selected_condition.as_deref(), Some("uti"));
    }

    #[test]
    fn test_result_is_read_only() {
        let mut wizard = at_intake("uti");
        wizard.set_age("30");
        wizard.set_gender(Some(Gender::Male));
        wizard.submit();

        assert_eq!(
            wizard.set_age("31"),
            InteractionResult::Blocked(BlockReason::SessionFinalized)
        );
        assert_eq!(
            wizard.toggle_symptom("Urgency"),
            InteractionResult::Blocked(BlockReason::SessionFinalized)
        );
        assert_eq!(wizard.go_back(), InteractionResult::NoOp);
        assert_eq!(wizard.advance(), InteractionResult::NoOp);
        assert_eq!(wizard.session().result, Some(Outcome::NotEligible));
    }

    #[test]
    fn test_export_report_is_stable() {
        let mut wizard = at_intake("impetigo");
        wizard.set_age("8");
        wizard.set_gender(Some(Gender::Male));
        wizard.submit();

        let first = wizard.export_report().map(str::to_string);
        let second = wizard.export_report().map(str::to_string);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(
            first,
            report::render(wizard.session(), wizard.catalog())
        );
    }

    #[test]
    fn test_reset_restores_initial_session() {
        let mut wizard = at_intake("uti");
        wizard.toggle_symptom("Urgency");
        wizard.set_age("30");
        wizard.set_gender(Some(Gender::Female));
        wizard.set_pregnant(true);
        wizard.toggle_red_flag("Blood in urine");
        wizard.submit();

        assert_eq!(
            wizard.reset(),
            InteractionResult::StepChanged(WizardStep::Intro)
        );
        assert_eq!(wizard.session(), &Session::new());
        assert!(wizard.export_report().is_none());
        assert_eq!(wizard.mode(), EntryMode::Direct);
    }

    #[test]
    fn test_edits_blocked_at_intro() {
        let mut wizard = direct();
        assert_eq!(
            wizard.toggle_symptom("Fever"),
            InteractionResult::Blocked(BlockReason::NotAvailableInStep(WizardStep::Intro))
        );
    }

    #[test]
    fn test_infer_flow_matches_condition() {
        let mut wizard = infer();
        wizard.advance();
        assert_eq!(wizard.symptom_choices().len(), builtin_catalog().all_symptoms().len());

        wizard.toggle_symptom("Blisters");
        assert_eq!(
            wizard.advance(),
            InteractionResult::StepChanged(WizardStep::Inference)
        );
        assert_eq!(
            wizard.session().inference,
            Some(Inference::Matched {
                condition_id: "shingles".to_string(),
                match_count: 1
            })
        );
        assert_eq!(wizard.selected_condition().map(|c| c.name.as_str()), Some("Shingles"));

        assert_eq!(
            wizard.advance(),
            InteractionResult::StepChanged(WizardStep::SymptomDetail)
        );
        assert_eq!(
            wizard.symptom_choices(),
            vec!["Painful rash", "Blisters", "Tingling sensation"]
        );
        assert_eq!(
            wizard.go_back(),
            InteractionResult::StepChanged(WizardStep::Inference)
        );
    }

    #[test]
    fn test_infer_undetermined_blocks_until_override() {
        let mut wizard = infer();
        wizard.advance();
        wizard.toggle_symptom("headache");
        wizard.advance();

        assert_eq!(wizard.session().inference, Some(Inference::Undetermined));
        assert!(wizard.session().selected_condition.is_none());
        assert_eq!(
            wizard.advance(),
            InteractionResult::Blocked(BlockReason::UndeterminedCondition)
        );

        assert_eq!(wizard.select_condition("sinusitis"), InteractionResult::Changed);
        assert_eq!(
            wizard.advance(),
            InteractionResult::StepChanged(WizardStep::SymptomDetail)
        );
    }

    #[test]
    fn test_infer_mode_rejects_direct_pick_at_selection() {
        let mut wizard = infer();
        wizard.advance();
        assert_eq!(
            wizard.select_condition("uti"),
            InteractionResult::Blocked(BlockReason::NotAvailableInStep(WizardStep::Selection))
        );
    }

    #[test]
    fn test_reinference_after_back_uses_new_symptoms() {
        let mut wizard = infer();
        wizard.advance();
        wizard.toggle_symptom("Ear pain");
        wizard.advance();
        assert_eq!(wizard.session().selected_condition.as_deref(), Some("otitis_media"));

        wizard.go_back();
        wizard.toggle_symptom("Ear pain");
        wizard.toggle_symptom("Itching");
        wizard.toggle_symptom("Redness");
        wizard.advance();
        assert_eq!(wizard.session().selected_condition.as_deref(), Some("insect_bite"));
    }

    struct EveryTime(usize);

    impl AnimationDriver for EveryTime {
        fn next_toggle(&mut self, pool: &[&str]) -> Option<String> {
            let pick = pool.get(self.0 % pool.len()).map(|s| s.to_string());
            self.0 += 1;
            pick
        }
    }

    #[test]
    fn test_animation_never_touches_session() {
        let mut wizard = Wizard::new(builtin_catalog(), EntryMode::Infer)
            .with_animation(Box::new(EveryTime(0)));
        wizard.advance();
        let before = wizard.session().clone();

        for _ in 0..5 {
            wizard.tick_animation();
        }
        assert_eq!(wizard.frame().len(), 5);
        assert_eq!(wizard.session(), &before);

        wizard.reset();
        assert!(wizard.frame().is_empty());
    }
}
