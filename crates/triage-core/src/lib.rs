//! Core domain of the Pharmacy First triage wizard.
//!
//! The crate is pure logic with no I/O: a condition [`catalog`], symptom
//! [`inference`], the [`eligibility`] rules, the plain-text [`report`] and the
//! [`wizard`] engine that drives a single [`session`] through its steps.
//! Persistence lives in `triage-infrastructure`; hosts live in
//! `triage-readline` and `triage-cli`.
//!
//! ```
//! use triage_core::{EntryMode, Gender, InteractionResult, Outcome, Wizard};
//! use triage_core::catalog::builtin_catalog;
//!
//! let mut wizard = Wizard::new(builtin_catalog(), EntryMode::Direct);
//! wizard.advance();
//! wizard.select_condition("uti");
//! wizard.advance();
//! wizard.advance();
//! wizard.set_age("30");
//! wizard.set_gender(Some(Gender::Female));
//!
//! assert_eq!(wizard.submit(), InteractionResult::Completed(Outcome::PharmacyEligible));
//! assert!(wizard.export_report().is_some());
//! ```

pub mod animation;
pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod inference;
pub mod report;
pub mod session;
pub mod wizard;

pub use animation::{AnimationDriver, AnimationFrame, StillDriver};
pub use config::{CONFIG_KEYS, TriageConfig};
pub use eligibility::Outcome;
pub use error::{Result, TriageError};
pub use inference::Inference;
pub use session::{EntryMode, Gender, Session, UserInputs, WizardStep};
pub use wizard::{BlockReason, InteractionResult, Wizard};
