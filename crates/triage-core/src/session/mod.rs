//! Session domain module.
//!
//! Holds the mutable per-interaction state of one wizard run. There is only
//! ever one live session; it is created fresh when the wizard starts and
//! replaced wholesale on "start over".
//!
//! # Module Structure
//!
//! - `model`: Session state (`Session`, `UserInputs`, `Gender`)
//! - `step`: Wizard stages and entry strategy (`WizardStep`, `EntryMode`)

mod model;
mod step;

// Re-export public API
pub use model::{Gender, Session, UserInputs};
pub(crate) use model::toggle_entry;
pub use step::{EntryMode, WizardStep};
