//! Cosmetic symptom animation.
//!
//! Hosts may "float" catalog symptoms on the selection screen by toggling a
//! highlight on a timer or on every prompt. The highlight lives in an
//! [`AnimationFrame`] owned next to the session; nothing in the eligibility,
//! inference or report code reads it.

use indexmap::IndexSet;

use crate::session::toggle_entry;

/// Source of cosmetic toggles.
pub trait AnimationDriver: Send {
    /// Picks the next symptom to toggle from `pool`, or `None` to keep the
    /// current frame.
    fn next_toggle(&mut self, pool: &[&str]) -> Option<String>;
}

/// Driver that never animates.
#[derive(Debug, Default, Clone, Copy)]
pub struct StillDriver;

impl AnimationDriver for StillDriver {
    fn next_toggle(&mut self, _pool: &[&str]) -> Option<String> {
        None
    }
}

/// The set of symptoms currently highlighted for display.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnimationFrame {
    highlighted: IndexSet<String>,
}

impl AnimationFrame {
    pub fn is_highlighted(&self, symptom: &str) -> bool {
        self.highlighted.contains(symptom)
    }

    pub fn highlighted(&self) -> impl Iterator<Item = &str> {
        self.highlighted.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.highlighted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlighted.is_empty()
    }

    pub(crate) fn toggle(&mut self, symptom: &str) {
        toggle_entry(&mut self.highlighted, symptom);
    }

    pub(crate) fn clear(&mut self) {
        self.highlighted.clear();
    }
}
