//! Condition inference from free-form symptoms.
//!
//! Each condition scores the number of its symptoms present in the selection.
//! The highest score wins; on a tie the condition that appears first in the
//! catalog keeps the lead. A best score of zero yields `Undetermined`.

use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Label used wherever an undetermined inference is displayed.
pub const UNDETERMINED: &str = "Undetermined";

/// Result of matching a symptom selection against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inference {
    /// A condition shared at least one symptom with the selection.
    Matched {
        condition_id: String,
        match_count: usize,
    },
    /// No condition shared any symptom with the selection.
    Undetermined,
}

impl Inference {
    pub fn condition_id(&self) -> Option<&str> {
        match self {
            Inference::Matched { condition_id, .. } => Some(condition_id),
            Inference::Undetermined => None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Inference::Undetermined)
    }

    /// Display name of the inferred condition, or `Undetermined`.
    pub fn display_name<'a>(&'a self, catalog: &'a Catalog) -> &'a str {
        self.condition_id()
            .and_then(|id| catalog.get(id))
            .map(|condition| condition.name.as_str())
            .unwrap_or(UNDETERMINED)
    }
}

impl fmt::Display for Inference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inference::Matched {
                condition_id,
                match_count,
            } => write!(f, "{condition_id} ({match_count} matching)"),
            Inference::Undetermined => f.write_str(UNDETERMINED),
        }
    }
}

/// Infers the best-matching condition for `selected`.
///
/// Deterministic and total: the same selection always produces the same
/// answer, and an empty or non-overlapping selection is `Undetermined`.
pub fn infer_condition(catalog: &Catalog, selected: &IndexSet<String>) -> Inference {
    let mut best: Option<(&str, usize)> = None;

    for condition in catalog.conditions() {
        let count = condition.match_count(selected);
        let leading = best.map_or(0, |(_, best_count)| best_count);
        // Strictly greater: an equal score never displaces an earlier entry.
        if count > leading {
            best = Some((condition.id.as_str(), count));
        }
    }

    let inference = match best {
        Some((condition_id, match_count)) => Inference::Matched {
            condition_id: condition_id.to_string(),
            match_count,
        },
        None => Inference::Undetermined,
    };

    tracing::info!(
        selected = selected.len(),
        inference = %inference,
        "inferred condition from symptoms"
    );

    inference
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn selection(items: &[&str]) -> IndexSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picks_condition_with_most_matches() {
        let catalog = builtin_catalog();
        let inferred = infer_condition(
            &catalog,
            &selection(&["Red sores", "Honey-colored crusts", "Painful rash"]),
        );
        assert_eq!(
            inferred,
            Inference::Matched {
                condition_id: "impetigo".to_string(),
                match_count: 2
            }
        );
    }

    #[test]
    fn test_tie_goes_to_first_in_catalog_order() {
        let catalog = builtin_catalog();
        // Blisters is listed by both Shingles and Impetigo; Shingles comes first.
        let inferred = infer_condition(&catalog, &selection(&["Blisters"]));
        assert_eq!(inferred.condition_id(), Some("shingles"));

        // Fever is shared by Sore Throat and Acute Otitis Media.
        let inferred = infer_condition(&catalog, &selection(&["Fever"]));
        assert_eq!(inferred.condition_id(), Some("sore_throat"));
    }

    #[test]
    fn test_no_overlap_is_undetermined() {
        let catalog = builtin_catalog();
        let inferred = infer_condition(&catalog, &selection(&["headache"]));
        assert!(inferred.is_undetermined());
        assert_eq!(inferred.display_name(&catalog), "Undetermined");
        assert_eq!(inferred.to_string(), "Undetermined");
    }

    #[test]
    fn test_empty_selection_is_undetermined() {
        let catalog = builtin_catalog();
        assert_eq!(
            infer_condition(&catalog, &IndexSet::new()),
            Inference::Undetermined
        );
    }

    #[test]
    fn test_matching_is_exact() {
        let catalog = builtin_catalog();
        let inferred = infer_condition(&catalog, &selection(&["blisters"]));
        assert!(inferred.is_undetermined());
    }

    #[test]
    fn test_inference_is_deterministic() {
        let catalog = builtin_catalog();
        let symptoms = selection(&["Fever", "Ear pain", "Swelling"]);
        let first = infer_condition(&catalog, &symptoms);
        for _ in 0..10 {
            assert_eq!(infer_condition(&catalog, &symptoms), first);
        }
        assert_eq!(first.condition_id(), Some("otitis_media"));
        assert_eq!(first.display_name(&catalog), "Acute Otitis Media");
    }
}
