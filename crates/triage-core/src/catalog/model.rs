//! Catalog domain model.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};
use crate::session::Gender;

/// Demographic window in which a condition can be handled by a pharmacy
/// without a GP visit. Both age bounds are inclusive.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PharmacyPathway {
    /// Required gender; `None` admits any recorded gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub min_age: u32,
    pub max_age: u32,
}

impl PharmacyPathway {
    /// Returns true when the given gender and numeric age fall inside the pathway.
    ///
    /// An age that could not be parsed (`None`) never qualifies.
    pub fn admits(&self, gender: Option<Gender>, age: Option<f64>) -> bool {
        if let Some(required) = self.gender {
            if gender != Some(required) {
                return false;
            }
        }

        match age {
            Some(age) => age >= f64::from(self.min_age) && age <= f64::from(self.max_age),
            None => false,
        }
    }
}

/// A single condition entry of the catalog.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Stable identifier (e.g. `uti`)
    pub id: String,
    /// Display name used in prompts and reports
    pub name: String,
    /// Symptoms matched during inference, in display order
    pub symptoms: Vec<String>,
    /// Symptoms that require immediate escalation
    #[serde(default)]
    pub red_flags: Vec<String>,
    /// Over-the-counter treatment options
    #[serde(default)]
    pub otc_options: Vec<String>,
    /// When to seek medical attention
    #[serde(default)]
    pub escalation_criteria: Vec<String>,
    /// Pharmacy pathway; conditions without one are never pharmacy-eligible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pharmacy_pathway: Option<PharmacyPathway>,
}

impl Condition {
    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }

    pub fn has_red_flag(&self, flag: &str) -> bool {
        self.red_flags.iter().any(|f| f == flag)
    }

    /// Number of this condition's symptoms present in `selected`.
    pub fn match_count(&self, selected: &IndexSet<String>) -> usize {
        self.symptoms
            .iter()
            .filter(|symptom| selected.contains(symptom.as_str()))
            .count()
    }
}

/// On-disk shape of a catalog (`[[condition]]` tables).
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
struct CatalogFile {
    #[serde(rename = "condition", default)]
    conditions: Vec<Condition>,
}

/// An ordered, validated collection of conditions.
///
/// The order is significant: condition inference breaks ties in favour of the
/// entry that comes first.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    #[serde(rename = "condition")]
    pub(crate) conditions: Vec<Condition>,
}

impl Catalog {
    /// Builds a catalog, rejecting entries that violate the catalog invariants.
    pub fn new(conditions: Vec<Condition>) -> Result<Self> {
        let catalog = Self { conditions };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses and validates a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.conditions)
    }

    /// Serializes the catalog back to the `[[condition]]` TOML layout.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Exact lookup by id.
    pub fn get(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Case-insensitive lookup by id or display name.
    pub fn find(&self, query: &str) -> Option<&Condition> {
        let query = query.trim();
        self.conditions
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(query) || c.name.eq_ignore_ascii_case(query))
    }

    /// Every symptom of every condition, in catalog order, without duplicates.
    pub fn all_symptoms(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        for condition in &self.conditions {
            for symptom in &condition.symptoms {
                seen.insert(symptom.as_str());
            }
        }
        seen.into_iter().collect()
    }

    /// Catalog spelling of `text`, matched case-insensitively after trimming.
    ///
    /// Inference compares symptoms exactly, so hosts that accept typed
    /// symptoms normalise them through this first.
    pub fn canonical_symptom(&self, text: &str) -> Option<&str> {
        let text = text.trim();
        self.conditions
            .iter()
            .flat_map(|c| c.symptoms.iter())
            .find(|symptom| symptom.eq_ignore_ascii_case(text))
            .map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if self.conditions.is_empty() {
            return Err(TriageError::catalog("catalog has no conditions"));
        }

        let mut ids = HashSet::new();
        for condition in &self.conditions {
            if condition.id.trim().is_empty() {
                return Err(TriageError::catalog("condition id must not be empty"));
            }
            if !ids.insert(condition.id.as_str()) {
                return Err(TriageError::catalog(format!(
                    "duplicate condition id '{}'",
                    condition.id
                )));
            }
            if condition.name.trim().is_empty() {
                return Err(TriageError::catalog(format!(
                    "condition '{}' has an empty name",
                    condition.id
                )));
            }
            if condition.symptoms.is_empty() {
                return Err(TriageError::catalog(format!(
                    "condition '{}' must list at least one symptom",
                    condition.id
                )));
            }

            let mut symptoms = HashSet::new();
            for symptom in &condition.symptoms {
                if symptom.trim().is_empty() {
                    return Err(TriageError::catalog(format!(
                        "condition '{}' has a blank symptom",
                        condition.id
                    )));
                }
                if !symptoms.insert(symptom.as_str()) {
                    return Err(TriageError::catalog(format!(
                        "condition '{}' lists symptom '{}' twice",
                        condition.id, symptom
                    )));
                }
            }

            if let Some(pathway) = &condition.pharmacy_pathway {
                if pathway.min_age > pathway.max_age {
                    return Err(TriageError::catalog(format!(
                        "condition '{}' has a pharmacy pathway with min_age {} above max_age {}",
                        condition.id, pathway.min_age, pathway.max_age
                    )));
                }
            }
        }

        Ok(())
    }
}
