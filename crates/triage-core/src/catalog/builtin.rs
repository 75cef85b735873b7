//! The built-in Pharmacy First catalog.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::model::{Catalog, Condition, PharmacyPathway};
use super::repository::CatalogRepository;
use crate::error::{Result, TriageError};
use crate::session::Gender;

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog {
        conditions: default_conditions(),
    })
});

/// Returns the process-wide built-in catalog.
///
/// The catalog is built once on first access and never mutated.
pub fn builtin_catalog() -> Arc<Catalog> {
    Arc::clone(&BUILTIN)
}

/// Read-only repository serving the built-in catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogRepository;

impl CatalogRepository for BuiltinCatalogRepository {
    fn load(&self) -> Result<Catalog> {
        Ok(builtin_catalog().as_ref().clone())
    }

    fn save(&self, _catalog: &Catalog) -> Result<()> {
        Err(TriageError::config("the built-in catalog is read-only"))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_conditions() -> Vec<Condition> {
    vec![
        Condition {
            id: "uti".to_string(),
            name: "Urinary Tract Infection".to_string(),
            symptoms: strings(&["Painful urination", "Frequent urination", "Urgency"]),
            red_flags: strings(&["Blood in urine", "Severe abdominal pain"]),
            otc_options: strings(&[
                "Increased water intake",
                "Pain relievers like ibuprofen",
                "Urinary alkalinizers (e.g., potassium citrate)",
            ]),
            escalation_criteria: strings(&[
                "Symptoms persist after 2-3 days",
                "Blood in urine",
                "Fever or back pain (potential kidney infection)",
            ]),
            pharmacy_pathway: Some(PharmacyPathway {
                gender: Some(Gender::Female),
                min_age: 16,
                max_age: 64,
            }),
        },
        Condition {
            id: "shingles".to_string(),
            name: "Shingles".to_string(),
            symptoms: strings(&["Painful rash", "Blisters", "Tingling sensation"]),
            red_flags: strings(&["Eye involvement", "Widespread rash"]),
            otc_options: strings(&[
                "Calamine lotion",
                "Pain relievers like acetaminophen",
                "Cool compresses for blisters",
            ]),
            escalation_criteria: strings(&[
                "Rash near eyes or ears",
                "Severe pain",
                "Need for antiviral medications",
            ]),
            pharmacy_pathway: None,
        },
        Condition {
            id: "impetigo".to_string(),
            name: "Impetigo".to_string(),
            symptoms: strings(&["Red sores", "Blisters", "Honey-colored crusts"]),
            red_flags: strings(&["Fever", "Swollen lymph nodes"]),
            otc_options: strings(&[
                "Gentle cleansing with soap and water",
                "Antibiotic ointments (e.g., Neosporin)",
                "Covering the area",
            ]),
            escalation_criteria: strings(&[
                "Infection spreads",
                "Needs oral antibiotics",
                "Fever or painful sores",
            ]),
            pharmacy_pathway: None,
        },
        Condition {
            id: "insect_bite".to_string(),
            name: "Infected Insect Bite".to_string(),
            symptoms: strings(&["Swelling", "Redness", "Itching"]),
            red_flags: strings(&["Difficulty breathing", "Severe swelling"]),
            otc_options: strings(&[
                "Antihistamine creams",
                "Hydrocortisone cream",
                "Antiseptic creams",
            ]),
            escalation_criteria: strings(&[
                "Severe allergic reaction",
                "Spreading redness",
                "Fever or flu-like symptoms",
            ]),
            pharmacy_pathway: None,
        },
        Condition {
            id: "sore_throat".to_string(),
            name: "Sore Throat".to_string(),
            symptoms: strings(&["Pain when swallowing", "Swollen glands", "Fever"]),
            red_flags: strings(&["Difficulty breathing", "Drooling"]),
            otc_options: strings(&[
                "Throat lozenges",
                "Saltwater gargling",
                "Pain relievers like ibuprofen",
            ]),
            escalation_criteria: strings(&[
                "Difficulty swallowing",
                "High fever",
                "Symptoms last more than a week",
            ]),
            pharmacy_pathway: None,
        },
        Condition {
            id: "sinusitis".to_string(),
            name: "Sinusitis".to_string(),
            symptoms: strings(&["Facial pain", "Nasal discharge", "Reduced sense of smell"]),
            red_flags: strings(&["Severe headache", "Visual changes"]),
            otc_options: strings(&[
                "Nasal decongestant sprays",
                "Saline nasal irrigation",
                "Pain relievers like ibuprofen",
            ]),
            escalation_criteria: strings(&[
                "Symptoms last more than 10 days",
                "Severe symptoms or high fever",
                "Recurring sinusitis episodes",
            ]),
            pharmacy_pathway: None,
        },
        Condition {
            id: "otitis_media".to_string(),
            name: "Acute Otitis Media".to_string(),
            symptoms: strings(&["Ear pain", "Difficulty hearing", "Fever"]),
            red_flags: strings(&["Swelling behind the ear", "Facial weakness"]),
            otc_options: strings(&["Pain relievers like ibuprofen", "Warm compress"]),
            escalation_criteria: strings(&[
                "Children under 6 months",
                "High fever or severe pain",
                "Symptoms last more than 2-3 days",
            ]),
            pharmacy_pathway: None,
        },
    ]
}
