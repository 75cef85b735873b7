//! Condition catalog module.
//!
//! The catalog is the static, read-only table the wizard works against: for
//! each condition it lists the symptoms used for matching, the red flags that
//! trigger an urgent referral, the over-the-counter options and escalation
//! criteria printed in the report, and an optional pharmacy pathway.
//!
//! # Module Structure
//!
//! - `model`: Catalog domain models (`Catalog`, `Condition`, `PharmacyPathway`)
//! - `builtin`: The built-in Pharmacy First catalog
//! - `repository`: Repository trait for loading/saving catalogs
//!
//! # Usage
//!
//! ```ignore
//! use triage_core::catalog::{builtin_catalog, Catalog, CatalogRepository};
//! ```

mod builtin;
mod model;
mod repository;

pub use builtin::{BuiltinCatalogRepository, builtin_catalog};
pub use model::{Catalog, Condition, PharmacyPathway};
pub use repository::CatalogRepository;
