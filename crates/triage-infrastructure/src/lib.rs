pub mod config_service;
pub mod paths;
pub mod report_export;
pub mod storage;
pub mod toml_catalog_repository;

pub use crate::config_service::{ConfigService, resolve_catalog};
pub use crate::paths::TriagePaths;
pub use crate::report_export::save_report;
pub use crate::toml_catalog_repository::TomlCatalogRepository;
