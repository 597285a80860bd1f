//! Detection rule template catalog.
//!
//! This crate provides:
//! - `RuleTemplate`, a canned detection rule offered as an editing starting point
//! - `Catalog`, the immutable ordered id -> template mapping
//! - Built-in templates embedded from `templates/*.yml`
//! - Filesystem loader for additional template YAML files

pub mod catalog;
pub mod error;
pub mod loader;

pub use catalog::{Catalog, RuleTemplate, DEFAULT_TEMPLATE_ID};
pub use error::{CatalogError, Result};
pub use loader::{LoadReport, LoadResult, LoadStatus, TemplateLoader};
