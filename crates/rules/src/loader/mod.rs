//! Filesystem template loader.
//!
//! Scans a templates directory for YAML files and parses each one into a
//! [`RuleTemplate`](crate::RuleTemplate). Failures are reported per file and
//! never abort the scan.

mod core;
mod report;


pub use self::core::TemplateLoader;
pub use self::report::{LoadReport, LoadResult, LoadStatus};
