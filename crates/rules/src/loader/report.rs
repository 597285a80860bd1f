//! Load result structures for the template loader.

use std::path::PathBuf;

use crate::catalog::RuleTemplate;

/// Outcome of loading a single template file.
#[derive(Debug)]
pub struct LoadResult {
    /// Path to the file that was loaded.
    pub path: PathBuf,
    /// Status of the load attempt.
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    /// Template was successfully loaded.
    Loaded { template_id: String },
    /// File was skipped (dotfile, non-YAML, etc.).
    Skipped { reason: String },
    /// Parse or validation error occurred.
    Failed { error: String },
}

/// Everything a directory scan produced.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully parsed templates, in path order.
    pub templates: Vec<RuleTemplate>,
    /// One entry per file visited.
    pub results: Vec<LoadResult>,
    /// Number of files that failed to parse.
    pub failed: usize,
}
