//! Core [`TemplateLoader`] struct: directory scan for template YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::catalog::RuleTemplate;
use crate::error::Result;

use super::report::{LoadReport, LoadResult, LoadStatus};

/// Filesystem-backed template loader.
///
/// Scans a directory (recursively) for `*.yml` / `*.yaml` files and parses
/// each into a [`RuleTemplate`]. Entries are visited in sorted path order so
/// the resulting catalog order is stable across runs.
pub struct TemplateLoader {
    /// Root directory containing template YAML files.
    templates_dir: PathBuf,
}

impl TemplateLoader {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    /// Recursively scan the templates directory and load all YAML files.
    ///
    /// A missing directory yields an empty report.
    pub fn load_all(&self) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        if !self.templates_dir.exists() {
            debug!(path = %self.templates_dir.display(), "templates directory does not exist");
            return Ok(report);
        }
        self.scan_dir_recursive(&self.templates_dir, &mut report)?;
        Ok(report)
    }

    fn scan_dir_recursive(&self, dir: &Path, report: &mut LoadReport) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "failed to read directory");
                return Ok(());
            }
        };

        let mut paths = entries
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.sort();

        for path in paths {
            // Skip dotfiles/dotdirs
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        report.results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir_recursive(&path, report)?;
                continue;
            }

            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == "yml" || e == "yaml")
                .unwrap_or(false);

            if !is_yaml {
                report.results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML file".to_string(),
                    },
                });
                continue;
            }

            match self.load_file(&path) {
                Ok(template) => {
                    info!(template_id = %template.id, path = %path.display(), "loaded template");
                    report.results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded {
                            template_id: template.id.clone(),
                        },
                    });
                    report.templates.push(template);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load template file");
                    report.failed += 1;
                    report.results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse a single YAML file into a [`RuleTemplate`].
    pub fn load_file(&self, path: &Path) -> Result<RuleTemplate> {
        let contents = fs::read_to_string(path)?;
        RuleTemplate::from_yaml(&contents)
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}
