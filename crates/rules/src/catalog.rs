//! Immutable, ordered catalog of detection rule templates.
//!
//! The catalog is populated once (built-ins plus an optional templates
//! directory) and never mutated afterwards. Iteration follows insertion
//! order so selector controls render in a stable order.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::loader::TemplateLoader;

/// Template selected when a workspace starts.
pub const DEFAULT_TEMPLATE_ID: &str = "encoded-powershell";

/// Highlighter language used when a template file omits `language`.
pub const DEFAULT_LANGUAGE: &str = "yaml";

/// Built-in templates embedded at compile time, in display order.
const BUILTIN_SOURCES: &[(&str, &str)] = &[
    (
        "encoded-powershell.yml",
        include_str!("../templates/encoded-powershell.yml"),
    ),
    (
        "webshell-upload.yml",
        include_str!("../templates/webshell-upload.yml"),
    ),
    (
        "kerberoasting.yml",
        include_str!("../templates/kerberoasting.yml"),
    ),
];

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// A canned detection rule offered as a starting point for editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTemplate {
    /// Unique catalog key.
    pub id: String,
    /// Display name.
    pub title: String,
    /// Deployment status label ("Production", "Testing", "Shadow eval").
    pub context: String,
    /// Formatting hint for the highlighter.
    #[serde(default = "default_language")]
    pub language: String,
    /// Canonical template text.
    pub content: String,
}

impl RuleTemplate {
    /// Parse a single template from its YAML file representation.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let template: Self = serde_yaml::from_str(yaml)?;
        template.validate()?;
        Ok(template)
    }

    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "template id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fixed mapping from template id to [`RuleTemplate`].
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: IndexMap<String, RuleTemplate>,
}

impl Catalog {
    /// Build a catalog from templates, rejecting empty and duplicate ids.
    pub fn from_templates<I>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuleTemplate>,
    {
        let mut map = IndexMap::new();
        for template in templates {
            template.validate()?;
            if map.contains_key(&template.id) {
                return Err(CatalogError::Validation(format!(
                    "duplicate template id '{}'",
                    template.id
                )));
            }
            map.insert(template.id.clone(), template);
        }

        if map.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { templates: map })
    }

    /// The templates shipped with the workspace.
    pub fn builtin() -> Result<Self> {
        let templates = BUILTIN_SOURCES
            .iter()
            .map(|(name, yaml)| {
                RuleTemplate::from_yaml(yaml).map_err(|e| {
                    CatalogError::Validation(format!("built-in template {}: {}", name, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_templates(templates)
    }

    /// Built-in templates followed by every template found under `dir`.
    ///
    /// A loaded template whose id matches an earlier entry replaces it in
    /// place, keeping the original position. Files that fail to parse are
    /// skipped and logged by the loader.
    pub fn builtin_with_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        let report = TemplateLoader::new(dir.to_path_buf()).load_all()?;

        for template in report.templates {
            let id = template.id.clone();
            if catalog.templates.insert(id.clone(), template).is_some() {
                warn!(template_id = %id, dir = %dir.display(), "template overrides an earlier definition");
            }
        }

        info!(
            templates = catalog.len(),
            failed = report.failed,
            dir = %dir.display(),
            "catalog built"
        );
        Ok(catalog)
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&RuleTemplate> {
        self.templates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Template ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Templates in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
