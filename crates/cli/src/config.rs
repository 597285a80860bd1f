use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crafted_rules::DEFAULT_TEMPLATE_ID;
use crafted_workspace::DEFAULT_NAMESPACE;

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Prefix for saved override keys
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Template opened on start
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Directory of additional template YAML files
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Directory holding saved overrides (default: platform data dir)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Clipboard command and arguments, text is written to its stdin
    #[serde(default)]
    pub clipboard_command: Option<Vec<String>>,

    /// Carousel advance period in milliseconds
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

fn default_carousel_interval_ms() -> u64 {
    2400
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            default_template: default_template(),
            templates_dir: None,
            data_dir: None,
            clipboard_command: None,
            carousel_interval_ms: default_carousel_interval_ms(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/craftedsignal/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("craftedsignal");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };
        Self::load_from(&config_path)
    }

    fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            debug!(?config_path, "Loading config");
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            let config: Self = toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
            Ok(config)
        } else {
            debug!(?config_path, "Config file not found, using defaults");
            let config = Self::default();
            // Create directory and write default config
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).ok();
            }
            let toml_str = toml::to_string_pretty(&config)
                .context("failed to serialize default config")?;
            std::fs::write(config_path, toml_str).ok();
            Ok(config)
        }
    }

    /// Resolve the data directory.
    /// Priority: cli_override > config file > platform data dir.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        Ok(dirs::data_dir()
            .context("could not determine user data directory")?
            .join("craftedsignal"))
    }

    /// Resolve the templates directory.
    /// Priority: cli_override > config file > none.
    pub fn resolve_templates_dir(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.templates_dir.clone())
    }

    /// Resolve the template opened on start.
    pub fn resolve_template(&self, cli_override: Option<&str>) -> String {
        cli_override
            .map(str::to_string)
            .unwrap_or_else(|| self.default_template.clone())
    }

    /// Path of the override store file inside `data_dir`.
    pub fn overrides_path(data_dir: &Path) -> PathBuf {
        data_dir.join("overrides.json")
    }
}
