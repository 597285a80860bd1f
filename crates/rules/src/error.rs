//! Error types for catalog construction and template loading.

/// Errors that can occur while building the template catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Template validation error (empty id, duplicate id).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A catalog must hold at least one template.
    #[error("catalog has no templates")]
    Empty,
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
