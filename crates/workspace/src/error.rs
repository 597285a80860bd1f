//! Workspace construction errors.

/// Errors that can occur while setting up a [`RuleWorkspace`](crate::RuleWorkspace).
///
/// Runtime operations never fail; a failed clipboard copy is reported through
/// [`SaveStatus::CopyFailed`](crate::SaveStatus::CopyFailed) instead.
#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    /// The configured default template is not in the catalog.
    #[error("default template '{0}' is not in the catalog")]
    UnknownDefault(String),
}
