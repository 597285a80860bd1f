//! Workspace state: active template, editor text and save status.

use std::fmt;

use serde::Serialize;

use crate::surface::{StatusIndicator, StatusTone};

/// Last observed action, shown in the status badge.
///
/// This is an indicator only. No operation is ever refused because of the
/// current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    /// Template content loaded; no override existed.
    LoadedTemplate,
    /// A persisted override was loaded in place of the template content.
    LoadedSavedCopy,
    /// Editor text changed since the last load or save.
    Unsaved,
    /// Editor text written to the override store.
    Saved,
    /// Editor text placed on the clipboard.
    Copied,
    /// Every clipboard strategy failed.
    CopyFailed,
}

impl SaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            SaveStatus::LoadedTemplate => "Loaded template",
            SaveStatus::LoadedSavedCopy => "Loaded saved copy",
            SaveStatus::Unsaved => "Unsaved changes",
            SaveStatus::Saved => "Saved locally",
            SaveStatus::Copied => "Copied to clipboard",
            SaveStatus::CopyFailed => "Copy unavailable",
        }
    }

    pub fn tone(self) -> StatusTone {
        match self {
            SaveStatus::LoadedTemplate | SaveStatus::LoadedSavedCopy => StatusTone::Muted,
            SaveStatus::Saved | SaveStatus::Copied => StatusTone::Ok,
            SaveStatus::Unsaved | SaveStatus::CopyFailed => StatusTone::Warn,
        }
    }

    pub fn indicator(self) -> StatusIndicator {
        StatusIndicator {
            label: self.label(),
            tone: self.tone(),
        }
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single active editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceState {
    /// Always a key present in the catalog.
    pub(crate) active_template_id: String,
    pub(crate) editor_text: String,
    pub(crate) save_status: SaveStatus,
}

impl WorkspaceState {
    pub fn active_template_id(&self) -> &str {
        &self.active_template_id
    }

    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }
}
