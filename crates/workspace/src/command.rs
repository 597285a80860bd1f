//! Explicit command dispatch: one command per UI event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controller::RuleWorkspace;
use crate::state::SaveStatus;
use crate::surface::ScrollOffset;

/// A UI event translated into a workspace operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum WorkspaceCommand {
    /// A selector control was clicked.
    Select { template_id: String },
    /// The editable surface received input.
    Edit { text: String },
    /// The save control was clicked.
    Save,
    /// The copy control was clicked.
    Copy,
    /// The editable surface scrolled.
    Scroll { top: u32, left: u32 },
}

impl RuleWorkspace {
    /// Run the operation a command maps to and return the resulting status.
    pub async fn dispatch(&mut self, command: WorkspaceCommand) -> SaveStatus {
        debug!(?command, "dispatching workspace command");
        match command {
            WorkspaceCommand::Select { template_id } => {
                self.select_template(&template_id);
            }
            WorkspaceCommand::Edit { text } => self.edit_text(text),
            WorkspaceCommand::Save => self.persist(),
            WorkspaceCommand::Copy => {
                // Failure is already reflected in the status.
                let _ = self.copy_to_clipboard().await;
            }
            WorkspaceCommand::Scroll { top, left } => self.scroll_sync(ScrollOffset::new(top, left)),
        }
        self.status()
    }
}
