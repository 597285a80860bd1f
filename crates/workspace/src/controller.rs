//! [`RuleWorkspace`]: the rule editor's controller.
//!
//! Owns the catalog, the single [`WorkspaceState`], and the collaborators the
//! editor talks to (override store, highlighter, clipboard). Every UI event
//! maps to exactly one method here; see [`WorkspaceCommand`](crate::WorkspaceCommand)
//! for the dispatch form.

use crafted_rules::{Catalog, RuleTemplate, DEFAULT_TEMPLATE_ID};
use tracing::{debug, info, warn};

use crate::clipboard::{Clipboard, ClipboardError, CopyStrategy};
use crate::error::WorkspaceError;
use crate::highlight::{Highlighted, Highlighter};
use crate::state::{SaveStatus, WorkspaceState};
use crate::store::{storage_key, OverrideStore, DEFAULT_NAMESPACE};
use crate::surface::{ScrollOffset, ScrollPair, SelectorBar, StatusIndicator};

/// Settings fixed for the lifetime of a workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceOptions {
    /// Prefix of every override key.
    pub namespace: String,
    /// Template loaded on construction.
    pub default_template: String,
}

impl Default for WorkspaceOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            default_template: DEFAULT_TEMPLATE_ID.to_string(),
        }
    }
}

/// Labels describing the active template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TemplateLabels {
    title: String,
    context: String,
}

/// Controller for the rule editing session.
pub struct RuleWorkspace {
    catalog: Catalog,
    namespace: String,
    store: Box<dyn OverrideStore>,
    highlighter: Box<dyn Highlighter>,
    clipboard: Clipboard,
    state: WorkspaceState,
    labels: TemplateLabels,
    highlighted: Highlighted,
    selectors: SelectorBar,
    scroll: ScrollPair,
}

impl RuleWorkspace {
    /// Build a workspace and load `options.default_template`.
    pub fn new(
        catalog: Catalog,
        options: WorkspaceOptions,
        store: Box<dyn OverrideStore>,
        highlighter: Box<dyn Highlighter>,
        clipboard: Clipboard,
    ) -> Result<Self, WorkspaceError> {
        if !catalog.contains(&options.default_template) {
            return Err(WorkspaceError::UnknownDefault(options.default_template));
        }

        let selectors = SelectorBar::from_ids(catalog.ids());
        let mut workspace = Self {
            catalog,
            namespace: options.namespace,
            store,
            highlighter,
            clipboard,
            state: WorkspaceState {
                active_template_id: options.default_template.clone(),
                editor_text: String::new(),
                save_status: SaveStatus::LoadedTemplate,
            },
            labels: TemplateLabels::default(),
            highlighted: Highlighted::plain("", ""),
            selectors,
            scroll: ScrollPair::default(),
        };
        workspace.select_template(&options.default_template);
        Ok(workspace)
    }

    // ── Operations ────────────────────────────────────────────────

    /// Load a template into the editor.
    ///
    /// A persisted override replaces the template content. Unknown ids are
    /// ignored: nothing changes and `false` is returned.
    pub fn select_template(&mut self, id: &str) -> bool {
        let Some(template) = self.catalog.get(id) else {
            debug!(template_id = %id, "ignoring selection of unknown template");
            return false;
        };

        let stored = self.store.get(&storage_key(&self.namespace, id));
        let save_status = if stored.is_some() {
            SaveStatus::LoadedSavedCopy
        } else {
            SaveStatus::LoadedTemplate
        };
        let editor_text = stored.unwrap_or_else(|| template.content.clone());

        self.labels = TemplateLabels {
            title: template.title.clone(),
            context: template.context.clone(),
        };
        self.highlighted = self.highlighter.highlight(&editor_text, &template.language);
        self.state = WorkspaceState {
            active_template_id: id.to_string(),
            editor_text,
            save_status,
        };
        self.selectors.activate(id);
        self.scroll.sync();

        info!(template_id = %id, status = %save_status, "loaded template");
        true
    }

    /// Replace the editor text. Any text is accepted as-is.
    pub fn edit_text(&mut self, new_text: impl Into<String>) {
        self.state.editor_text = new_text.into();
        self.state.save_status = SaveStatus::Unsaved;
        self.highlighted = self
            .highlighter
            .highlight(&self.state.editor_text, &self.highlighted.language);
        self.scroll.sync();
    }

    /// Store the editor text as the active template's override.
    pub fn persist(&mut self) {
        let key = storage_key(&self.namespace, &self.state.active_template_id);
        self.store.set(&key, self.state.editor_text.clone());
        self.state.save_status = SaveStatus::Saved;
        info!(key = %key, bytes = self.state.editor_text.len(), "saved override");
    }

    /// Copy the editor text to the clipboard.
    ///
    /// The outcome is reflected in the status; the returned value is for
    /// callers that want to know which strategy ran.
    pub async fn copy_to_clipboard(&mut self) -> Result<CopyStrategy, ClipboardError> {
        let result = self.clipboard.copy(&self.state.editor_text).await;
        match &result {
            Ok(strategy) => {
                self.state.save_status = SaveStatus::Copied;
                info!(?strategy, "copied rule to clipboard");
            }
            Err(e) => {
                self.state.save_status = SaveStatus::CopyFailed;
                warn!(error = %e, "copy to clipboard failed");
            }
        }
        result
    }

    /// Mirror the editor's scroll offset onto the highlighted overlay.
    pub fn scroll_sync(&mut self, editor: ScrollOffset) {
        self.scroll.scroll_editor(editor);
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn active_template_id(&self) -> &str {
        &self.state.active_template_id
    }

    /// The active template's catalog entry.
    pub fn active_template(&self) -> Option<&RuleTemplate> {
        self.catalog.get(&self.state.active_template_id)
    }

    pub fn editor_text(&self) -> &str {
        &self.state.editor_text
    }

    pub fn status(&self) -> SaveStatus {
        self.state.save_status
    }

    pub fn status_indicator(&self) -> StatusIndicator {
        self.state.save_status.indicator()
    }

    /// Title label of the active template.
    pub fn title(&self) -> &str {
        &self.labels.title
    }

    /// Context badge of the active template.
    pub fn context(&self) -> &str {
        &self.labels.context
    }

    pub fn highlighted(&self) -> &Highlighted {
        &self.highlighted
    }

    pub fn selectors(&self) -> &SelectorBar {
        &self.selectors
    }

    pub fn scroll(&self) -> ScrollPair {
        self.scroll
    }

    pub fn overlay_scroll(&self) -> ScrollOffset {
        self.scroll.overlay
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &dyn OverrideStore {
        self.store.as_ref()
    }

    /// Tear down the workspace, handing back its override store.
    pub fn into_store(self) -> Box<dyn OverrideStore> {
        self.store
    }
}

#[cfg(test)]
mod tests;
