//! Tests for the workspace controller.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crafted_rules::RuleTemplate;

use super::*;
use crate::clipboard::{ClipboardWriter, SelectionSurface, SurfaceId};
use crate::highlight::SyntaxHighlighter;
use crate::store::MemoryStore;
use crate::surface::StatusTone;

const PS_KEY: &str = "craftedsignal.rule.encoded-powershell";

struct RecordingWriter {
    written: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ClipboardWriter for RecordingWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

struct BrokenSurface;

impl SelectionSurface for BrokenSurface {
    fn mount(&self, _text: &str) -> Result<SurfaceId, ClipboardError> {
        Ok(SurfaceId(7))
    }

    fn copy_selection(&self, _id: SurfaceId) -> Result<(), ClipboardError> {
        Err(ClipboardError::Failed("denied".to_string()))
    }

    fn unmount(&self, _id: SurfaceId) {}
}

fn workspace_with(store: MemoryStore, clipboard: Clipboard) -> RuleWorkspace {
    RuleWorkspace::new(
        Catalog::builtin().unwrap(),
        WorkspaceOptions::default(),
        Box::new(store),
        Box::new(SyntaxHighlighter),
        clipboard,
    )
    .unwrap()
}

fn workspace() -> RuleWorkspace {
    workspace_with(MemoryStore::new(), Clipboard::unsupported())
}

fn template_content(ws: &RuleWorkspace, id: &str) -> String {
    ws.catalog().get(id).unwrap().content.clone()
}

#[test]
fn construction_loads_default_template() {
    let ws = workspace();
    assert_eq!(ws.active_template_id(), "encoded-powershell");
    assert_eq!(ws.editor_text(), template_content(&ws, "encoded-powershell"));
    assert_eq!(ws.status(), SaveStatus::LoadedTemplate);
    assert_eq!(ws.title(), "Encoded PowerShell (KQL/SPL)");
    assert_eq!(ws.context(), "Shadow eval");
    assert_eq!(ws.selectors().active(), Some("encoded-powershell"));
}

#[test]
fn construction_rejects_unknown_default() {
    let options = WorkspaceOptions {
        default_template: "missing".to_string(),
        ..WorkspaceOptions::default()
    };
    let result = RuleWorkspace::new(
        Catalog::builtin().unwrap(),
        options,
        Box::new(MemoryStore::new()),
        Box::new(SyntaxHighlighter),
        Clipboard::unsupported(),
    );
    assert!(matches!(result, Err(WorkspaceError::UnknownDefault(ref id)) if id == "missing"));
}

#[test]
fn construction_prefers_stored_override() {
    let store: MemoryStore = [(PS_KEY.to_string(), "custom".to_string())].into_iter().collect();
    let ws = workspace_with(store, Clipboard::unsupported());
    assert_eq!(ws.editor_text(), "custom");
    assert_eq!(ws.status(), SaveStatus::LoadedSavedCopy);
}

#[test]
fn select_every_template_loads_its_content() {
    let mut ws = workspace();
    let ids: Vec<String> = ws.catalog().ids().map(str::to_string).collect();
    for id in ids {
        assert!(ws.select_template(&id));
        assert_eq!(ws.editor_text(), template_content(&ws, &id));
        assert_eq!(ws.status(), SaveStatus::LoadedTemplate);
        assert_eq!(ws.highlighted().language, "yaml");
        assert_eq!(ws.highlighted().text(), ws.editor_text());
    }
}

#[test]
fn select_unknown_changes_nothing() {
    let mut ws = workspace();
    ws.select_template("kerberoasting");
    ws.edit_text("draft");
    let before = ws.state().clone();
    let title = ws.title().to_string();

    assert!(!ws.select_template("does-not-exist"));
    assert_eq!(ws.state(), &before);
    assert_eq!(ws.title(), title);
    assert_eq!(ws.selectors().active(), Some("kerberoasting"));
}

#[test]
fn select_updates_labels() {
    let mut ws = workspace();
    ws.select_template("webshell-upload");
    assert_eq!(ws.title(), "Webshell Upload Detected");
    assert_eq!(ws.context(), "Production");
}

#[test]
fn exactly_one_selector_active_after_each_select() {
    let mut ws = workspace();
    for id in ["webshell-upload", "kerberoasting", "encoded-powershell", "kerberoasting"] {
        ws.select_template(id);
        assert_eq!(ws.selectors().active_count(), 1);
        assert_eq!(ws.selectors().active(), Some(id));
    }
}

#[test]
fn edit_text_round_trips_exactly() {
    let mut ws = workspace();
    for text in ["", "  padded  ", "not: [valid", "line\r\nbreaks\n\n", "✓ unicode"] {
        ws.edit_text(text);
        assert_eq!(ws.editor_text(), text);
        assert_eq!(ws.status(), SaveStatus::Unsaved);
        assert_eq!(ws.highlighted().text(), text);
    }
}

#[test]
fn edit_keeps_template_language() {
    let mut ws = workspace();
    ws.edit_text("level: low");
    assert_eq!(ws.highlighted().language, "yaml");
}

#[test]
fn persist_writes_under_namespaced_key() {
    let mut ws = workspace();
    ws.edit_text("foo");
    ws.persist();
    assert_eq!(ws.status(), SaveStatus::Saved);
    assert_eq!(ws.store().get(PS_KEY).as_deref(), Some("foo"));
}

#[test]
fn persist_is_idempotent() {
    let mut ws = workspace();
    ws.edit_text("foo");
    ws.persist();
    let once = ws.store().get(PS_KEY);
    ws.persist();
    assert_eq!(ws.store().get(PS_KEY), once);
    assert_eq!(ws.status(), SaveStatus::Saved);
}

#[test]
fn persist_without_edit_stores_template_content() {
    let mut ws = workspace();
    ws.select_template("kerberoasting");
    ws.persist();
    assert_eq!(
        ws.store().get("craftedsignal.rule.kerberoasting"),
        Some(template_content(&ws, "kerberoasting"))
    );
}

#[test]
fn override_survives_switching_away_and_back() {
    let mut ws = workspace();
    ws.edit_text("edited powershell");
    ws.persist();

    ws.select_template("webshell-upload");
    assert_eq!(ws.editor_text(), template_content(&ws, "webshell-upload"));

    ws.select_template("encoded-powershell");
    assert_eq!(ws.editor_text(), "edited powershell");
    assert_eq!(ws.status(), SaveStatus::LoadedSavedCopy);
}

#[test]
fn unsaved_edits_are_discarded_on_switch() {
    let mut ws = workspace();
    ws.edit_text("draft");
    ws.select_template("kerberoasting");
    ws.select_template("encoded-powershell");
    assert_eq!(ws.editor_text(), template_content(&ws, "encoded-powershell"));
    assert_eq!(ws.status(), SaveStatus::LoadedTemplate);
}

#[test]
fn namespace_is_configurable() {
    let options = WorkspaceOptions {
        namespace: "acme".to_string(),
        ..WorkspaceOptions::default()
    };
    let mut ws = RuleWorkspace::new(
        Catalog::builtin().unwrap(),
        options,
        Box::new(MemoryStore::new()),
        Box::new(SyntaxHighlighter),
        Clipboard::unsupported(),
    )
    .unwrap();
    ws.persist();
    assert!(ws.store().get("acme.rule.encoded-powershell").is_some());
    assert!(ws.store().get(PS_KEY).is_none());
}

#[test]
fn custom_catalog_language_tags_overlay() {
    let catalog = Catalog::from_templates(vec![RuleTemplate {
        id: "kql".to_string(),
        title: "KQL".to_string(),
        context: "Testing".to_string(),
        language: "kql".to_string(),
        content: "SecurityEvent | take 10".to_string(),
    }])
    .unwrap();
    let options = WorkspaceOptions {
        default_template: "kql".to_string(),
        ..WorkspaceOptions::default()
    };
    let ws = RuleWorkspace::new(
        catalog,
        options,
        Box::new(MemoryStore::new()),
        Box::new(SyntaxHighlighter),
        Clipboard::unsupported(),
    )
    .unwrap();
    assert_eq!(ws.highlighted().language, "kql");
}

#[test]
fn scroll_sync_mirrors_both_axes_every_time() {
    let mut ws = workspace();
    for (top, left) in [(10, 0), (10, 4), (250, 4), (0, 0)] {
        ws.scroll_sync(ScrollOffset::new(top, left));
        assert_eq!(ws.overlay_scroll(), ScrollOffset::new(top, left));
        assert!(ws.scroll().is_synced());
    }
}

#[tokio::test]
async fn copy_success_sets_copied() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let clipboard = Clipboard::default().with_writer(RecordingWriter {
        written: written.clone(),
    });
    let mut ws = workspace_with(MemoryStore::new(), clipboard);
    ws.edit_text("copy me ");

    let strategy = ws.copy_to_clipboard().await.unwrap();
    assert_eq!(strategy, CopyStrategy::Primary);
    assert_eq!(ws.status(), SaveStatus::Copied);
    assert_eq!(ws.status_indicator().tone, StatusTone::Ok);
    assert_eq!(*written.lock().unwrap(), vec!["copy me ".to_string()]);
}

#[tokio::test]
async fn copy_failure_sets_copy_failed_and_keeps_text() {
    let mut ws = workspace_with(
        MemoryStore::new(),
        Clipboard::default().with_fallback(BrokenSurface),
    );
    ws.edit_text("text");

    assert!(ws.copy_to_clipboard().await.is_err());
    assert_eq!(ws.status(), SaveStatus::CopyFailed);
    assert_eq!(ws.status_indicator().label, "Copy unavailable");
    assert_eq!(ws.editor_text(), "text");
}

#[tokio::test]
async fn operations_allowed_after_copy_failure() {
    let mut ws = workspace();
    let _ = ws.copy_to_clipboard().await;
    assert_eq!(ws.status(), SaveStatus::CopyFailed);

    ws.persist();
    assert_eq!(ws.status(), SaveStatus::Saved);
    ws.edit_text("x");
    assert_eq!(ws.status(), SaveStatus::Unsaved);
}

#[test]
fn construction_error_names_missing_default() {
    let err = WorkspaceError::UnknownDefault("sigma-x".to_string());
    assert_eq!(err.to_string(), "default template 'sigma-x' is not in the catalog");
}
