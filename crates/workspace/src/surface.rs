//! Model of the editor's UI surface: selector controls, scroll offsets and
//! the status badge.

use serde::Serialize;

/// One selector control, tagged with the template it loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorControl {
    pub template_id: String,
    pub active: bool,
}

/// The row of template selector controls. At most one control is active.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectorBar {
    controls: Vec<SelectorControl>,
}

impl SelectorBar {
    /// One inactive control per template id, in the given order.
    pub fn from_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let controls = ids
            .into_iter()
            .map(|id| SelectorControl {
                template_id: id.to_string(),
                active: false,
            })
            .collect();
        Self { controls }
    }

    /// Mark the control for `template_id` active and every other control
    /// inactive. Returns `false` if no control carries that id.
    pub fn activate(&mut self, template_id: &str) -> bool {
        let mut found = false;
        for control in &mut self.controls {
            control.active = control.template_id == template_id;
            found |= control.active;
        }
        found
    }

    /// Id of the active control, if any.
    pub fn active(&self) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.active)
            .map(|c| c.template_id.as_str())
    }

    pub fn active_count(&self) -> usize {
        self.controls.iter().filter(|c| c.active).count()
    }

    pub fn controls(&self) -> &[SelectorControl] {
        &self.controls
    }
}

/// Scroll position of a scrollable surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollOffset {
    pub top: u32,
    pub left: u32,
}

impl ScrollOffset {
    pub fn new(top: u32, left: u32) -> Self {
        Self { top, left }
    }
}

/// The editable surface and the highlighted overlay layered on top of it.
///
/// The overlay always mirrors the editor's offset on both axes so the two
/// read as a single surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollPair {
    pub editor: ScrollOffset,
    pub overlay: ScrollOffset,
}

impl ScrollPair {
    /// Record a new editor offset and copy it to the overlay.
    pub fn scroll_editor(&mut self, offset: ScrollOffset) {
        self.editor = offset;
        self.sync();
    }

    /// Force the overlay offset to match the editor offset.
    pub fn sync(&mut self) {
        self.overlay = self.editor;
    }

    pub fn is_synced(&self) -> bool {
        self.overlay == self.editor
    }
}

/// Visual emphasis of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Muted,
    Ok,
    Warn,
}

/// Text and tone shown in the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub label: &'static str,
    pub tone: StatusTone,
}
