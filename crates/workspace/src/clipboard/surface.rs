use serde::Serialize;

use super::{ClipboardError, SelectionSurface};

/// Handle to a mounted temporary surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SurfaceId(pub u64);

/// Scoped temporary surface: mounted on creation, unmounted on drop.
pub struct TempSurface<'a> {
    surface: &'a dyn SelectionSurface,
    id: SurfaceId,
}

impl<'a> TempSurface<'a> {
    pub fn mount(surface: &'a dyn SelectionSurface, text: &str) -> Result<Self, ClipboardError> {
        let id = surface.mount(text)?;
        Ok(Self { surface, id })
    }

    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn copy(&self) -> Result<(), ClipboardError> {
        self.surface.copy_selection(self.id)
    }
}

impl Drop for TempSurface<'_> {
    fn drop(&mut self) {
        self.surface.unmount(self.id);
    }
}
