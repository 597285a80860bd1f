//! Clipboard strategies.
//!
//! Copying tries an asynchronous primary writer first. When the writer is
//! missing, reports itself unavailable, or fails, the text is copied through
//! a temporary hidden surface instead. The surface is always released.

mod surface;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

pub use self::surface::{SurfaceId, TempSurface};

/// Errors that can occur while copying to the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The strategy is not available on this platform.
    #[error("clipboard not supported")]
    NotSupported,

    /// The strategy ran and failed.
    #[error("clipboard write failed: {0}")]
    Failed(String),

    /// Every strategy failed.
    #[error("clipboard unavailable (primary: {primary}; fallback: {fallback})")]
    Unavailable { primary: String, fallback: String },
}

/// Direct asynchronous clipboard write.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Whether the writer can be used at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Place `text` verbatim on the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    /// Human-readable name for logs (e.g., "wl-copy").
    fn name(&self) -> &str;
}

/// Fallback copy path: a temporary editable surface whose selection is copied.
pub trait SelectionSurface: Send + Sync {
    /// Create a hidden surface holding `text`.
    fn mount(&self, text: &str) -> Result<SurfaceId, ClipboardError>;

    /// Select the surface's content and copy it.
    fn copy_selection(&self, id: SurfaceId) -> Result<(), ClipboardError>;

    /// Remove the surface. Must tolerate ids that were already removed.
    fn unmount(&self, id: SurfaceId);
}

/// Which strategy placed the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyStrategy {
    Primary,
    Fallback,
}

/// The configured clipboard strategies, tried in order.
#[derive(Default)]
pub struct Clipboard {
    writer: Option<Box<dyn ClipboardWriter>>,
    fallback: Option<Box<dyn SelectionSurface>>,
}

impl Clipboard {
    /// A clipboard with no strategies; every copy fails.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn with_writer(mut self, writer: impl ClipboardWriter + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    pub fn with_fallback(mut self, surface: impl SelectionSurface + 'static) -> Self {
        self.fallback = Some(Box::new(surface));
        self
    }

    /// Copy `text`, trying the primary writer then the fallback surface.
    pub async fn copy(&self, text: &str) -> Result<CopyStrategy, ClipboardError> {
        let primary_error = match &self.writer {
            Some(writer) if writer.is_available() => match writer.write_text(text).await {
                Ok(()) => {
                    debug!(writer = writer.name(), bytes = text.len(), "copied via primary writer");
                    return Ok(CopyStrategy::Primary);
                }
                Err(e) => {
                    warn!(writer = writer.name(), error = %e, "primary clipboard write failed, trying fallback");
                    e
                }
            },
            _ => ClipboardError::NotSupported,
        };

        let fallback_error = match &self.fallback {
            Some(surface) => match copy_via_surface(surface.as_ref(), text) {
                Ok(()) => {
                    debug!(bytes = text.len(), "copied via fallback surface");
                    return Ok(CopyStrategy::Fallback);
                }
                Err(e) => e,
            },
            None => ClipboardError::NotSupported,
        };

        Err(ClipboardError::Unavailable {
            primary: primary_error.to_string(),
            fallback: fallback_error.to_string(),
        })
    }
}

/// Mount, copy, and release a temporary surface. The guard unmounts on
/// every return path.
fn copy_via_surface(surface: &dyn SelectionSurface, text: &str) -> Result<(), ClipboardError> {
    let temp = TempSurface::mount(surface, text)?;
    temp.copy()
}
