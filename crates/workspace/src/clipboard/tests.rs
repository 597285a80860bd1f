//! Tests for clipboard strategy selection and surface cleanup.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;

#[derive(Clone, Default)]
struct FakeWriter {
    available: bool,
    fail: bool,
    written: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ClipboardWriter for FakeWriter {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Failed("permission denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "fake"
    }
}

#[derive(Default)]
struct SurfaceLog {
    next_id: u64,
    mounted: HashMap<SurfaceId, String>,
    copied: Vec<String>,
    unmounted: Vec<SurfaceId>,
}

#[derive(Clone, Default)]
struct FakeSurface {
    fail_mount: bool,
    fail_copy: bool,
    log: Arc<Mutex<SurfaceLog>>,
}

impl SelectionSurface for FakeSurface {
    fn mount(&self, text: &str) -> Result<SurfaceId, ClipboardError> {
        if self.fail_mount {
            return Err(ClipboardError::NotSupported);
        }
        let mut log = self.log.lock().unwrap();
        log.next_id += 1;
        let id = SurfaceId(log.next_id);
        log.mounted.insert(id, text.to_string());
        Ok(id)
    }

    fn copy_selection(&self, id: SurfaceId) -> Result<(), ClipboardError> {
        if self.fail_copy {
            return Err(ClipboardError::Failed("execCommand refused".to_string()));
        }
        let mut log = self.log.lock().unwrap();
        let text = log.mounted.get(&id).cloned().unwrap_or_default();
        log.copied.push(text);
        Ok(())
    }

    fn unmount(&self, id: SurfaceId) {
        let mut log = self.log.lock().unwrap();
        log.mounted.remove(&id);
        log.unmounted.push(id);
    }
}

fn writer(available: bool, fail: bool) -> FakeWriter {
    FakeWriter {
        available,
        fail,
        ..FakeWriter::default()
    }
}

#[tokio::test]
async fn primary_writer_is_preferred() {
    let w = writer(true, false);
    let s = FakeSurface::default();
    let clipboard = Clipboard::default()
        .with_writer(w.clone())
        .with_fallback(s.clone());

    let strategy = clipboard.copy("level: high").await.unwrap();
    assert_eq!(strategy, CopyStrategy::Primary);
    assert_eq!(*w.written.lock().unwrap(), vec!["level: high".to_string()]);
    assert!(s.log.lock().unwrap().unmounted.is_empty());
}

#[tokio::test]
async fn unavailable_writer_uses_fallback_and_cleans_up() {
    let s = FakeSurface::default();
    let clipboard = Clipboard::default()
        .with_writer(writer(false, false))
        .with_fallback(s.clone());

    let strategy = clipboard.copy("  raw text\n").await.unwrap();
    assert_eq!(strategy, CopyStrategy::Fallback);

    let log = s.log.lock().unwrap();
    assert_eq!(log.copied, vec!["  raw text\n".to_string()]);
    assert!(log.mounted.is_empty());
    assert_eq!(log.unmounted, vec![SurfaceId(1)]);
}

#[tokio::test]
async fn failing_writer_falls_back() {
    let s = FakeSurface::default();
    let clipboard = Clipboard::default()
        .with_writer(writer(true, true))
        .with_fallback(s.clone());

    assert_eq!(clipboard.copy("x").await.unwrap(), CopyStrategy::Fallback);
}

#[tokio::test]
async fn failed_fallback_copy_still_unmounts() {
    let s = FakeSurface {
        fail_copy: true,
        ..FakeSurface::default()
    };
    let clipboard = Clipboard::default().with_fallback(s.clone());

    let err = clipboard.copy("x").await.unwrap_err();
    assert!(matches!(err, ClipboardError::Unavailable { .. }));

    let log = s.log.lock().unwrap();
    assert!(log.mounted.is_empty());
    assert_eq!(log.unmounted.len(), 1);
}

#[tokio::test]
async fn failed_mount_reports_unavailable() {
    let s = FakeSurface {
        fail_mount: true,
        ..FakeSurface::default()
    };
    let clipboard = Clipboard::default()
        .with_writer(writer(true, true))
        .with_fallback(s.clone());

    let err = clipboard.copy("x").await.unwrap_err();
    match err {
        ClipboardError::Unavailable { primary, fallback } => {
            assert!(primary.contains("permission denied"));
            assert!(fallback.contains("not supported"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(s.log.lock().unwrap().unmounted.is_empty());
}

#[tokio::test]
async fn no_strategies_is_unavailable() {
    let err = Clipboard::unsupported().copy("x").await.unwrap_err();
    assert!(matches!(err, ClipboardError::Unavailable { .. }));
}

#[test]
fn temp_surface_unmounts_on_drop() {
    let s = FakeSurface::default();
    {
        let temp = TempSurface::mount(&s, "abc").unwrap();
        assert_eq!(temp.id(), SurfaceId(1));
        assert_eq!(s.log.lock().unwrap().mounted.len(), 1);
    }
    let log = s.log.lock().unwrap();
    assert!(log.mounted.is_empty());
    assert_eq!(log.unmounted, vec![SurfaceId(1)]);
}
