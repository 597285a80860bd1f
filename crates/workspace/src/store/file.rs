//! JSON-file-backed override store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::OverrideStore;

/// Override store persisted as a single JSON object file.
///
/// The whole map is loaded on open and rewritten atomically (temp file then
/// rename) on every `set`. Write failures are logged; the in-memory value is
/// kept so the session continues with the edit.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(entries) => {
                    info!(path = %path.display(), overrides = entries.len(), "loaded override store");
                    entries
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "override store is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "override store not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read override store");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries).map_err(io::Error::other)?;

        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("overrides.json");
        let tmp_path = self.path.with_file_name(format!(".{}.tmp", file_name));
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl OverrideStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        match self.flush() {
            Ok(()) => debug!(key = %key, path = %self.path.display(), "override written"),
            Err(e) => warn!(key = %key, path = %self.path.display(), error = %e, "failed to write override store"),
        }
    }
}
