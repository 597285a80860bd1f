//! Terminal clipboard strategies.
//!
//! The primary writer pipes text into a system clipboard program. The
//! fallback stages text on a hidden surface and emits an OSC 52 sequence,
//! which most terminal emulators turn into a clipboard write.

use std::collections::HashMap;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crafted_workspace::{ClipboardError, ClipboardWriter, SelectionSurface, SurfaceId};

/// Clipboard programs probed in order when none is configured.
const KNOWN_PROGRAMS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["pbcopy"],
];

// ── Command writer ──────────────────────────────────────────────────

/// Writes text to the stdin of a clipboard program.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a configured argv. Returns None for an empty list.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    /// Use the configured command, or the first known program found on PATH.
    pub fn detect(configured: Option<&[String]>) -> Option<Self> {
        if let Some(argv) = configured {
            return Self::from_argv(argv);
        }
        KNOWN_PROGRAMS
            .iter()
            .map(|argv| {
                let args = argv[1..].iter().map(|a| a.to_string()).collect();
                Self::new(argv[0], args)
            })
            .find(|writer| writer.is_available())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardWriter for CommandClipboard {
    fn is_available(&self) -> bool {
        find_program(&self.program)
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Failed(format!("{}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                drop(stdin);
                // Reap the child before reporting the write error.
                if let Err(wait_err) = child.wait().await {
                    debug!(program = %self.program, error = %wait_err, "failed to reap clipboard program");
                }
                return Err(ClipboardError::Failed(format!("{}: {e}", self.program)));
            }
            // Dropping stdin closes the pipe so the program sees EOF.
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::Failed(format!("{}: {e}", self.program)))?;
        if !status.success() {
            return Err(ClipboardError::Failed(format!("{} exited with {status}", self.program)));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Whether `program` is a path to a file or a file on PATH.
fn find_program(program: &str) -> bool {
    if program.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(program).is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(program).is_file()))
        .unwrap_or(false)
}

// ── OSC 52 surface ──────────────────────────────────────────────────

/// Hidden staging area whose selection is copied with an OSC 52 escape.
pub struct Osc52Surface {
    sink: Mutex<Box<dyn Write + Send>>,
    interactive: bool,
    staged: Mutex<HashMap<u64, String>>,
    next_id: AtomicU64,
}

impl Osc52Surface {
    /// Surface writing to stdout; copies fail unless stdout is a terminal.
    pub fn stdout() -> Self {
        let interactive = io::stdout().is_terminal();
        Self::with_sink(Box::new(io::stdout()), interactive)
    }

    pub fn with_sink(sink: Box<dyn Write + Send>, interactive: bool) -> Self {
        Self {
            sink: Mutex::new(sink),
            interactive,
            staged: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of surfaces currently mounted.
    pub fn mounted(&self) -> usize {
        self.staged.lock().map(|s| s.len()).unwrap_or(0)
    }
}

/// OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

impl SelectionSurface for Osc52Surface {
    fn mount(&self, text: &str) -> Result<SurfaceId, ClipboardError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.staged
            .lock()
            .map_err(|_| ClipboardError::Failed("surface lock poisoned".into()))?
            .insert(id, text.to_string());
        debug!(id, bytes = text.len(), "mounted osc52 surface");
        Ok(SurfaceId(id))
    }

    fn copy_selection(&self, id: SurfaceId) -> Result<(), ClipboardError> {
        if !self.interactive {
            return Err(ClipboardError::NotSupported);
        }
        let sequence = {
            let staged = self
                .staged
                .lock()
                .map_err(|_| ClipboardError::Failed("surface lock poisoned".into()))?;
            let text = staged
                .get(&id.0)
                .ok_or_else(|| ClipboardError::Failed(format!("surface {} not mounted", id.0)))?;
            osc52_sequence(text)
        };
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| ClipboardError::Failed("sink lock poisoned".into()))?;
        sink.write_all(sequence.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|e| ClipboardError::Failed(e.to_string()))
    }

    fn unmount(&self, id: SurfaceId) {
        if let Ok(mut staged) = self.staged.lock() {
            staged.remove(&id.0);
        }
        debug!(id = id.0, "unmounted osc52 surface");
    }
}
