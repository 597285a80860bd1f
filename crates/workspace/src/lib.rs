//! Rule workspace: the editing session behind the detection rule editor.
//!
//! This crate provides:
//! - `RuleWorkspace`, the controller owning template selection, editor text and save status
//! - `OverrideStore` trait with in-memory and JSON-file backends
//! - Clipboard strategies (async primary writer, temporary-surface fallback)
//! - `Highlighter` trait with a YAML tokenizer for the highlighted overlay
//! - Surface model for selector controls, scroll sync and the status badge
//! - `WorkspaceCommand` dispatch, one command per UI event

pub mod clipboard;
pub mod command;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod state;
pub mod store;
pub mod surface;

pub use clipboard::{Clipboard, ClipboardError, ClipboardWriter, CopyStrategy, SelectionSurface, SurfaceId};
pub use command::WorkspaceCommand;
pub use controller::{RuleWorkspace, WorkspaceOptions};
pub use error::WorkspaceError;
pub use highlight::{Highlighted, Highlighter, Span, SyntaxHighlighter, TokenKind};
pub use state::{SaveStatus, WorkspaceState};
pub use store::{storage_key, FileStore, MemoryStore, OverrideStore, DEFAULT_NAMESPACE};
pub use surface::{ScrollOffset, ScrollPair, SelectorBar, SelectorControl, StatusIndicator, StatusTone};
