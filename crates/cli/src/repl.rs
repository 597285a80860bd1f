//! Line parser for the interactive editor.

use crafted_workspace::WorkspaceCommand;

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Maps directly onto a workspace operation.
    Workspace(WorkspaceCommand),
    /// Start reading a multi-line replacement for the editor text.
    BeginEdit,
    List,
    Show,
    Status,
    Help,
    Quit,
    Empty,
    /// Known command with bad arguments; carries the usage line.
    Invalid(&'static str),
    Unknown(String),
}

/// Usage lines, printed by `help`.
pub const HELP: &[(&str, &str)] = &[
    ("list", "list templates"),
    ("select <id>", "switch to a template"),
    ("show", "print the highlighted editor text"),
    ("edit", "replace the editor text (end with a lone '.')"),
    ("save", "save the editor text locally"),
    ("copy", "copy the editor text to the clipboard"),
    ("scroll <top> <left>", "scroll the editor"),
    ("status", "print the save status"),
    ("help", "show this help"),
    ("quit", "leave the editor"),
];

/// Parse a single input line.
pub fn parse(line: &str) -> ReplCommand {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return ReplCommand::Empty;
    };
    let args: Vec<&str> = parts.collect();

    match head.to_ascii_lowercase().as_str() {
        "select" | "s" => match args.as_slice() {
            [id] => ReplCommand::Workspace(WorkspaceCommand::Select {
                template_id: (*id).to_string(),
            }),
            _ => ReplCommand::Invalid("select <id>"),
        },
        "edit" | "e" => ReplCommand::BeginEdit,
        "save" => ReplCommand::Workspace(WorkspaceCommand::Save),
        "copy" => ReplCommand::Workspace(WorkspaceCommand::Copy),
        "scroll" => match args.as_slice() {
            [top, left] => match (top.parse(), left.parse()) {
                (Ok(top), Ok(left)) => ReplCommand::Workspace(WorkspaceCommand::Scroll { top, left }),
                _ => ReplCommand::Invalid("scroll <top> <left>"),
            },
            _ => ReplCommand::Invalid("scroll <top> <left>"),
        },
        "list" | "ls" => ReplCommand::List,
        "show" => ReplCommand::Show,
        "status" => ReplCommand::Status,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "/quit" | "/exit" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    }
}

/// Whether `line` ends a multi-line edit block.
pub fn is_block_end(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "."
}
