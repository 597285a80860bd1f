//! Syntax highlighting for the overlay rendered above the editor.
//!
//! Highlighters are pure: the same text and language always produce the same
//! [`Highlighted`] value. Concatenating a line's spans reproduces that line
//! exactly, so the overlay can be laid over the raw text.

mod yaml;

use serde::Serialize;

/// Class of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Plain,
    Comment,
    Key,
    Punctuation,
    String,
    Number,
    Literal,
}

/// A run of text sharing one token class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: TokenKind,
    pub text: String,
}

/// Styled rendering of a text, tagged with the language it was rendered as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    pub language: String,
    pub lines: Vec<Vec<Span>>,
}

impl Highlighted {
    /// Unstyled rendering: one plain span per non-empty line.
    pub fn plain(text: &str, language: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    Vec::new()
                } else {
                    vec![Span {
                        kind: TokenKind::Plain,
                        text: line.to_string(),
                    }]
                }
            })
            .collect();
        Self {
            language: language.to_string(),
            lines,
        }
    }

    /// The raw text this rendering was produced from.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders raw text for a language tag.
pub trait Highlighter: Send {
    fn highlight(&self, text: &str, language: &str) -> Highlighted;
}

/// Built-in highlighter. Knows YAML; anything else renders plain.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxHighlighter;

impl SyntaxHighlighter {
    pub fn supports(language: &str) -> bool {
        matches!(language, "yaml" | "yml")
    }
}

impl Highlighter for SyntaxHighlighter {
    fn highlight(&self, text: &str, language: &str) -> Highlighted {
        if !Self::supports(language) {
            return Highlighted::plain(text, language);
        }
        Highlighted {
            language: language.to_string(),
            lines: text.split('\n').map(yaml::highlight_line).collect(),
        }
    }
}
