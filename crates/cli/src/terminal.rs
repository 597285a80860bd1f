use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{self, BufRead, Write};

use crafted_carousel::CarouselPosition;
use crafted_workspace::{RuleWorkspace, SaveStatus, Span, StatusTone, TokenKind};

use crate::repl::{is_block_end, HELP};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const PROMPT: Color = Color::Green;
    const TITLE: Color = Color::Magenta;
    const BADGE: Color = Color::Cyan;
    const ACTIVE: Color = Color::Yellow;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const OK: Color = Color::Green;
    const WARN: Color = Color::Yellow;

    const COMMENT: Color = Color::DarkGrey;
    const KEY: Color = Color::Cyan;
    const PUNCT: Color = Color::Grey;
    const STRING: Color = Color::Green;
    const NUMBER: Color = Color::Magenta;
    const LITERAL: Color = Color::Yellow;
}

fn token_color(kind: TokenKind) -> Option<Color> {
    match kind {
        TokenKind::Plain => None,
        TokenKind::Comment => Some(Colors::COMMENT),
        TokenKind::Key => Some(Colors::KEY),
        TokenKind::Punctuation => Some(Colors::PUNCT),
        TokenKind::String => Some(Colors::STRING),
        TokenKind::Number => Some(Colors::NUMBER),
        TokenKind::Literal => Some(Colors::LITERAL),
    }
}

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Muted => Colors::DIM,
        StatusTone::Ok => Colors::OK,
        StatusTone::Warn => Colors::WARN,
    }
}

/// Manages terminal I/O for the interactive editor.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn print_banner(&self, namespace: &str, store: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::TITLE),
            Print("crafted-cli"),
            ResetColor,
            Print(" - Detection rule workspace\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!("Namespace: {} | Store: {}\n", namespace, store)),
            Print("Type 'help' for commands, 'quit' to end.\n"),
            Print("---\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Read a line of user input with prompt.
    /// Returns None at end of input.
    pub fn read_input(&self, template_id: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::PROMPT),
            Print(format!("{}> ", template_id)),
            ResetColor,
        )?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Read editor text until a lone "." line or end of input.
    pub fn read_block(&self) -> Result<String> {
        self.print_info("Enter the new rule text. End with a line containing only '.'")?;
        read_block_from(io::stdin().lock())
    }

    /// Print selectors, labels, highlighted text and status.
    pub fn render_workspace(&self, workspace: &RuleWorkspace) -> Result<()> {
        self.render_selectors(workspace)?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::TITLE),
            Print(workspace.title()),
            ResetColor,
            Print("  "),
            SetForegroundColor(Colors::BADGE),
            Print(format!("[{}]\n", workspace.context())),
            ResetColor,
        )?;
        self.render_highlighted(workspace)?;
        self.print_status(workspace.status())
    }

    /// Print the template selector bar, the active one marked.
    pub fn render_selectors(&self, workspace: &RuleWorkspace) -> Result<()> {
        let mut stdout = io::stdout();
        for control in workspace.selectors().controls() {
            if control.active {
                execute!(
                    stdout,
                    SetForegroundColor(Colors::ACTIVE),
                    Print(format!("[*{}] ", control.template_id)),
                    ResetColor,
                )?;
            } else {
                execute!(
                    stdout,
                    SetForegroundColor(Colors::DIM),
                    Print(format!("[ {}] ", control.template_id)),
                    ResetColor,
                )?;
            }
        }
        execute!(stdout, Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the highlighted overlay, starting at the synced scroll offset.
    pub fn render_highlighted(&self, workspace: &RuleWorkspace) -> Result<()> {
        let mut stdout = io::stdout();
        let scroll = workspace.overlay_scroll();
        let lines = &workspace.highlighted().lines;
        for (number, spans) in lines.iter().enumerate().skip(scroll.top as usize) {
            execute!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print(format!("{:>4} ", number + 1)),
                ResetColor,
            )?;
            for span in clip_left(spans, scroll.left as usize) {
                match token_color(span.kind) {
                    Some(color) => execute!(
                        stdout,
                        SetForegroundColor(color),
                        Print(&span.text),
                        ResetColor
                    )?,
                    None => execute!(stdout, Print(&span.text))?,
                }
            }
            execute!(stdout, Print("\n"))?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print the status indicator in its tone.
    pub fn print_status(&self, status: SaveStatus) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(tone_color(status.tone())),
            Print(format!("● {}\n", status.label())),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the template listing.
    pub fn print_templates(&self, workspace: &RuleWorkspace) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::TITLE),
            Print("Templates:\n"),
            SetForegroundColor(Colors::DIM),
            Print(format!("{:<2} {:<24} {:<28} {}\n", "", "ID", "CONTEXT", "TITLE")),
            Print(format!("{}\n", "-".repeat(80))),
            ResetColor,
        )?;
        let active = workspace.active_template_id();
        for template in workspace.catalog().iter() {
            let marker = if template.id == active { "*" } else { "" };
            execute!(
                stdout,
                Print(format!(
                    "{:<2} {:<24} {:<28} {}\n",
                    marker, template.id, template.context, template.title
                )),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    pub fn print_help(&self) -> Result<()> {
        let mut stdout = io::stdout();
        for (usage, description) in HELP {
            execute!(
                stdout,
                SetForegroundColor(Colors::PROMPT),
                Print(format!("  {:<22}", usage)),
                ResetColor,
                Print(format!("{}\n", description)),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print one carousel position.
    pub fn print_carousel(&self, position: &CarouselPosition, card_count: usize) -> Result<()> {
        let mut stdout = io::stdout();
        let cards: String = (0..card_count)
            .map(|i| if i == position.index { '■' } else { '□' })
            .collect();
        execute!(
            stdout,
            SetForegroundColor(Colors::BADGE),
            Print(cards),
            ResetColor,
            SetForegroundColor(Colors::DIM),
            Print(format!("  card {} @ {:.0}px\n", position.index + 1, position.offset)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an error message.
    pub fn print_error(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ERROR),
            Print(format!("Error: {}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an info message.
    pub fn print_info(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("{}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}

/// Collect lines until a lone "." or EOF. Line endings are normalized to
/// "\n" and the final newline is dropped.
fn read_block_from(reader: impl BufRead) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_block_end(&line) {
            break;
        }
        lines.push(line.trim_end_matches('\r').to_string());
    }
    Ok(lines.join("\n"))
}

/// Drop the first `columns` characters of a highlighted line.
fn clip_left(spans: &[Span], columns: usize) -> Vec<Span> {
    let mut skip = columns;
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let len = span.text.chars().count();
        if skip >= len {
            skip -= len;
            continue;
        }
        out.push(Span {
            kind: span.kind,
            text: span.text.chars().skip(skip).collect(),
        });
        skip = 0;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(kind: TokenKind, text: &str) -> Span {
        Span {
            kind,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_read_block_stops_at_dot() {
        let input = "title: x\r\nid: y\n.\nignored\n";
        assert_eq!(read_block_from(input.as_bytes()).unwrap(), "title: x\nid: y");
    }

    #[test]
    fn test_read_block_until_eof() {
        assert_eq!(read_block_from("a\nb".as_bytes()).unwrap(), "a\nb");
        assert_eq!(read_block_from(".\n".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_clip_left() {
        let spans = vec![span(TokenKind::Key, "title"), span(TokenKind::Punctuation, ":"), span(TokenKind::Plain, " x")];
        let clipped = clip_left(&spans, 3);
        assert_eq!(clipped[0], span(TokenKind::Key, "le"));
        assert_eq!(clipped.len(), 3);

        let clipped = clip_left(&spans, 6);
        assert_eq!(clipped, vec![span(TokenKind::Plain, " x")]);
        assert!(clip_left(&spans, 100).is_empty());
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(StatusTone::Ok), Colors::OK);
        assert_eq!(tone_color(StatusTone::Warn), Colors::WARN);
        assert_eq!(token_color(TokenKind::Plain), None);
    }
}
