//! Line-oriented YAML tokenizer.
//!
//! Handles the subset found in Sigma-style rules: mappings (including
//! `Field|modifier` keys), sequences, quoted and plain scalars, numbers,
//! booleans, block scalar indicators and comments. Malformed input is never
//! rejected; unrecognized text is emitted as plain.

use super::{Span, TokenKind};

pub(super) fn highlight_line(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let body = line.trim_start();
    push(&mut spans, TokenKind::Plain, &line[..line.len() - body.len()]);
    highlight_node(body, &mut spans);
    spans
}

fn push(spans: &mut Vec<Span>, kind: TokenKind, text: &str) {
    if !text.is_empty() {
        spans.push(Span {
            kind,
            text: text.to_string(),
        });
    }
}

fn highlight_node(mut rest: &str, spans: &mut Vec<Span>) {
    // Sequence markers, possibly nested ("- - item").
    loop {
        if rest == "-" {
            push(spans, TokenKind::Punctuation, rest);
            return;
        }
        if rest.starts_with("- ") {
            let after = &rest[1..];
            let trimmed = after.trim_start();
            push(spans, TokenKind::Punctuation, &rest[..1]);
            push(spans, TokenKind::Plain, &after[..after.len() - trimmed.len()]);
            rest = trimmed;
            continue;
        }
        break;
    }

    if rest.starts_with('#') {
        push(spans, TokenKind::Comment, rest);
        return;
    }

    match find_key_colon(rest) {
        Some(colon) => {
            push(spans, TokenKind::Key, &rest[..colon]);
            push(spans, TokenKind::Punctuation, ":");
            highlight_value(&rest[colon + 1..], spans);
        }
        None => highlight_value(rest, spans),
    }
}

/// Byte index of the `:` ending a mapping key, ignoring quoted text and
/// colons not followed by whitespace (URLs, times).
fn find_key_colon(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut prev_ws = false;
    let mut chars = s.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '#' if prev_ws => return None,
                ':' => {
                    let ends_key = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
                    if ends_key && idx > 0 {
                        return Some(idx);
                    }
                }
                _ => {}
            },
        }
        prev_ws = c.is_whitespace();
    }
    None
}

fn highlight_value(s: &str, spans: &mut Vec<Span>) {
    let trimmed = s.trim_start();
    push(spans, TokenKind::Plain, &s[..s.len() - trimmed.len()]);
    if trimmed.is_empty() {
        return;
    }
    if trimmed.starts_with('#') {
        push(spans, TokenKind::Comment, trimmed);
        return;
    }

    let (scalar, comment) = match find_comment(trimmed) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };
    let core = scalar.trim_end();
    push(spans, classify(core), core);
    push(spans, TokenKind::Plain, &scalar[core.len()..]);
    push(spans, TokenKind::Comment, comment);
}

/// Byte index of a trailing ` #` comment outside quotes.
fn find_comment(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut prev_ws = false;
    for (idx, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' if idx == 0 => quote = Some(c),
                '#' if prev_ws => return Some(idx),
                _ => {}
            },
        }
        prev_ws = c.is_whitespace();
    }
    None
}

fn classify(scalar: &str) -> TokenKind {
    if scalar.starts_with('"') || scalar.starts_with('\'') {
        return TokenKind::String;
    }
    if matches!(scalar, "|" | "|-" | "|+" | ">" | ">-" | ">+") {
        return TokenKind::Punctuation;
    }
    if is_number(scalar) {
        return TokenKind::Number;
    }
    match scalar.to_ascii_lowercase().as_str() {
        "true" | "false" | "null" | "~" => TokenKind::Literal,
        _ => TokenKind::Plain,
    }
}

fn is_number(scalar: &str) -> bool {
    if let Some(hex) = scalar.strip_prefix("0x") {
        return !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    scalar.chars().any(|c| c.is_ascii_digit())
        && scalar
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_'))
        && scalar.replace('_', "").parse::<f64>().is_ok()
}
