#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Diagnostic, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod stack;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: u32, end: u32, file: &Rc<String>) -> Self {
        Span {
            start: Position(start, Rc::clone(file)),
            end: Position(end, Rc::clone(file)),
        }
    }

    /// Span over byte offsets `start..end`; offsets past `u32::MAX` saturate.
    pub fn from_offsets(start: usize, end: usize, file: &Rc<String>) -> Self {
        Span::new(to_offset(start), to_offset(end), file)
    }

    /// Zero-length span sitting at `position`.
    pub fn empty_at(position: &Position) -> Self {
        Span {
            start: position.clone(),
            end: position.clone(),
        }
    }

    pub fn len(&self) -> u32 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span running from the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

pub fn to_offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

/// Splits `text` into the parts before, under and after `span`.
///
/// Out-of-range spans are clamped to the text; a span that does not fall on
/// character boundaries leaves the whole text in the prefix.
pub fn split_at_span<'a>(text: &'a str, span: &Span) -> (&'a str, &'a str, &'a str) {
    let start = (span.start.0 as usize).min(text.len());
    let end = (span.end.0 as usize).clamp(start, text.len());

    match (text.get(..start), text.get(start..end), text.get(end..)) {
        (Some(prefix), Some(error), Some(suffix)) => (prefix, error, suffix),
        _ => (text, "", ""),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    DarkRed,
    DarkGray,
}

impl Color {
    fn ansi_code(self) -> &'static str {
        match self {
            Color::DarkRed => "\x1B[31m",
            Color::DarkGray => "\x1B[90m",
        }
    }
}

/// Wraps `text` in ANSI escapes for `color`, resetting afterwards.
pub fn paint(text: &str, color: Color) -> String {
    format!("{}{}\x1B[0m", color.ansi_code(), text)
}

/// Finds the line containing byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line text (including its newline)
/// and the offset of `position` within that line. Positions past the end
/// of the text resolve to the end of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        last_line = Some((line_number, line, start));
        start = end;
        line_number += 1;
    }

    match last_line {
        Some((number, line, line_start)) if !line.ends_with('\n') => {
            (number, line.to_string(), pos - line_start)
        }
        _ => (line_number, String::new(), 0),
    }
}


/// Renders a diagnostic against the text it was reported on.
///
/// ```text
/// Error: message (tip)
/// -> shell
///   |
/// 1 | 1 + )
///   | ----^
/// ```
pub fn format_error(error: &Diagnostic, text: &str) -> String {
    let span = error.get_span();
    let (line, line_text, line_pos) = get_line_at_position(text, span.start.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.message()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.message(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", span.start.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let dashes = line_pos.saturating_sub(removed_whitespace);
    let carets = (span.len() as usize).max(1);

    out.push_str(&format!(
        "{:>padding$} {}{}",
        "|",
        "-".repeat(dashes),
        "^".repeat(carets)
    ));

    out
}

pub fn display_error(error: &Diagnostic, text: &str) {
    println!("{}", paint(&format_error(error, text), Color::DarkRed));

    let (prefix, error_text, suffix) = split_at_span(text, error.get_span());
    println!("    {}{}{}", prefix, paint(error_text, Color::DarkRed), suffix);
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
