#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Half-open byte range `[start, end)` of the source consumed for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the text of that line (including its
/// newline, if any) and the byte column within it.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// One-line listing of a token, or its diagnostic when it carries an error.
pub fn format_token(token: &Token) -> String {
    if let Some(error) = Error::from_token(token) {
        return error.to_string();
    }

    format!(
        "Token: {} | Lexeme: '{}' | Line: {}",
        token.kind, token.text, token.line
    )
}

pub fn display_error(error: &Error, token: &Token, source: &str, file: &str) -> String {
    /*
        Error: InvalidChar
        -> demo.mc
           |
         2 | x = @;
           | ----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, token.span.start) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();

    (&string[start..], start)
}
