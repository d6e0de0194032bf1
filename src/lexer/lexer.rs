use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::ErrorKind, Span, MK_ERROR_TOKEN, MK_TOKEN};

use super::tokens::{
    is_keyword, Token, TokenKind, EOF_LEXEME, UNTERMINATED_COMMENT, UNTERMINATED_STRING,
};

lazy_static! {
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").expect("valid number pattern");
    static ref SYMBOL_PATTERN: Regex =
        Regex::new("^[a-zA-Z][a-zA-Z0-9_]*").expect("valid symbol pattern");
}

/// Position and line state of one scan over one source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    /// Byte offset of the next unread character.
    pub pos: usize,
    /// 1-based line of the next unread character.
    pub line: u32,
}

impl ScanCursor {
    pub fn new() -> Self {
        ScanCursor { pos: 0, line: 1 }
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans the token starting at `cursor` and advances the cursor past it.
///
/// Whitespace and comments before the token are consumed in the same call.
/// Lexical errors never stop the scan: they come back as tokens with
/// `error` set, and the cursor always moves forward unless the input is
/// exhausted, in which case an `EndOfInput` token is returned on every call.
pub fn next_token(source: &str, cursor: &mut ScanCursor) -> Token {
    let token = scan(source, cursor);

    match token.error {
        Some(error) => debug!(
            line = token.line,
            lexeme = %token.text,
            error = ?error,
            "lexical error"
        ),
        None => trace!(kind = %token.kind, lexeme = %token.text, line = token.line, "token"),
    }

    token
}

fn scan(source: &str, cursor: &mut ScanCursor) -> Token {
    loop {
        skip_whitespace(source, cursor);

        let remaining = &source[cursor.pos..];

        if remaining.starts_with("//") {
            cursor.pos += remaining.find('\n').unwrap_or(remaining.len());
            continue;
        }

        if remaining.starts_with("/*") {
            let (start, line) = (cursor.pos, cursor.line);

            if !skip_block_comment(source, cursor) {
                return MK_ERROR_TOKEN!(UNTERMINATED_COMMENT, line, Span::new(start, cursor.pos));
            }
            continue;
        }

        break;
    }

    let start = cursor.pos;
    let Some(c) = source[start..].chars().next() else {
        return MK_TOKEN!(
            TokenKind::EndOfInput,
            String::from(EOF_LEXEME),
            cursor.line,
            None,
            Span::new(start, start)
        );
    };

    match c {
        '0'..='9' => number(source, cursor),
        c if c.is_ascii_alphabetic() => symbol(source, cursor),
        '+' | '-' | '=' => single_char(TokenKind::Operator, c, cursor),
        '"' => string(source, cursor),
        ';' => single_char(TokenKind::Delimiter, c, cursor),
        _ => {
            cursor.pos += c.len_utf8();
            MK_ERROR_TOKEN!(c.to_string(), cursor.line, Span::new(start, cursor.pos))
        }
    }
}

fn skip_whitespace(source: &str, cursor: &mut ScanCursor) {
    for b in source[cursor.pos..].bytes() {
        match b {
            b'\n' => cursor.line += 1,
            b' ' | b'\t' => {}
            _ => break,
        }
        cursor.pos += 1;
    }
}

/// Returns `false` when the input ends before `*/`; the cursor is then at
/// the end of the source.
fn skip_block_comment(source: &str, cursor: &mut ScanCursor) -> bool {
    let body = &source[cursor.pos + 2..];

    let (consumed, closed) = match body.find("*/") {
        Some(end) => (&source[cursor.pos..cursor.pos + 2 + end + 2], true),
        None => (&source[cursor.pos..], false),
    };

    cursor.line += consumed.matches('\n').count() as u32;
    cursor.pos += consumed.len();
    closed
}

fn number(source: &str, cursor: &mut ScanCursor) -> Token {
    let start = cursor.pos;
    let matched = NUMBER_PATTERN
        .find(&source[start..])
        .map_or("", |m| m.as_str());
    cursor.pos += matched.len();

    // `123abc` keeps its digits as a Number and flags the glued letters.
    let error = source[cursor.pos..]
        .chars()
        .next()
        .filter(char::is_ascii_alphabetic)
        .map(|_| ErrorKind::InvalidChar);

    MK_TOKEN!(
        TokenKind::Number,
        String::from(matched),
        cursor.line,
        error,
        Span::new(start, cursor.pos)
    )
}

fn symbol(source: &str, cursor: &mut ScanCursor) -> Token {
    let start = cursor.pos;
    let matched = SYMBOL_PATTERN
        .find(&source[start..])
        .map_or("", |m| m.as_str());
    cursor.pos += matched.len();

    let kind = if is_keyword(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    MK_TOKEN!(
        kind,
        String::from(matched),
        cursor.line,
        None,
        Span::new(start, cursor.pos)
    )
}

fn single_char(kind: TokenKind, c: char, cursor: &mut ScanCursor) -> Token {
    let start = cursor.pos;
    cursor.pos += c.len_utf8();

    MK_TOKEN!(
        kind,
        c.to_string(),
        cursor.line,
        None,
        Span::new(start, cursor.pos)
    )
}

fn string(source: &str, cursor: &mut ScanCursor) -> Token {
    let start = cursor.pos;
    let body_start = start + 1;
    let mut text = String::new();
    let mut chars = source[body_start..].char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '"' => {
                cursor.pos = body_start + offset + 1;
                return MK_TOKEN!(
                    TokenKind::StringLiteral,
                    text,
                    cursor.line,
                    None,
                    Span::new(start, cursor.pos)
                );
            }
            // The newline stays unread so the next call counts it.
            '\n' => {
                cursor.pos = body_start + offset;
                return MK_ERROR_TOKEN!(
                    UNTERMINATED_STRING,
                    cursor.line,
                    Span::new(start, cursor.pos)
                );
            }
            '\\' => {
                text.push(ch);
                if let Some(&(_, escaped @ ('"' | '\\'))) = chars.peek() {
                    text.push(escaped);
                    chars.next();
                }
            }
            _ => text.push(ch),
        }
    }

    cursor.pos = source.len();
    MK_ERROR_TOKEN!(UNTERMINATED_STRING, cursor.line, Span::new(start, cursor.pos))
}

/// Owns the cursor of one scan over `source`.
///
/// Iterating yields every token up to and including the single
/// `EndOfInput` token, then stops.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    cursor: ScanCursor,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source,
            cursor: ScanCursor::new(),
            finished: false,
        }
    }

    pub fn next_token(&mut self) -> Token {
        next_token(self.source, &mut self.cursor)
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Restarts the scan from the first character and line 1.
    pub fn reset(&mut self) {
        self.cursor = ScanCursor::new();
        self.finished = false;
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}
