use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::{errors::errors::ErrorKind, Span};

/// Lexeme carried by every end-of-input token.
pub const EOF_LEXEME: &str = "EOF";
/// Lexeme carried by a string literal that hit a newline or the end of input.
pub const UNTERMINATED_STRING: &str = "Unterminated string";
/// Lexeme carried by a block comment that was never closed.
pub const UNTERMINATED_COMMENT: &str = "Unterminated comment";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("repeat");
        set.insert("until");
        set
    };
}

pub fn is_keyword(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Operator,
    Keyword,
    Identifier,
    StringLiteral,
    Delimiter,
    EndOfInput,
    Error,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Error => "ERROR",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub error: Option<ErrorKind>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.text, self.line)
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns `true` when no meaningful token can follow this one.
    ///
    /// An unclosed block comment swallows the rest of the input, so a
    /// consumer should stop at it just as it stops at end of input.
    pub fn is_terminal(&self) -> bool {
        self.is_eof() || (self.kind == TokenKind::Error && self.text == UNTERMINATED_COMMENT)
    }

    /// Decodes the escape sequences of a string literal lexeme.
    ///
    /// The scanner keeps `\"` and `\\` exactly as written; this is the
    /// conversion a later phase applies when it needs the literal's value.
    /// Unknown escapes and a trailing lone backslash are kept verbatim.
    pub fn decoded_text(&self) -> String {
        let mut result = String::with_capacity(self.text.len());
        let mut chars = self.text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '\\' {
                result.push(ch);
                continue;
            }

            match chars.peek() {
                Some('"') => result.push('"'),
                Some('\\') => result.push('\\'),
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('0') => result.push('\0'),
                _ => {
                    result.push(ch);
                    continue;
                }
            }
            chars.next();
        }

        result
    }
}
