use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, UNTERMINATED_COMMENT, UNTERMINATED_STRING};

/// Classification attached to a token that did not scan cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidChar,
    // Reserved; the scanner does not produce these.
    InvalidNumber,
    ConsecutiveOperators,
}

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: Option<u32>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: Option<u32>) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// Builds the diagnostic for a token flagged by the scanner, or `None`
    /// if the token is well-formed.
    pub fn from_token(token: &Token) -> Option<Self> {
        let error_impl = match token.error? {
            ErrorKind::InvalidChar => ErrorImpl::InvalidChar {
                lexeme: token.text.clone(),
            },
            ErrorKind::InvalidNumber => ErrorImpl::InvalidNumber {
                lexeme: token.text.clone(),
            },
            ErrorKind::ConsecutiveOperators => ErrorImpl::ConsecutiveOperators {
                lexeme: token.text.clone(),
            },
        };

        Some(Error::new(error_impl, Some(token.line)))
    }

    pub fn get_line(&self) -> Option<u32> {
        self.line
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidChar { .. } => "InvalidChar",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::ConsecutiveOperators { .. } => "ConsecutiveOperators",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidChar { lexeme } if lexeme == UNTERMINATED_STRING => {
                ErrorTip::Suggestion(String::from(
                    "Close the string with `\"` before the end of the line",
                ))
            }
            ErrorImpl::InvalidChar { lexeme } if lexeme == UNTERMINATED_COMMENT => {
                ErrorTip::Suggestion(String::from("Close the block comment with `*/`"))
            }
            ErrorImpl::InvalidChar { lexeme } if lexeme.chars().all(|c| c.is_ascii_digit()) => {
                ErrorTip::Suggestion(format!(
                    "Number `{}` runs into a letter, identifiers cannot start with a digit",
                    lexeme
                ))
            }
            ErrorImpl::InvalidChar { .. } => ErrorTip::None,
            ErrorImpl::InvalidNumber { lexeme } => {
                ErrorTip::Suggestion(format!("`{}` is not a valid number", lexeme))
            }
            ErrorImpl::ConsecutiveOperators { lexeme } => ErrorTip::Suggestion(format!(
                "Put an operand between `{}` and the preceding operator",
                lexeme
            )),
            ErrorImpl::SourceUnreadable { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Lexical Error at line {}: {}", line, self.internal_error),
            None => write!(f, "{}", self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid character '{lexeme}'")]
    InvalidChar { lexeme: String },
    #[error("Invalid number format")]
    InvalidNumber { lexeme: String },
    #[error("Consecutive operators not allowed")]
    ConsecutiveOperators { lexeme: String },
    #[error("failed to read {path:?}: {reason}")]
    SourceUnreadable { path: String, reason: String },
}
