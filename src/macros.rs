//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR_TOKEN!` - Creates a Token flagged with an `InvalidChar` error

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's lexeme
/// * `$line` - The 1-based line the token starts on
/// * `$error` - The optional ErrorKind
/// * `$span` - The consumed byte range
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, None, Span::new(0, 2));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $line:expr, $error:expr, $span:expr) => {
        Token {
            kind: $kind,
            text: $text,
            line: $line,
            error: $error,
            span: $span,
        }
    };
}

/// Creates an `Error` token carrying `ErrorKind::InvalidChar`.
#[macro_export]
macro_rules! MK_ERROR_TOKEN {
    ($text:expr, $line:expr, $span:expr) => {
        $crate::MK_TOKEN!(
            TokenKind::Error,
            String::from($text),
            $line,
            Some($crate::errors::errors::ErrorKind::InvalidChar),
            $span
        )
    };
}
