//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Numbers, identifiers and the `if`/`repeat`/`until` keywords
//! - Operators, delimiters and string literals
//! - Line tracking for diagnostics
//! - Comments and whitespace skipping
//! - Recovering from lexical errors without stopping the scan

pub mod lexer;
pub mod tokens;
