//! Error types and diagnostics for the scanner.
//!
//! This module defines:
//!
//! - The error classification carried on tokens (`ErrorKind`)
//! - Diagnostic errors built from erroneous tokens, with line information
//! - Error formatting and display functionality
//! - Helpful suggestions for fixing lexical errors

pub mod errors;
