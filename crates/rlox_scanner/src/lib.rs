//! rlox_scanner: Lexer/tokenizer for Lox source code.
//!
//! Converts source text into a materialized token sequence with:
//! - Single-character punctuation and one-or-two-character operators
//! - Number and string literals
//! - Identifier and keyword recognition
//! - Line-comment skipping and line tracking for diagnostics
//!
//! Lexical errors are reported to a per-scan diagnostic collection; scanning
//! always runs to the end of the source.

mod char_codes;
mod scanner;
mod token;

pub use scanner::{ScanResult, Scanner};
pub use token::{Literal, Token, TokenKind};
