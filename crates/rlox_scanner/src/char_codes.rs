//! Character constants and classification helpers used by the scanner.

#![allow(dead_code)]

pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const TAB: char = '\t';
pub const SPACE: char = ' ';
pub const DOUBLE_QUOTE: char = '"';
pub const DOT: char = '.';
pub const SLASH: char = '/';
pub const EQUALS: char = '=';
pub const UNDERSCORE: char = '_';

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character can start an identifier. Identifiers are ASCII-only.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == UNDERSCORE
}

/// Check if a character can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || is_digit(ch)
}

/// Check if a character is whitespace the scanner skips without emitting
/// anything (line feeds are handled separately for line tracking).
#[inline]
pub fn is_white_space_single_line(ch: char) -> bool {
    matches!(ch, SPACE | TAB | CARRIAGE_RETURN)
}
