//! The Lox scanner/lexer.
//!
//! Walks the source text once, left to right, and produces a finite token
//! sequence terminated by exactly one `Eof` token. Lexical errors never abort
//! the scan: they are recorded in the scanner's diagnostic collection and
//! scanning resumes at the next unread character.

use crate::char_codes::*;
use crate::token::{Literal, Token, TokenKind};
use rlox_core::text::TextSpan;
use rlox_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// The outcome of a scan: the materialized token sequence and the
/// diagnostics reported along the way. The token sequence is complete even
/// when diagnostics are present; callers decide whether errors are fatal.
#[derive(Debug)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: DiagnosticCollection,
}

/// The scanner converts Lox source text into tokens.
///
/// Cursor state is single-use: `scan_tokens` consumes the scanner, so each
/// instance performs exactly one pass over its source.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Start of the lexeme under construction.
    start: usize,
    /// Position of the next unread character.
    current: usize,
    /// Current 1-based line, advanced on every newline consumed.
    line: u32,
    /// The accumulated output, in source order.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the entire source and return the token sequence together with
    /// any diagnostics. The last token is always `Eof`.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_at_end() {
            // The next lexeme begins where the previous one ended.
            self.start = self.current;
            self.scan_token();
        }

        let end = self.text.len() as u32;
        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            TextSpan::empty(end),
        ));

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Per-lexeme dispatch
    // ========================================================================

    /// Consume one character and classify the lexeme it starts.
    fn scan_token(&mut self) {
        let ch = self.advance();
        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char(EQUALS) {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char(EQUALS) {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char(EQUALS) {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char(EQUALS) {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            SLASH => {
                if self.match_char(SLASH) {
                    // A comment runs to the end of the line. The newline is
                    // left for the main loop so line tracking stays in one
                    // place.
                    while self.peek() != Some(LINE_FEED) && !self.is_at_end() {
                        self.current += 1;
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            DOUBLE_QUOTE => self.scan_string(),

            LINE_FEED => self.line += 1,
            c if is_white_space_single_line(c) => {}

            c if is_digit(c) => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),

            c => self.error(&messages::UNEXPECTED_CHARACTER, &[&c.to_string()]),
        }
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a string literal; the opening quote has been consumed. Strings
    /// may span lines, and no escape sequences are recognized: the literal
    /// value is the text strictly between the quotes.
    fn scan_string(&mut self) {
        while self.peek() != Some(DOUBLE_QUOTE) && !self.is_at_end() {
            if self.peek() == Some(LINE_FEED) {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            self.error(&messages::UNTERMINATED_STRING_LITERAL, &[]);
            return;
        }

        // The closing quote.
        self.current += 1;

        let value = self.chars_to_string(self.start + 1, self.current - 1);
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }

    /// Scan a number literal: a maximal digit run with an optional fraction.
    /// A trailing dot without a following digit is not part of the number.
    fn scan_number(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.current += 1;
        }

        if self.peek() == Some(DOT) && self.peek_next().is_some_and(is_digit) {
            // Consume the '.'
            self.current += 1;
            while self.peek().is_some_and(is_digit) {
                self.current += 1;
            }
        }

        let text = self.chars_to_string(self.start, self.current);
        match text.parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Literal::Number(value)),
            // Unreachable for the digit grammar above, but reported rather
            // than panicking.
            Err(_) => self.error(&messages::INVALID_NUMBER_LITERAL, &[&text]),
        }
    }

    /// Scan an identifier and reclassify it through the keyword table.
    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_part) {
            self.current += 1;
        }

        let text = self.chars_to_string(self.start, self.current);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    /// Whether the whole source has been consumed.
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current >= self.text.len()
    }

    /// Consume and return the next character.
    #[inline]
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Look at the next unread character without consuming it.
    #[inline]
    fn peek(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// Look one character past the next unread character.
    #[inline]
    fn peek_next(&self) -> Option<char> {
        self.text.get(self.current + 1).copied()
    }

    /// Consume the next character only if it matches.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Collect the characters in `[start, end)` into a string.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }

    // ========================================================================
    // Token and diagnostic emission
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind) {
        let token = self.make_token(kind);
        self.tokens.push(token);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let token = self.make_token(kind).with_literal(literal);
        self.tokens.push(token);
    }

    /// Build a token for the current `[start, current)` lexeme. The line is
    /// the counter at emission time, so a multi-line string reports the line
    /// of its closing quote.
    fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.chars_to_string(self.start, self.current);
        let span = TextSpan::from_bounds(self.start as u32, self.current as u32);
        Token::new(kind, lexeme, self.line, span)
    }

    fn error(&mut self, message: &DiagnosticMessage, args: &[&str]) {
        let span = TextSpan::from_bounds(self.start as u32, self.current as u32);
        self.diagnostics
            .add(Diagnostic::at_line(self.line, message, args).with_span(span));
    }
}
