//! Token kinds and token values produced by the scanner.

use rlox_core::text::TextSpan;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// The closed set of lexical categories a token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

/// The reserved-word table: exact spelling to keyword kind, case-sensitive.
/// Built once, read-only afterwards; safe to share across scanner instances.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut keywords = FxHashMap::default();
    keywords.insert("and", TokenKind::And);
    keywords.insert("class", TokenKind::Class);
    keywords.insert("else", TokenKind::Else);
    keywords.insert("false", TokenKind::False);
    keywords.insert("fun", TokenKind::Fun);
    keywords.insert("for", TokenKind::For);
    keywords.insert("if", TokenKind::If);
    keywords.insert("nil", TokenKind::Nil);
    keywords.insert("or", TokenKind::Or);
    keywords.insert("print", TokenKind::Print);
    keywords.insert("return", TokenKind::Return);
    keywords.insert("super", TokenKind::Super);
    keywords.insert("this", TokenKind::This);
    keywords.insert("true", TokenKind::True);
    keywords.insert("var", TokenKind::Var);
    keywords.insert("while", TokenKind::While);
    keywords
});

impl TokenKind {
    /// Look up a reserved word. Returns `None` for ordinary identifiers.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        KEYWORDS.get(text).copied()
    }

    /// Whether this kind is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

/// A decoded literal value attached to string and number tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(value) => write!(f, "{}", value),
            Literal::String(value) => write!(f, "{}", value),
        }
    }
}

/// One classified unit of lexical output. Tokens are immutable snapshots;
/// the scanner never revisits one after emitting it.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source text consumed for this token. Empty only for `Eof`.
    pub lexeme: String,
    /// The decoded literal value, for string and number tokens.
    pub literal: Option<Literal>,
    /// The 1-based line where this token was emitted.
    pub line: u32,
    /// Character-position bounds of the lexeme in the source.
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, line: u32, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme,
            literal: None,
            line,
            span,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Whether this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// Displays as "Kind lexeme" with the decoded literal appended when present,
// e.g. `Number 3.14 3.14` or `String "hi" hi`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        if let Some(ref literal) = self.literal {
            write!(f, " {}", literal)?;
        }
        Ok(())
    }
}
