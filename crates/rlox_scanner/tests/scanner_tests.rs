//! Scanner integration tests.
//!
//! Verifies that the scanner correctly tokenizes Lox constructs and reports
//! lexical errors without aborting the scan.

use rlox_scanner::{Literal, ScanResult, Scanner, TokenKind};

/// Helper: scan source and return the full result.
fn scan(source: &str) -> ScanResult {
    Scanner::new(source).scan_tokens()
}

/// Helper: scan source and return (kind, lexeme) pairs, excluding `Eof`.
fn scan_all(source: &str) -> Vec<(TokenKind, String)> {
    scan(source)
        .tokens
        .into_iter()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

/// Helper: scan source and return the token kinds, excluding `Eof`.
fn scan_kinds(source: &str) -> Vec<TokenKind> {
    scan_all(source).into_iter().map(|(k, _)| k).collect()
}

#[test]
fn test_empty_source() {
    let result = scan("");
    assert_eq!(result.tokens.len(), 1);
    assert!(result.tokens[0].is_eof());
    assert_eq!(result.tokens[0].lexeme, "");
    assert_eq!(result.tokens[0].line, 1);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_whitespace_only() {
    let result = scan("  \t \r\n  \n");
    assert_eq!(result.tokens.len(), 1);
    assert!(result.tokens[0].is_eof());
    assert_eq!(result.tokens[0].line, 3);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_eof_appears_exactly_once() {
    for source in ["", "()", "\"abc", "@@@", "var x = 1;\n"] {
        let result = scan(source);
        let eof_count = result.tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eof_count, 1, "source {:?}", source);
        assert!(result.tokens.last().is_some_and(|t| t.is_eof()));
    }
}

#[test]
fn test_punctuation() {
    let kinds = scan_kinds("( ) { } , . - + ; / *");
    assert_eq!(kinds, vec![
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Slash,
        TokenKind::Star,
    ]);
}

#[test]
fn test_operators_maximal_munch() {
    let kinds = scan_kinds("! != = == < <= > >=");
    assert_eq!(kinds, vec![
        TokenKind::Bang,
        TokenKind::BangEqual,
        TokenKind::Equal,
        TokenKind::EqualEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
        TokenKind::Greater,
        TokenKind::GreaterEqual,
    ]);

    // "!=" is one token, never bang followed by equal.
    let tokens = scan_all("!=");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0], (TokenKind::BangEqual, "!=".to_string()));

    // Separated by whitespace they stay two tokens.
    let kinds = scan_kinds("! =");
    assert_eq!(kinds, vec![TokenKind::Bang, TokenKind::Equal]);
}

#[test]
fn test_identifiers() {
    let tokens = scan_all("foo bar _private _0 snake_case");
    assert_eq!(tokens.len(), 5);
    for (kind, _) in &tokens {
        assert_eq!(*kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].1, "foo");
    assert_eq!(tokens[2].1, "_private");
    assert_eq!(tokens[3].1, "_0");
    assert_eq!(tokens[4].1, "snake_case");
}

#[test]
fn test_keywords() {
    let source = "and or if else for while true false var nil fun return class this super print";
    let kinds = scan_kinds(source);
    assert_eq!(kinds, vec![
        TokenKind::And,
        TokenKind::Or,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Var,
        TokenKind::Nil,
        TokenKind::Fun,
        TokenKind::Return,
        TokenKind::Class,
        TokenKind::This,
        TokenKind::Super,
        TokenKind::Print,
    ]);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let tokens = scan_all("and And AND");
    assert_eq!(tokens[0].0, TokenKind::And);
    assert_eq!(tokens[1].0, TokenKind::Identifier);
    assert_eq!(tokens[2].0, TokenKind::Identifier);
}

#[test]
fn test_keyword_prefix_stays_identifier() {
    let tokens = scan_all("orchid fortune classes");
    for (kind, _) in &tokens {
        assert_eq!(*kind, TokenKind::Identifier);
    }
}

#[test]
fn test_number_literals() {
    let result = scan("42 3.14 0 1234.5");
    let literals: Vec<Option<Literal>> = result
        .tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| t.literal.clone())
        .collect();
    assert_eq!(literals, vec![
        Some(Literal::Number(42.0)),
        Some(Literal::Number(3.14)),
        Some(Literal::Number(0.0)),
        Some(Literal::Number(1234.5)),
    ]);
}

#[test]
fn test_number_stops_before_trailing_dot() {
    let tokens = scan_all("123.");
    assert_eq!(tokens, vec![
        (TokenKind::Number, "123".to_string()),
        (TokenKind::Dot, ".".to_string()),
    ]);

    // Method-call shape on a number literal.
    let kinds = scan_kinds("123.abs");
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier]);
}

#[test]
fn test_no_leading_dot_number() {
    let tokens = scan_all(".5");
    assert_eq!(tokens, vec![
        (TokenKind::Dot, ".".to_string()),
        (TokenKind::Number, "5".to_string()),
    ]);
}

#[test]
fn test_minus_is_not_part_of_number() {
    let kinds = scan_kinds("-7");
    assert_eq!(kinds, vec![TokenKind::Minus, TokenKind::Number]);
}

#[test]
fn test_string_literal() {
    let result = scan(r#""hello""#);
    let token = &result.tokens[0];
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.lexeme, r#""hello""#);
    assert_eq!(token.literal, Some(Literal::String("hello".to_string())));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_string_no_escape_processing() {
    // A literal backslash-n stays two characters; quotes are the only
    // characters stripped.
    let result = scan(r#""a\nb""#);
    let token = &result.tokens[0];
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.literal, Some(Literal::String("a\\nb".to_string())));
}

#[test]
fn test_empty_string_literal() {
    let result = scan(r#""""#);
    let token = &result.tokens[0];
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.lexeme, r#""""#);
    assert_eq!(token.literal, Some(Literal::String(String::new())));
}

#[test]
fn test_multiline_string_reports_closing_line() {
    let result = scan("\"a\nb\" c");
    let string = &result.tokens[0];
    assert_eq!(string.kind, TokenKind::String);
    assert_eq!(string.literal, Some(Literal::String("a\nb".to_string())));
    // The line counter has already advanced past the embedded newline.
    assert_eq!(string.line, 2);
    let ident = &result.tokens[1];
    assert_eq!(ident.kind, TokenKind::Identifier);
    assert_eq!(ident.line, 2);
}

#[test]
fn test_unterminated_string() {
    let result = scan("\"abc");
    assert_eq!(result.tokens.len(), 1);
    assert!(result.tokens[0].is_eof());
    assert_eq!(result.diagnostics.error_count(), 1);
    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.message_text, "Unterminated string.");
    assert_eq!(diag.line, 1);
}

#[test]
fn test_unterminated_string_tracks_embedded_newlines() {
    let result = scan("\"abc\ndef");
    assert_eq!(result.diagnostics.error_count(), 1);
    assert_eq!(result.diagnostics.diagnostics()[0].line, 2);
}

#[test]
fn test_unexpected_character() {
    let result = scan("@");
    assert_eq!(result.tokens.len(), 1);
    assert!(result.tokens[0].is_eof());
    assert_eq!(result.diagnostics.error_count(), 1);
    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.message_text, "Unexpected character '@'.");
}

#[test]
fn test_scan_continues_after_unexpected_character() {
    let result = scan("@1");
    assert_eq!(result.diagnostics.error_count(), 1);
    let tokens: Vec<_> = result.tokens.iter().filter(|t| !t.is_eof()).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1");
}

#[test]
fn test_each_bad_character_reported_once() {
    let result = scan("#$^");
    assert_eq!(result.diagnostics.error_count(), 3);
    assert_eq!(result.tokens.len(), 1);
}

#[test]
fn test_line_comment_skipped() {
    let result = scan("// comment\n1");
    let tokens: Vec<_> = result.tokens.iter().filter(|t| !t.is_eof()).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_comment_at_end_of_input() {
    let result = scan("1 // trailing");
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_comment_is_not_division() {
    let kinds = scan_kinds("6 / 3");
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]);
}

#[test]
fn test_line_tracking() {
    let result = scan("one\ntwo\n\nthree");
    let lines: Vec<u32> = result.tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_lines_monotonically_nondecreasing() {
    let source = "var a = 1;\nvar b = \"two\nlines\";\n// gap\nprint a + b;";
    let result = scan(source);
    let lines: Vec<u32> = result.tokens.iter().map(|t| t.line).collect();
    assert!(lines.windows(2).all(|w| w[0] <= w[1]), "lines {:?}", lines);
}

#[test]
fn test_lexemes_reproducible_from_spans() {
    let source = "class Breakfast < Food {\n  cook() {\n    print \"Eggs, 2.5 minutes\";\n  }\n}";
    let result = scan(source);
    let chars: Vec<char> = source.chars().collect();
    for token in result.tokens.iter().filter(|t| !t.is_eof()) {
        assert!(!token.lexeme.is_empty());
        let sliced: String = chars[token.span.to_range()].iter().collect();
        assert_eq!(sliced, token.lexeme);
    }
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_errors_and_tokens_interleave_deterministically() {
    let first = scan("@ 1 @ 2");
    let second = scan("@ 1 @ 2");
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.diagnostics.error_count(), 2);
    assert_eq!(second.diagnostics.error_count(), 2);
    let kinds: Vec<TokenKind> = first.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn test_full_program() {
    let source = "fun fib(n) {\n  if (n <= 1) return n;\n  return fib(n - 2) + fib(n - 1);\n}\nprint fib(10);";
    let result = scan(source);
    assert!(result.diagnostics.is_empty());
    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![
        TokenKind::Fun,
        TokenKind::Identifier,
        TokenKind::LeftParen,
        TokenKind::Identifier,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::If,
        TokenKind::LeftParen,
        TokenKind::Identifier,
        TokenKind::LessEqual,
        TokenKind::Number,
        TokenKind::RightParen,
        TokenKind::Return,
        TokenKind::Identifier,
        TokenKind::Semicolon,
        TokenKind::Return,
        TokenKind::Identifier,
        TokenKind::LeftParen,
        TokenKind::Identifier,
        TokenKind::Minus,
        TokenKind::Number,
        TokenKind::RightParen,
        TokenKind::Plus,
        TokenKind::Identifier,
        TokenKind::LeftParen,
        TokenKind::Identifier,
        TokenKind::Minus,
        TokenKind::Number,
        TokenKind::RightParen,
        TokenKind::Semicolon,
        TokenKind::RightBrace,
        TokenKind::Print,
        TokenKind::Identifier,
        TokenKind::LeftParen,
        TokenKind::Number,
        TokenKind::RightParen,
        TokenKind::Semicolon,
        TokenKind::Eof,
    ]);
}
