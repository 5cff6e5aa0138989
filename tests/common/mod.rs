#![allow(dead_code)]

use pgsql_lex::{Token, TokenKind, concat_text, tokenize};

pub fn lex(source: &str) -> Vec<Token<'_>> {
    tokenize(source).expect("tokenize failed")
}

/// Kind and text of every non-trivia token before `EndOfFile`.
pub fn significant(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source)
        .into_iter()
        .filter(|t| t.is_significant() && t.kind != TokenKind::EndOfFile)
        .map(|t| (t.kind, t.text()))
        .collect()
}

pub fn roundtrip(source: &str) {
    let tokens = lex(source);
    let rebuilt = concat_text(&tokens);
    assert_eq!(
        rebuilt, source,
        "round-trip mismatch:\n--- expected ---\n{source}\n--- got ---\n{rebuilt}"
    );
}

/// Every structural invariant a token list must satisfy.
pub fn assert_well_formed(source: &str, tokens: &[Token<'_>]) {
    let last = tokens.last().expect("at least one token");
    assert_eq!(last.kind, TokenKind::EndOfFile);
    assert!(last.is_empty());
    assert_eq!(last.span.start, source.len());
    assert_eq!(
        tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfFile)
            .count(),
        1
    );

    let mut offset = 0;
    for token in &tokens[..tokens.len() - 1] {
        assert_eq!(token.span.start, offset, "gap before {token:?}");
        assert!(!token.is_empty(), "empty token {token:?}");
        assert_eq!(token.text(), token.span.slice(source));
        offset = token.span.end();
    }
    assert_eq!(offset, source.len());
}

/// Line and column of byte `offset`, counted the way the lexer does.
pub fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in source[..offset].chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}
