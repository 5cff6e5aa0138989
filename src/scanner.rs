//! One scanner per multi-character token category.
//!
//! Each scanner expects the cursor at the first character of its
//! lexeme, advances past it, and reports the kind and byte length.
//! Scanners never fail: unterminated input is consumed to the end.

use tracing::trace;

use crate::chars::{is_digit, is_identifier_part, is_identifier_start};
use crate::cursor::TextCursor;
use crate::token::TokenKind;

/// Outcome of a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan {
    pub kind: TokenKind,
    /// Bytes consumed.
    pub len: usize,
}

/// Multi-character operators, longest first so the first hit wins.
const OPERATORS: &[&str] = &[
    "!~~*", "!~~", "!~*", "~~*", "->>", "#>>", "<->", "<<=", ">>=", "<<|", "|>>", "&<|", "|&>",
    "||/", "-|-", "@@@", "<>", "!=", ">=", "<=", "::", ":=", "=>", "||", "|/", "&&", "&<", "&>",
    "@>", "<@", "->", "#>", "#-", "?|", "?&", "?-", "?#", "~~", "~*", "!~", "<<", ">>", "@@", "##",
    "!!",
];

/// The longest table operator at the cursor, if any.
///
/// An operator never extends into `--` or `/*`, so a candidate that
/// would swallow the start of a comment is skipped.
pub(crate) fn longest_operator(cursor: &TextCursor<'_>) -> Option<&'static str> {
    let rest = cursor.remaining();
    OPERATORS.iter().copied().find(|op| {
        rest.strip_prefix(op)
            .is_some_and(|tail| !runs_into_comment(op, tail))
    })
}

fn runs_into_comment(op: &str, tail: &str) -> bool {
    op.contains("--")
        || op.contains("/*")
        || (op.ends_with('-') && tail.starts_with('-'))
        || (op.ends_with('/') && tail.starts_with('*'))
}

fn finish(cursor: &TextCursor<'_>, start: usize, kind: TokenKind) -> Scan {
    Scan {
        kind,
        len: cursor.position() - start,
    }
}

/// `-- ...` up to, not including, the next `\n`.
pub fn scan_line_comment(cursor: &mut TextCursor<'_>) -> Scan {
    let start = cursor.position();
    cursor.advance_while(|c| c != '\n');
    finish(cursor, start, TokenKind::LineComment)
}

/// `/* ... */` with nesting.
pub fn scan_block_comment(cursor: &mut TextCursor<'_>) -> Scan {
    let start = cursor.position();
    let (line, column) = (cursor.line(), cursor.column());
    cursor.advance_by(2);
    let mut depth = 1usize;

    while !cursor.is_at_end() {
        if cursor.matches("/*") {
            cursor.advance_by(2);
            depth += 1;
        } else if cursor.matches("*/") {
            cursor.advance_by(2);
            depth -= 1;
            if depth == 0 {
                return finish(cursor, start, TokenKind::BlockComment);
            }
        } else {
            cursor.advance();
        }
    }

    trace!(line, column, depth, "unterminated block comment");
    finish(cursor, start, TokenKind::BlockComment)
}

/// Integer, decimal, exponent, or `0x`/`0b`/`0o` radix literal.
pub fn scan_number(cursor: &mut TextCursor<'_>) -> Scan {
    let start = cursor.position();

    if cursor.current() == '0' {
        let radix = match cursor.peek() {
            'x' | 'X' => Some(16),
            'b' | 'B' => Some(2),
            'o' | 'O' => Some(8),
            _ => None,
        };
        if let Some(radix) = radix
            && cursor.peek_at(2).is_digit(radix)
        {
            cursor.advance_by(2);
            cursor.advance_while(|c| c.is_digit(radix));
            return finish(cursor, start, TokenKind::NumericLiteral);
        }
    }

    cursor.advance_while(is_digit);

    if cursor.current() == '.' && is_digit(cursor.peek()) {
        cursor.advance();
        cursor.advance_while(is_digit);
    }

    if matches!(cursor.current(), 'e' | 'E') {
        let signed = matches!(cursor.peek(), '+' | '-');
        let first_digit = if signed { cursor.peek_at(2) } else { cursor.peek() };
        if is_digit(first_digit) {
            cursor.advance_by(if signed { 2 } else { 1 });
            cursor.advance_while(is_digit);
        }
    }

    finish(cursor, start, TokenKind::NumericLiteral)
}

/// Longest table operator, else a single character.
pub fn scan_operator(cursor: &mut TextCursor<'_>) -> Scan {
    let start = cursor.position();
    let width = longest_operator(cursor).map_or(1, |op| op.chars().count());
    cursor.advance_by(width);
    finish(cursor, start, TokenKind::Operator)
}

/// `'...'` where `''` is an escaped quote.
pub fn scan_string_literal(cursor: &mut TextCursor<'_>) -> Scan {
    scan_quoted(cursor, '\'', TokenKind::StringLiteral)
}

/// `"..."` where `""` is an escaped quote.
pub fn scan_quoted_identifier(cursor: &mut TextCursor<'_>) -> Scan {
    scan_quoted(cursor, '"', TokenKind::QuotedIdentifier)
}

fn scan_quoted(cursor: &mut TextCursor<'_>, quote: char, kind: TokenKind) -> Scan {
    let start = cursor.position();
    let (line, column) = (cursor.line(), cursor.column());
    cursor.advance();

    while let Some(ch) = cursor.advance() {
        if ch == quote {
            if cursor.current() == quote {
                cursor.advance();
            } else {
                return finish(cursor, start, kind);
            }
        }
    }

    trace!(line, column, %kind, "unterminated quoted lexeme");
    finish(cursor, start, kind)
}

/// `$$...$$` or `$tag$...$tag$`.
///
/// A `$` that does not open a valid delimiter is returned as a
/// one-character `Operator`, so positional parameters like `$1` lex as
/// `$` followed by a number.
pub fn scan_dollar_quoted_string(cursor: &mut TextCursor<'_>) -> Scan {
    let start = cursor.position();
    let snapshot = cursor.snapshot();
    cursor.advance();

    if is_identifier_start(cursor.current()) {
        cursor.advance_while(|c| c != '$' && is_identifier_part(c));
    }

    if cursor.current() != '$' {
        trace!(
            line = snapshot.line(),
            column = snapshot.column(),
            "stray '$' lexed as operator"
        );
        cursor.restore(snapshot);
        cursor.advance();
        return finish(cursor, start, TokenKind::Operator);
    }

    cursor.advance();
    let delimiter = cursor.slice(start, cursor.position());

    if let Some(offset) = cursor.remaining().find(delimiter) {
        let target = cursor.position() + offset + delimiter.len();
        cursor.advance_to(target);
    } else {
        trace!(
            line = snapshot.line(),
            column = snapshot.column(),
            delimiter,
            "unterminated dollar-quoted string"
        );
        cursor.advance_to(cursor.source().len());
    }

    finish(cursor, start, TokenKind::DollarQuotedString)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_with(f: fn(&mut TextCursor<'_>) -> Scan, input: &str) -> (Scan, usize) {
        let mut cursor = TextCursor::new(input).expect("cursor");
        let scan = f(&mut cursor);
        (scan, cursor.position())
    }

    #[test]
    fn operator_table_is_longest_first() {
        for (i, op) in OPERATORS.iter().enumerate() {
            for later in &OPERATORS[i + 1..] {
                assert!(
                    !later.starts_with(op) || later.len() <= op.len(),
                    "{later} is shadowed by {op}"
                );
            }
        }
    }

    #[test]
    fn operator_stops_before_comment() {
        for (input, len) in [
            ("||/* c */", 2),
            ("#-- c", 1),
            ("-|-- c", 1),
            ("#-x", 2),
            ("||/ 2", 3),
        ] {
            let (scan, _) = scan_with(scan_operator, input);
            assert_eq!(scan.kind, TokenKind::Operator, "{input}");
            assert_eq!(scan.len, len, "{input}");
        }
    }

    #[test]
    fn line_comment_stops_before_newline() {
        let (scan, pos) = scan_with(scan_line_comment, "-- hi\nSELECT");
        assert_eq!(scan.kind, TokenKind::LineComment);
        assert_eq!(scan.len, 5);
        assert_eq!(pos, 5);
    }

    #[test]
    fn nested_block_comment() {
        let input = "/* outer /* inner */ still outer */X";
        let mut cursor = TextCursor::new(input).expect("cursor");
        let scan = scan_block_comment(&mut cursor);
        assert_eq!(scan.kind, TokenKind::BlockComment);
        assert_eq!(scan.len, 35);
        assert_eq!(cursor.current(), 'X');
    }

    #[test]
    fn unterminated_block_comment_runs_to_end() {
        let (scan, pos) = scan_with(scan_block_comment, "/* a /* b */ c");
        assert_eq!(scan.len, 14);
        assert_eq!(pos, 14);
    }

    #[test]
    fn numbers() {
        for input in ["42", "123.456", "1.5e10", "2E-5", "3.14E+2", "0x1A2B", "0b101010", "0o177"] {
            let (scan, _) = scan_with(scan_number, input);
            assert_eq!(scan.kind, TokenKind::NumericLiteral, "{input}");
            assert_eq!(scan.len, input.len(), "{input}");
        }
    }

    #[test]
    fn number_stops_at_non_digit_suffix() {
        assert_eq!(scan_with(scan_number, "12.x").0.len, 2);
        assert_eq!(scan_with(scan_number, "1e").0.len, 1);
        assert_eq!(scan_with(scan_number, "1e+").0.len, 1);
        assert_eq!(scan_with(scan_number, "0xZZ").0.len, 1);
        assert_eq!(scan_with(scan_number, "0b2").0.len, 1);
        assert_eq!(scan_with(scan_number, "7::int").0.len, 1);
    }

    #[test]
    fn operators_prefer_longest() {
        for (input, len) in [
            ("<> 1", 2),
            (">=1", 2),
            ("::text", 2),
            ("@> x", 2),
            ("<@ x", 2),
            ("!~~ x", 3),
            ("!~~* x", 4),
            ("->> 'a'", 3),
            ("+1", 1),
            ("=", 1),
        ] {
            let (scan, _) = scan_with(scan_operator, input);
            assert_eq!(scan.kind, TokenKind::Operator, "{input}");
            assert_eq!(scan.len, len, "{input}");
        }
    }

    #[test]
    fn string_literal_with_doubled_quote() {
        let (scan, _) = scan_with(scan_string_literal, "'don''t'");
        assert_eq!(scan.kind, TokenKind::StringLiteral);
        assert_eq!(scan.len, 8);
    }

    #[test]
    fn string_literal_stops_at_closing_quote() {
        let (scan, pos) = scan_with(scan_string_literal, "'a' || 'b'");
        assert_eq!(scan.len, 3);
        assert_eq!(pos, 3);
    }

    #[test]
    fn unterminated_string_runs_to_end() {
        let (scan, _) = scan_with(scan_string_literal, "'abc");
        assert_eq!(scan.kind, TokenKind::StringLiteral);
        assert_eq!(scan.len, 4);
    }

    #[test]
    fn dollar_quote_with_tag() {
        let (scan, _) = scan_with(scan_dollar_quoted_string, "$tag$hello$tag$");
        assert_eq!(scan.kind, TokenKind::DollarQuotedString);
        assert_eq!(scan.len, 15);
    }

    #[test]
    fn dollar_quote_ignores_other_tags() {
        let input = "$a$ x $b$ y $a$;";
        let (scan, _) = scan_with(scan_dollar_quoted_string, input);
        assert_eq!(scan.len, input.len() - 1);
    }

    #[test]
    fn dollar_quote_empty_tag_with_quotes_and_newlines() {
        let input = "$$\nBEGIN\n  RETURN 'it''s';\nEND;\n$$ LANGUAGE plpgsql";
        let mut cursor = TextCursor::new(input).expect("cursor");
        let scan = scan_dollar_quoted_string(&mut cursor);
        assert_eq!(scan.kind, TokenKind::DollarQuotedString);
        assert_eq!(cursor.remaining(), " LANGUAGE plpgsql");
        assert_eq!(cursor.line(), 5);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn stray_dollar_is_operator() {
        let (scan, pos) = scan_with(scan_dollar_quoted_string, "$");
        assert_eq!(scan.kind, TokenKind::Operator);
        assert_eq!(scan.len, 1);
        assert_eq!(pos, 1);
    }

    #[test]
    fn positional_parameter_is_operator() {
        let (scan, pos) = scan_with(scan_dollar_quoted_string, "$1");
        assert_eq!(scan.kind, TokenKind::Operator);
        assert_eq!(pos, 1);
    }

    #[test]
    fn unclosed_tag_is_operator() {
        let (scan, pos) = scan_with(scan_dollar_quoted_string, "$tag hello");
        assert_eq!(scan.kind, TokenKind::Operator);
        assert_eq!(scan.len, 1);
        assert_eq!(pos, 1);
    }

    #[test]
    fn unterminated_dollar_body_runs_to_end() {
        let (scan, _) = scan_with(scan_dollar_quoted_string, "$fn$ body");
        assert_eq!(scan.kind, TokenKind::DollarQuotedString);
        assert_eq!(scan.len, 9);
    }

    #[test]
    fn quoted_identifier_with_symbols() {
        let (scan, _) = scan_with(scan_quoted_identifier, "\"my-col!@#\" x");
        assert_eq!(scan.kind, TokenKind::QuotedIdentifier);
        assert_eq!(scan.len, 11);
    }

    #[test]
    fn quoted_identifier_doubled_quote() {
        let (scan, _) = scan_with(scan_quoted_identifier, "\"a\"\"b\"");
        assert_eq!(scan.len, 6);
    }

    #[test]
    fn unterminated_quoted_identifier() {
        let (scan, _) = scan_with(scan_quoted_identifier, "\"abc");
        assert_eq!(scan.kind, TokenKind::QuotedIdentifier);
        assert_eq!(scan.len, 4);
    }
}
