//! Parser context navigation and downstream parser contract.

use pgsql_lex::{
    Error, LexErrorKind, ParseError, ParseErrorKind, ParseResult, Parser, ParserContext,
    QualifiedName, QualifiedNameParser, TokenKind, parse_str,
};

/// `CREATE TYPE name AS ENUM ('a', 'b', ...)`
#[derive(Debug, PartialEq, Eq)]
struct EnumType {
    name: QualifiedName,
    labels: Vec<String>,
}

struct EnumTypeParser;

impl Parser<EnumType> for EnumTypeParser {
    fn parse(&self, ctx: &mut ParserContext<'_>) -> ParseResult<EnumType> {
        for keyword in ["CREATE", "TYPE"] {
            ctx.skip_trivia();
            ctx.expect_keyword(keyword)?;
        }
        let name = ctx.parse_with(&QualifiedNameParser)?;
        for keyword in ["AS", "ENUM"] {
            ctx.skip_trivia();
            ctx.expect_keyword(keyword)?;
        }
        ctx.skip_trivia();
        ctx.expect(TokenKind::OpenParen)?;

        let mut labels = Vec::new();
        loop {
            ctx.skip_trivia();
            let label = ctx.expect(TokenKind::StringLiteral)?;
            let text = label.text();
            labels.push(text[1..text.len() - 1].replace("''", "'"));
            ctx.skip_trivia();
            if !ctx.match_kind(TokenKind::Comma) {
                break;
            }
        }
        ctx.expect(TokenKind::CloseParen)?;
        Ok(EnumType { name, labels })
    }
}

/// A single literal of any kind, as owned text.
struct LiteralParser;

impl Parser<String> for LiteralParser {
    fn parse(&self, ctx: &mut ParserContext<'_>) -> ParseResult<String> {
        ctx.skip_trivia();
        let token = ctx.current();
        if token.is_literal() {
            ctx.advance();
            Ok(token.to_owned_text())
        } else {
            Err(ctx.unexpected("literal"))
        }
    }
}

/// Refuses everything, with a custom diagnostic.
struct Reject;

impl Parser<()> for Reject {
    fn parse(&self, ctx: &mut ParserContext<'_>) -> ParseResult<()> {
        ctx.advance();
        let token = ctx.current();
        Err(ParseError::at(
            &token,
            ParseErrorKind::Invalid("not supported".to_string()),
        ))
    }
}

// -----------------------------------------------------------
// Parser implementations.
// -----------------------------------------------------------

#[test]
fn parse_enum_type() {
    let source = "CREATE TYPE app.mood AS ENUM (\n  'sad', 'ok', -- middle\n  'it''s fine'\n);";
    let parsed = parse_str(source, &EnumTypeParser).expect("parse");
    assert_eq!(parsed.name, QualifiedName::new(Some("app"), "mood"));
    assert_eq!(parsed.labels, ["sad", "ok", "it's fine"]);
}

#[test]
fn parse_enum_type_reports_position() {
    let source = "CREATE TYPE mood AS ENUM (\n  'sad',\n  42\n);";
    let err = parse_str(source, &EnumTypeParser).unwrap_err();
    let Error::Parse(err) = err else {
        panic!("expected a parse error");
    };
    assert_eq!((err.line, err.column), (3, 3));
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "string literal".to_string(),
            found: "42".to_string(),
        }
    );
}

#[test]
fn parse_str_lex_error() {
    let err = parse_str("  \n ", &LiteralParser).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(ref lex) if lex.kind == LexErrorKind::BlankInput
    ));
    assert_eq!(err.to_string(), "invalid source: source text contains only whitespace");
}

#[test]
fn parse_custom_diagnostic() {
    let err = parse_str("a b", &Reject).unwrap_err();
    assert_eq!(err.to_string(), "not supported at line 1, column 2");
}

#[test]
fn parse_literals_of_every_kind() {
    for source in ["'x'", "$$x$$", "1.5", "0xFF"] {
        assert_eq!(parse_str(source, &LiteralParser).expect("literal"), source);
    }
    assert!(parse_str("x", &LiteralParser).is_err());
}

// -----------------------------------------------------------
// Backtracking.
// -----------------------------------------------------------

#[test]
fn attempt_alternatives() {
    let mut ctx = ParserContext::from_source("DEFAULT 'none'").expect("tokenize");
    ctx.expect_keyword("DEFAULT").expect("keyword");

    let as_name = ctx.attempt(|c| {
        let name = c.parse_with(&QualifiedNameParser)?;
        c.skip_trivia();
        c.expect(TokenKind::EndOfFile)?;
        Ok(name.to_string())
    });
    assert!(as_name.is_err());
    assert_eq!(ctx.position(), 1);

    let literal = ctx.attempt(|c| c.parse_with(&LiteralParser));
    assert_eq!(literal.expect("literal"), "'none'");
    assert!(ctx.check(TokenKind::EndOfFile));
}

#[test]
fn manual_save_restore() {
    let mut ctx = ParserContext::from_source("SELECT a, b FROM t").expect("tokenize");
    let start = ctx.save_position();
    let mut columns = 0;
    while !ctx.check_keyword("FROM") && !ctx.is_at_end() {
        if ctx.current().is_identifier() {
            columns += 1;
        }
        ctx.advance();
    }
    assert_eq!(columns, 2);
    ctx.restore_position(start);
    assert_eq!(ctx.current_text(), "SELECT");
}

#[test]
fn match_any_and_check() {
    let mut ctx = ParserContext::from_source("[1]").expect("tokenize");
    assert!(ctx.check(TokenKind::OpenBracket));
    assert!(!ctx.match_any(&[TokenKind::OpenParen, TokenKind::Comma]));
    assert!(ctx.match_any(&[TokenKind::OpenParen, TokenKind::OpenBracket]));
    assert!(ctx.match_kind(TokenKind::NumericLiteral));
    assert!(ctx.match_kind(TokenKind::CloseBracket));
    assert!(ctx.match_kind(TokenKind::EndOfFile));
    assert!(ctx.is_at_end());
}

#[test]
fn context_exposes_tokens_and_source() {
    let ctx = ParserContext::from_source("x;").expect("tokenize");
    assert_eq!(ctx.source(), "x;");
    assert_eq!(ctx.tokens().len(), 3);
    assert_eq!(ctx.remaining().len(), 3);
    let semi = ctx.peek(1);
    assert_eq!(ctx.token_text(&semi), ";");
}
