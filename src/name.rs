//! Qualified object names and the `CREATE` statements that declare them.

use std::fmt;

use serde::Serialize;

use crate::parser::{ParseResult, Parser, ParserContext};
use crate::token::TokenKind;

/// `name` or `schema.name`, with identifier folding applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    pub schema: Option<String>,
    pub name: String,
}

impl QualifiedName {
    #[must_use]
    pub fn new(schema: Option<&str>, name: &str) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.schema {
            Some(schema) => write!(f, "{schema}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Strip the surrounding `"` of a quoted identifier and collapse `""`.
///
/// An unterminated identifier keeps everything after the opening quote.
#[must_use]
pub fn unquote_identifier(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.strip_prefix('"').unwrap_or(text).chars().peekable();
    while let Some(c) = chars.next() {
        if c != '"' {
            out.push(c);
        } else if chars.next_if_eq(&'"').is_some() {
            out.push('"');
        } else {
            break;
        }
    }
    out
}

/// Parses `ident`, `"Quoted"` or `schema.ident`.
///
/// Unquoted parts, keywords included, fold to lower case. Leading trivia
/// and trivia around the dot are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedNameParser;

impl QualifiedNameParser {
    fn part(context: &mut ParserContext<'_>) -> ParseResult<String> {
        let token = context.current();
        match token.kind {
            TokenKind::Identifier | TokenKind::Keyword => {
                context.advance();
                Ok(token.text().to_lowercase())
            }
            TokenKind::QuotedIdentifier => {
                context.advance();
                Ok(unquote_identifier(token.text()))
            }
            _ => Err(context.unexpected("identifier")),
        }
    }
}

impl Parser<QualifiedName> for QualifiedNameParser {
    fn parse(&self, context: &mut ParserContext<'_>) -> ParseResult<QualifiedName> {
        context.skip_trivia();
        let first = Self::part(context)?;

        let after_first = context.save_position();
        context.skip_trivia();
        if context.match_kind(TokenKind::Dot) {
            context.skip_trivia();
            let name = Self::part(context)?;
            return Ok(QualifiedName {
                schema: Some(first),
                name,
            });
        }

        context.restore_position(after_first);
        Ok(QualifiedName {
            schema: None,
            name: first,
        })
    }
}

/// Object kinds whose names `declared_names` reports.
const OBJECT_KEYWORDS: &[&str] = &[
    "TABLE",
    "VIEW",
    "FUNCTION",
    "PROCEDURE",
    "TYPE",
    "DOMAIN",
    "INDEX",
    "SEQUENCE",
    "TRIGGER",
    "SCHEMA",
    "EXTENSION",
];

/// Words allowed between `CREATE` and the object keyword.
const CREATE_MODIFIERS: &[&str] = &[
    "OR",
    "REPLACE",
    "UNIQUE",
    "TEMP",
    "TEMPORARY",
    "UNLOGGED",
    "MATERIALIZED",
    "GLOBAL",
    "LOCAL",
    "CONSTRAINT",
    "RECURSIVE",
];

/// An object introduced by a `CREATE` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredName {
    /// Upper-case object keyword, e.g. `TABLE`.
    pub object: String,
    pub name: QualifiedName,
    /// Whether the statement carried `IF NOT EXISTS`.
    pub if_not_exists: bool,
    pub line: usize,
    pub column: usize,
}

/// Collect every `CREATE ... <object> [IF NOT EXISTS] <name>` target.
///
/// Statements whose name cannot be parsed are skipped; the context ends
/// at the end of the token stream.
pub fn declared_names(context: &mut ParserContext<'_>) -> Vec<DeclaredName> {
    let mut found = Vec::new();

    loop {
        context.skip_trivia();
        if context.check(TokenKind::EndOfFile) {
            break;
        }
        if !context.match_keyword("CREATE") {
            context.advance();
            continue;
        }

        skip_keywords(context, CREATE_MODIFIERS);
        context.skip_trivia();
        let Some(object) = OBJECT_KEYWORDS
            .iter()
            .find(|kw| context.check_keyword(kw))
            .map(|kw| (*kw).to_string())
        else {
            continue;
        };
        context.advance();

        skip_keywords(context, &["CONCURRENTLY"]);
        let if_not_exists = context
            .attempt(|c| {
                c.skip_trivia();
                c.expect_keyword("IF")?;
                c.skip_trivia();
                c.expect_keyword("NOT")?;
                c.skip_trivia();
                c.expect_keyword("EXISTS")
            })
            .is_ok();

        context.skip_trivia();
        let at = context.current();
        if let Ok(name) = context.attempt(|c| QualifiedNameParser.parse(c)) {
            found.push(DeclaredName {
                object,
                name,
                if_not_exists,
                line: at.line,
                column: at.column,
            });
        }
    }

    found
}

fn skip_keywords(context: &mut ParserContext<'_>, keywords: &[&str]) {
    loop {
        context.skip_trivia();
        if !keywords.iter().any(|kw| context.match_keyword(kw)) {
            break;
        }
    }
}
