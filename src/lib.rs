//! PostgreSQL-dialect SQL lexer and token navigation.
//!
//! Turns SQL source into a lossless stream of classified tokens
//! (keywords, identifiers, literals, operators, punctuation and
//! trivia) whose text borrows from the original buffer, and provides a
//! backtracking [`ParserContext`] for parsers built on top of it.
//!
//! # Quick start
//!
//! ## Tokenize
//!
//! ```
//! use pgsql_lex::{TokenKind, significant, tokenize};
//!
//! let sql = "SELECT id FROM users WHERE name = 'O''Brien';";
//! let tokens = tokenize(sql).unwrap();
//! let kinds: Vec<_> = significant(&tokens).map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Keyword);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);
//! ```
//!
//! ## Parse with a context
//!
//! ```
//! use pgsql_lex::{ParserContext, QualifiedName, QualifiedNameParser, TokenKind};
//!
//! let mut ctx = ParserContext::from_source("CREATE TABLE app.\"Users\" ()").unwrap();
//! ctx.expect_keyword("CREATE").unwrap();
//! ctx.skip_trivia();
//! ctx.expect_keyword("TABLE").unwrap();
//! let name = ctx.parse_with(&QualifiedNameParser).unwrap();
//! assert_eq!(name, QualifiedName::new(Some("app"), "Users"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod chars;
pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod name;
pub mod parser;
pub mod scanner;
pub mod token;

pub use cursor::{Snapshot, TextCursor};
pub use keywords::{is_data_type, is_keyword};
pub use lexer::{LexError, LexErrorKind, Lexer, concat_text, significant, tokenize};
pub use name::{DeclaredName, QualifiedName, QualifiedNameParser, declared_names};
pub use parser::{ParseError, ParseErrorKind, ParseResult, Parser, ParserContext};
pub use scanner::Scan;
pub use token::{TextSpan, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Tokenize `source` and run `parser` over it in one step.
pub fn parse_str<T>(source: &str, parser: &impl Parser<T>) -> Result<T, Error> {
    let mut context = ParserContext::from_source(source)?;
    Ok(parser.parse(&mut context)?)
}
