use std::fmt;

use tracing::{debug, trace};

use crate::chars::{
    is_digit, is_identifier_part, is_identifier_start, is_operator_char, is_whitespace,
};
use crate::cursor::TextCursor;
use crate::keywords::is_keyword;
use crate::scanner::{self, Scan};
use crate::token::{TextSpan, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Source has no characters at all.
    EmptyInput,
    /// Source contains only whitespace.
    BlankInput,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "source text is empty"),
            Self::BlankInput => write!(f, "source text contains only whitespace"),
        }
    }
}

/// Error produced when the lexer refuses its input.
///
/// Malformed lexemes never produce an error; only unusable source does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid source: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
}

pub(crate) fn validate_source(source: &str) -> Result<(), LexError> {
    if source.is_empty() {
        return Err(LexError {
            kind: LexErrorKind::EmptyInput,
        });
    }
    if source.chars().all(is_whitespace) {
        return Err(LexError {
            kind: LexErrorKind::BlankInput,
        });
    }
    Ok(())
}

/// Tokenize a SQL source string into a sequence of tokens.
///
/// The result is lossless: every character of `source` belongs to exactly
/// one token, trivia included, and the list always ends with a
/// zero-length `EndOfFile` token.
///
/// # Errors
///
/// Returns `LexError` when `source` is empty or whitespace-only.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Ok(Lexer::new(source)?.tokenize())
}

/// Iterate over the tokens a parser cares about, skipping trivia.
pub fn significant<'t, 'a>(tokens: &'t [Token<'a>]) -> impl Iterator<Item = &'t Token<'a>> {
    tokens.iter().filter(|t| t.is_significant())
}

/// Rebuild source text from a token list, ignoring the `EndOfFile` marker.
#[must_use]
pub fn concat_text(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::EndOfFile)
        .map(Token::text)
        .collect()
}

/// PostgreSQL-dialect lexer over a single source buffer.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    /// # Errors
    ///
    /// Returns `LexError` when `source` is empty or whitespace-only.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        validate_source(source)?;
        Ok(Self { source })
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    /// Produce the full ordered token list, ending in `EndOfFile`.
    #[must_use]
    pub fn tokenize(&self) -> Vec<Token<'a>> {
        let mut cursor = TextCursor::over(self.source);
        let mut tokens = Vec::new();

        while !cursor.is_at_end() {
            let start = cursor.snapshot();
            let scan = Self::next_lexeme(&mut cursor);
            tokens.push(Token::new(
                scan.kind,
                TextSpan::new(start.position(), scan.len),
                start.line(),
                start.column(),
                self.source,
            ));
        }

        tokens.push(Token::new(
            TokenKind::EndOfFile,
            TextSpan::new(cursor.position(), 0),
            cursor.line(),
            cursor.column(),
            self.source,
        ));

        debug!(
            bytes = self.source.len(),
            tokens = tokens.len(),
            lines = cursor.line(),
            "tokenized source"
        );
        tokens
    }

    fn next_lexeme(cursor: &mut TextCursor<'_>) -> Scan {
        let ch = cursor.current();

        if is_whitespace(ch) {
            return Self::run(cursor, is_whitespace, TokenKind::Whitespace);
        }
        if cursor.matches("--") {
            return scanner::scan_line_comment(cursor);
        }
        if cursor.matches("/*") {
            return scanner::scan_block_comment(cursor);
        }
        if is_digit(ch) {
            return scanner::scan_number(cursor);
        }

        match ch {
            '\'' => return scanner::scan_string_literal(cursor),
            '$' => return scanner::scan_dollar_quoted_string(cursor),
            '"' => return scanner::scan_quoted_identifier(cursor),
            _ => {}
        }

        if is_identifier_start(ch) {
            return Self::word(cursor);
        }

        let punctuation = match ch {
            '(' => Some(TokenKind::OpenParen),
            ')' => Some(TokenKind::CloseParen),
            '[' => Some(TokenKind::OpenBracket),
            ']' => Some(TokenKind::CloseBracket),
            ';' => Some(TokenKind::Semicolon),
            ',' => Some(TokenKind::Comma),
            '.' => Some(TokenKind::Dot),
            _ => None,
        };
        if let Some(kind) = punctuation {
            return Self::single(cursor, kind);
        }

        if is_operator_char(ch) || scanner::longest_operator(cursor).is_some() {
            return scanner::scan_operator(cursor);
        }

        trace!(
            line = cursor.line(),
            column = cursor.column(),
            character = ?ch,
            "unrecognized character"
        );
        Self::single(cursor, TokenKind::Unknown)
    }

    fn run(cursor: &mut TextCursor<'_>, pred: fn(char) -> bool, kind: TokenKind) -> Scan {
        let start = cursor.position();
        cursor.advance_while(pred);
        Scan {
            kind,
            len: cursor.position() - start,
        }
    }

    fn single(cursor: &mut TextCursor<'_>, kind: TokenKind) -> Scan {
        let start = cursor.position();
        cursor.advance();
        Scan {
            kind,
            len: cursor.position() - start,
        }
    }

    fn word(cursor: &mut TextCursor<'_>) -> Scan {
        let start = cursor.position();
        let scan = Self::run(cursor, is_identifier_part, TokenKind::Identifier);
        if is_keyword(cursor.slice(start, cursor.position())) {
            Scan {
                kind: TokenKind::Keyword,
                ..scan
            }
        } else {
            scan
        }
    }
}
