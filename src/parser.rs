use std::fmt;

use tracing::trace;

use crate::lexer::{LexError, tokenize};
use crate::token::{TextSpan, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Expected one thing, found another token.
    UnexpectedToken { expected: String, found: String },
    /// Expected something, ran out of tokens.
    UnexpectedEof { expected: String },
    /// Structurally valid tokens that a parser rejected.
    Invalid(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, got '{found}'")
            }
            Self::UnexpectedEof { expected } => {
                write!(f, "expected {expected}, reached end of input")
            }
            Self::Invalid(message) => f.write_str(message),
        }
    }
}

/// Error produced while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }

    /// Error located at `token`.
    #[must_use]
    pub const fn at(token: &Token<'_>, kind: ParseErrorKind) -> Self {
        Self::new(kind, token.line, token.column)
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds a typed value out of the tokens under a [`ParserContext`].
///
/// Implementations leave the context just past what they consumed on
/// success. On failure the position is unspecified; callers that need
/// to retry use [`ParserContext::attempt`].
pub trait Parser<T> {
    /// # Errors
    ///
    /// Returns `ParseError` when the tokens at the current position do
    /// not form a `T`.
    fn parse(&self, context: &mut ParserContext<'_>) -> ParseResult<T>;
}

/// Backtracking cursor over a finished token list.
///
/// Positions index the token vector, not the source text. Navigation
/// past the end is absorbing: `current` and `peek` then return an
/// `EndOfFile` sentinel and `advance` does nothing.
#[derive(Debug, Clone)]
pub struct ParserContext<'a> {
    source: &'a str,
    tokens: Vec<Token<'a>>,
    position: usize,
    end: Token<'a>,
}

impl<'a> ParserContext<'a> {
    #[must_use]
    pub fn new(source: &'a str, tokens: Vec<Token<'a>>) -> Self {
        let end = match tokens.last() {
            Some(last) if last.kind == TokenKind::EndOfFile => *last,
            Some(last) => {
                let (line, column) = position_after(last);
                Token::new(
                    TokenKind::EndOfFile,
                    TextSpan::new(last.span.end(), 0),
                    line,
                    column,
                    source,
                )
            }
            None => Token::new(
                TokenKind::EndOfFile,
                TextSpan::new(source.len(), 0),
                1,
                1,
                source,
            ),
        };
        Self {
            source,
            tokens,
            position: 0,
            end,
        }
    }

    /// Tokenize `source` and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns `LexError` when `source` is empty or whitespace-only.
    pub fn from_source(source: &'a str) -> Result<Self, LexError> {
        Ok(Self::new(source, tokenize(source)?))
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Tokens from the current position onwards.
    #[must_use]
    pub fn remaining(&self) -> &[Token<'a>] {
        self.tokens.get(self.position..).unwrap_or_default()
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Token at the current position, or the `EndOfFile` sentinel.
    #[must_use]
    pub fn current(&self) -> Token<'a> {
        self.peek(0)
    }

    /// Token `offset` positions ahead; `peek(1)` is the next token.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Token<'a> {
        self.position
            .checked_add(offset)
            .and_then(|i| self.tokens.get(i))
            .copied()
            .unwrap_or(self.end)
    }

    /// Return the current token and move past it.
    pub fn advance(&mut self) -> Token<'a> {
        let token = self.current();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    #[must_use]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consume the current token if it is of `kind`.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is any of `kinds`.
    pub fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn check_keyword(&self, keyword: &str) -> bool {
        self.current().is_keyword_text(keyword)
    }

    pub fn match_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Step over whitespace and comments.
    pub fn skip_trivia(&mut self) {
        while !self.is_at_end() && self.current().is_trivia() {
            self.position += 1;
        }
    }

    /// Source text of the current token.
    #[must_use]
    pub fn current_text(&self) -> &'a str {
        self.token_text(&self.current())
    }

    /// Resolve a token's span against the source.
    #[must_use]
    pub fn token_text(&self, token: &Token<'_>) -> &'a str {
        token.span.slice(self.source)
    }

    #[must_use]
    pub const fn save_position(&self) -> usize {
        self.position
    }

    /// Jump back (or forward) to a saved position, clamped to the end.
    pub fn restore_position(&mut self, position: usize) {
        self.position = position.min(self.tokens.len());
    }

    /// Consume a token of `kind` or fail without moving.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when the current token is of another kind.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'a>> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Consume the keyword `keyword` or fail without moving.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` when the current token is anything else.
    pub fn expect_keyword(&mut self, keyword: &str) -> ParseResult<Token<'a>> {
        if self.check_keyword(keyword) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(keyword))
        }
    }

    /// Error describing the current token as not what was `expected`.
    #[must_use]
    pub fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        let expected = expected.into();
        let kind = if token.kind == TokenKind::EndOfFile {
            ParseErrorKind::UnexpectedEof { expected }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.token_text(&token).to_string(),
            }
        };
        ParseError::at(&token, kind)
    }

    /// Run `f` speculatively, rewinding to the starting position if it fails.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `f`.
    pub fn attempt<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.save_position();
        let result = f(self);
        if let Err(err) = &result {
            trace!(from = self.position, to = saved, error = %err, "backtracking");
            self.restore_position(saved);
        }
        result
    }

    /// Run `parser` at the current position.
    ///
    /// # Errors
    ///
    /// Propagates the parser's error.
    pub fn parse_with<T>(&mut self, parser: &impl Parser<T>) -> ParseResult<T> {
        parser.parse(self)
    }
}

/// Line and column just past the end of `token`.
fn position_after(token: &Token<'_>) -> (usize, usize) {
    let text = token.text();
    match text.rfind('\n') {
        Some(newline) => (
            token.line + text.matches('\n').count(),
            text[newline + 1..].chars().count() + 1,
        ),
        None => (token.line, token.column + text.chars().count()),
    }
}
