use std::fmt;

use serde::Serialize;

/// Byte range into the original source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub len: usize,
}

impl TextSpan {
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the byte `offset` falls inside the span.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Resolve the span against `source`; out of range yields `""`.
    #[must_use]
    pub fn slice(self, source: &str) -> &str {
        source.get(self.start..self.end()).unwrap_or("")
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Run of spaces, tabs and newlines.
    Whitespace,
    /// `-- ...` up to the end of the line.
    LineComment,
    /// `/* ... */`, possibly nested.
    BlockComment,
    Keyword,
    Identifier,
    /// `"..."` identifier.
    QuotedIdentifier,
    /// `'...'` literal.
    StringLiteral,
    /// `$$...$$` or `$tag$...$tag$`.
    DollarQuotedString,
    NumericLiteral,
    Operator,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,
    /// Zero-length marker closing every token stream.
    EndOfFile,
    /// Character that cannot start any token.
    Unknown,
}

impl TokenKind {
    /// Whitespace and comments.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
    }

    #[must_use]
    pub const fn is_significant(self) -> bool {
        !self.is_trivia()
    }

    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::StringLiteral | Self::DollarQuotedString | Self::NumericLiteral
        )
    }

    #[must_use]
    pub const fn is_identifier(self) -> bool {
        matches!(self, Self::Identifier | Self::QuotedIdentifier)
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::Keyword)
    }

    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Operator)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::QuotedIdentifier => "quoted identifier",
            Self::StringLiteral => "string literal",
            Self::DollarQuotedString => "dollar-quoted string",
            Self::NumericLiteral => "numeric literal",
            Self::Operator => "operator",
            Self::OpenParen => "'('",
            Self::CloseParen => "')'",
            Self::OpenBracket => "'['",
            Self::CloseBracket => "']'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::EndOfFile => "end of input",
            Self::Unknown => "unknown character",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme: kind, location, and a borrowed view of its text.
///
/// The text is never copied out of the source; use
/// [`Token::to_owned_text`] to materialize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: TextSpan,
    pub line: usize,
    pub column: usize,
    text: &'a str,
}

impl<'a> Token<'a> {
    /// Build a token whose text is `span` resolved against `source`.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        span: TextSpan,
        line: usize,
        column: usize,
        source: &'a str,
    ) -> Self {
        Self {
            kind,
            span,
            line,
            column,
            text: span.slice(source),
        }
    }

    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[must_use]
    pub fn to_owned_text(&self) -> String {
        self.text.to_owned()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.span.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[must_use]
    pub const fn is_significant(&self) -> bool {
        self.kind.is_significant()
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    #[must_use]
    pub const fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Whether this is the keyword `keyword`, ignoring ASCII case.
    #[must_use]
    pub fn is_keyword_text(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(keyword)
    }
}
