//! Scanning position over an immutable source buffer.
//!
//! `position` is a byte offset into the source and always sits on a
//! `char` boundary. `line` and `column` are 1-based: `\n` starts a new
//! line and every other character, tabs and `\r` included, moves one
//! column to the right.

use crate::lexer::{LexError, validate_source};
use crate::token::TextSpan;

/// Immutable capture of a cursor's state, used to backtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    position: usize,
    line: usize,
    column: usize,
}

impl Snapshot {
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }
}

/// Mutable scanning position that borrows the source for its lifetime.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    source: &'a str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor at the start of `source`.
    ///
    /// # Errors
    ///
    /// Returns `LexError` when `source` is empty or whitespace-only.
    pub fn new(source: &'a str) -> Result<Self, LexError> {
        validate_source(source)?;
        Ok(Self::over(source))
    }

    /// Cursor over already validated input.
    pub(crate) const fn over(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    #[must_use]
    pub const fn source(&self) -> &'a str {
        self.source
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Unconsumed tail of the source.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Character under the cursor, or `'\0'` past the end.
    #[must_use]
    pub fn current(&self) -> char {
        self.peek_at(0)
    }

    /// Character just after the current one, or `'\0'`.
    #[must_use]
    pub fn peek(&self) -> char {
        self.peek_at(1)
    }

    /// Character `offset` positions ahead; `peek_at(0)` is `current()`.
    #[must_use]
    pub fn peek_at(&self, offset: usize) -> char {
        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Whether the unconsumed input starts with `literal`.
    #[must_use]
    pub fn matches(&self, literal: &str) -> bool {
        self.remaining().starts_with(literal)
    }

    /// Consume one character. No-op at end of input.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.remaining().chars().next()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consume up to `count` characters, stopping early at end of input.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume characters until the byte offset `target` is reached.
    pub(crate) fn advance_to(&mut self, target: usize) {
        while self.position < target && self.advance().is_some() {}
    }

    /// Consume characters while `pred` holds.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.current()) {
            self.advance();
        }
    }

    /// Source text between two byte offsets, or `""` when out of range.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }

    #[must_use]
    pub fn span_text(&self, span: TextSpan) -> &'a str {
        span.slice(self.source)
    }

    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Return to a previously captured state. Other snapshots stay valid.
    pub const fn restore(&mut self, snapshot: Snapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
