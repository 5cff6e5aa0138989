//! Character classes used by the scanners.
//!
//! Every predicate is total: control characters and NUL classify as
//! `false` everywhere.

/// Space, tab, carriage return or line feed.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// First character of an unquoted identifier or keyword.
///
/// Accepts `_` and any alphabetic character, including non-Latin
/// scripts. Digits and `$` may only appear after the first character.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Any character after the first in an unquoted identifier.
#[must_use]
pub fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || is_digit(c) || c == '$'
}

/// ASCII `0`-`9` only.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may form an operator.
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '/' | '%' | '^' | '<' | '>' | '=' | '!' | '|' | '&' | '~' | '#'
    )
}

/// Characters that lex as their own dedicated token kind.
#[must_use]
pub const fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | ';' | ',' | '.')
}
