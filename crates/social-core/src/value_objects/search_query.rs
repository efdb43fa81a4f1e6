//! Search query sanitizer
//!
//! Free text typed by a user becomes an AND-of-tokens expression for the
//! full-text backend: `"Hello, World!! 2024"` becomes `"Hello & World & 2024"`.
//! Only ASCII letters, digits and spaces survive, so no search operator or
//! SQL metacharacter can reach the backend.

use std::fmt;

use crate::error::DomainError;

/// Separator the full-text backend reads as a logical AND
pub const TOKEN_SEPARATOR: &str = " & ";

/// A sanitized full-text search expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    expression: String,
}

impl SearchQuery {
    /// Sanitize raw user input.
    ///
    /// Fails with [`DomainError::MissingSearchQuery`] when the input is absent
    /// or empty before sanitization. Input that sanitizes down to nothing is
    /// accepted and yields an empty expression, which matches no rows.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            None | Some("") => Err(DomainError::MissingSearchQuery),
            Some(raw) => Ok(Self {
                expression: sanitize(raw),
            }),
        }
    }

    /// The `a & b & c` expression handed to the full-text backend
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The individual required tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.expression
            .split(TOKEN_SEPARATOR)
            .filter(|token| !token.is_empty())
    }

    /// True when no token survived sanitization
    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// In-memory approximation of the backend match: every token must occur as
    /// a whole word of `text`, compared case-insensitively. Empty expressions
    /// match nothing.
    pub fn matches_text(&self, text: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let words: Vec<&str> = text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        self.tokens()
            .all(|token| words.iter().any(|word| word.eq_ignore_ascii_case(token)))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

/// Trim, strip everything but `[A-Za-z0-9 ]`, split on whitespace and re-join with `" & "`
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}
