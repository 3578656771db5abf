//! Token type produced by the scanner.

use core::fmt;

use super::Position;

/// A classified lexeme.
///
/// The kind is a free-form tag chosen by whoever registered the pattern
/// (`"ID"`, `"INT"`, `"=="`), or the keyword text itself once an identifier
/// has been reclassified (`"SELECT"`). Tokens are immutable; [`Token::rename`]
/// and [`Token::rename_with`] build new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: String,
    text: String,
    position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            position,
        }
    }

    /// The kind tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The matched source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the token starts.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// 1-based line of the token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.position.line
    }

    /// 0-based column of the token.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.position.column
    }

    /// Returns true if the token has the given kind. Text is not compared.
    #[must_use]
    pub fn matches(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Returns true if the token has any of the given kinds.
    #[must_use]
    pub fn matches_any<S: AsRef<str>>(&self, kinds: &[S]) -> bool {
        kinds.iter().any(|kind| self.matches(kind.as_ref()))
    }

    /// Returns a copy of this token with a different kind.
    #[must_use]
    pub fn rename(&self, kind: impl Into<String>) -> Self {
        Self::new(kind, self.text.clone(), self.position)
    }

    /// Returns a copy of this token with a different kind and text.
    #[must_use]
    pub fn rename_with(&self, kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(kind, text, self.position)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
