//! Error types for scanning and parsing.

use thiserror::Error;

use crate::lexer::Position;

/// A failure while turning an input line into a tree.
///
/// Both variants are fatal for the parse that produced them: no partial tree
/// is returned and the scanner does not try to resynchronize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No registered token pattern matches at the scan position.
    #[error("Unexpected character '{character}' at line {line}, column {column}")]
    Lex {
        /// The character the scanner could not classify.
        character: char,
        /// 1-based line number.
        line: usize,
        /// 0-based column within the line.
        column: usize,
    },

    /// The token stream does not fit the grammar.
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        /// What was expected and what was found instead.
        message: String,
        /// 1-based line number.
        line: usize,
        /// 0-based column within the line.
        column: usize,
    },
}

impl ParseError {
    /// Creates a lexical error for `character` at `position`.
    #[must_use]
    pub const fn lex(character: char, position: Position) -> Self {
        Self::Lex {
            character,
            line: position.line,
            column: position.column,
        }
    }

    /// Creates a syntax error at `position`.
    #[must_use]
    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        Self::Syntax {
            message: message.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// Returns the 1-based line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex { line, .. } | Self::Syntax { line, .. } => *line,
        }
    }

    /// Returns the 0-based column of the error.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Lex { column, .. } | Self::Syntax { column, .. } => *column,
        }
    }

    /// Returns where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line(), self.column())
    }

    /// Returns true for errors raised by the scanner.
    #[must_use]
    pub const fn is_lex(&self) -> bool {
        matches!(self, Self::Lex { .. })
    }

    /// Returns true for errors raised by the grammar.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

/// Errors raised while building a scanner configuration.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regular expression for a token kind did not compile.
    #[error("invalid pattern for token kind '{kind}': {source}")]
    InvalidRegex {
        /// The token kind being registered.
        kind: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A pattern was registered without a kind tag.
    #[error("token kind must not be empty")]
    EmptyKind,
}

/// Result type for parse operations.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;
