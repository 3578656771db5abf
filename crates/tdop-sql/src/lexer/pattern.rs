//! Named regular expressions that classify raw text.

use regex::Regex;

use crate::error::PatternError;

/// A token kind together with the regex that recognizes it.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    kind: String,
    /// Anchored with `\A` so it only matches at the offset it is given.
    regex: Regex,
}

impl TokenPattern {
    /// Compiles `pattern` for tokens of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyKind`] for an empty kind and
    /// [`PatternError::InvalidRegex`] if the regex does not compile.
    pub fn new(kind: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        let kind = kind.into();
        if kind.is_empty() {
            return Err(PatternError::EmptyKind);
        }
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
            PatternError::InvalidRegex {
                kind: kind.clone(),
                source,
            }
        })?;
        Ok(Self { kind, regex })
    }

    /// The kind assigned to text this pattern matches.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Tries to match starting exactly at byte `offset` of `input`.
    ///
    /// Returns the end offset of the match. Empty matches are treated as no
    /// match so that a pattern can never stall the scanner.
    #[must_use]
    pub fn match_at(&self, input: &str, offset: usize) -> Option<usize> {
        let rest = input.get(offset..)?;
        self.regex
            .find(rest)
            .filter(|m| !m.is_empty())
            .map(|m| offset + m.end())
    }
}
