//! Scanner configuration: ordered token patterns and keyword sets.

use std::collections::{HashMap, HashSet};

use super::TokenPattern;
use crate::error::PatternError;

/// The patterns and keywords a [`Scanner`](super::Scanner) classifies text with.
///
/// Pattern order is priority order. At any position the first pattern that
/// matches wins, even if a later one would match more text, so an operator
/// that is a prefix of another (`=` and `==`) must be added after it.
#[derive(Debug, Clone, Default)]
pub struct ScannerConfig {
    patterns: Vec<TokenPattern>,
    /// Base kind -> literal texts promoted to their own kind.
    keywords: HashMap<String, HashSet<String>>,
}

impl ScannerConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `regex` and appends it with the lowest priority so far.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the kind is empty or the regex is invalid.
    pub fn add_pattern(
        &mut self,
        kind: impl Into<String>,
        regex: &str,
    ) -> Result<&mut Self, PatternError> {
        self.patterns.push(TokenPattern::new(kind, regex)?);
        Ok(self)
    }

    /// Declares keywords for tokens of `kind`.
    ///
    /// Text matched by a `kind` pattern that equals one of `words` is
    /// reclassified so that its kind is the text itself. Calls accumulate.
    pub fn add_keywords<I, S>(&mut self, kind: impl Into<String>, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords
            .entry(kind.into())
            .or_default()
            .extend(words.into_iter().map(Into::into));
        self
    }

    /// The registered patterns, highest priority first.
    #[must_use]
    pub fn patterns(&self) -> &[TokenPattern] {
        &self.patterns
    }

    /// Returns true if `text`, matched as `kind`, is a declared keyword.
    #[must_use]
    pub fn is_keyword(&self, kind: &str, text: &str) -> bool {
        self.keywords
            .get(kind)
            .is_some_and(|words| words.contains(text))
    }
}
