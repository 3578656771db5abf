//! Language dialects.
//!
//! A dialect supplies everything lexical about the language: which token
//! patterns exist and in what priority, which identifiers are keywords, and
//! how binary operators are layered into precedence levels. The statement
//! grammar itself (`SELECT ... FROM ... WHERE`, `UPDATE ... SET ... WHERE`)
//! is fixed by the parser.

mod extended;
mod sql;

pub use extended::ExtendedDialect;
pub use sql::SqlDialect;

use crate::error::PatternError;
use crate::lexer::ScannerConfig;

/// Trait for dialect-specific lexical and operator configuration.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Token kinds and their regexes, highest priority first.
    ///
    /// The first pattern that matches at a position wins, so multi-character
    /// operators must come before their single-character prefixes and the
    /// identifier pattern after any symbol it could otherwise swallow.
    fn token_patterns(&self) -> &[(&str, &str)];

    /// The token kind whose matches are checked against [`Dialect::keywords`].
    fn keyword_kind(&self) -> &str {
        "ID"
    }

    /// Uppercase words promoted from [`Dialect::keyword_kind`] to their own kind.
    fn keywords(&self) -> &[&str];

    /// Binary operator kinds grouped by level, weakest binding first.
    fn precedence_levels(&self) -> &[&[&str]];

    /// Unary operator kinds allowed in front of a primary.
    ///
    /// A prefix operator binds tighter than every binary level and becomes a
    /// node with its operand as the only child, so `-a * b` is `(* (- a) b)`.
    /// None by default.
    fn prefix_operators(&self) -> &[&str] {
        &[]
    }

    /// Whether input is upper-cased before scanning.
    ///
    /// Folding makes keywords and identifiers case-insensitive. It applies to
    /// the whole line, so string literal contents are upper-cased as well.
    fn fold_case(&self) -> bool {
        true
    }

    /// Builds the scanner configuration for this dialect.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if one of the token patterns is invalid.
    fn scanner_config(&self) -> Result<ScannerConfig, PatternError> {
        let mut config = ScannerConfig::new();
        for (kind, regex) in self.token_patterns() {
            config.add_pattern(*kind, regex)?;
        }
        config.add_keywords(self.keyword_kind(), self.keywords().iter().copied());
        Ok(config)
    }
}
