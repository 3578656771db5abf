//! The built-in SQL subset.

use super::Dialect;

const TOKEN_PATTERNS: &[(&str, &str)] = &[
    ("(", r"\("),
    (")", r"\)"),
    ("&&", r"&&"),
    ("||", r"\|\|"),
    ("!=", r"!="),
    ("==", r"=="),
    ("=", r"="),
    ("+", r"\+"),
    ("-", r"-"),
    ("*", r"\*"),
    ("/", r"/"),
    (",", r","),
    ("%", r"%"),
    ("INT", r"[0-9]+"),
    ("ID", r"[a-zA-Z_][a-zA-Z_0-9]*"),
    ("STRING", r"'[^']*'"),
];

const KEYWORDS: &[&str] = &["UPDATE", "SELECT", "FROM", "SET", "WHERE", "OR", "AND"];

const PRECEDENCE_LEVELS: &[&[&str]] = &[
    &["AND", "OR"],
    &["==", "!="],
    &["+", "-"],
    &["*", "/", "%"],
];

/// The SQL subset understood by [`Parser::new`](crate::Parser::new).
///
/// `AND` and `OR` share the weakest level, then equality, then additive and
/// multiplicative operators. `&&` and `||` are scanned as tokens but are not
/// operators, so they are rejected wherever an expression could continue.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlDialect;

impl SqlDialect {
    /// Creates the SQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for SqlDialect {
    fn name(&self) -> &'static str {
        "sql"
    }

    fn token_patterns(&self) -> &[(&str, &str)] {
        TOKEN_PATTERNS
    }

    fn keywords(&self) -> &[&str] {
        KEYWORDS
    }

    fn precedence_levels(&self) -> &[&[&str]] {
        PRECEDENCE_LEVELS
    }
}
