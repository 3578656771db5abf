//! SQL subset with relational operators.

use super::Dialect;

const TOKEN_PATTERNS: &[(&str, &str)] = &[
    ("(", r"\("),
    (")", r"\)"),
    ("&&", r"&&"),
    ("||", r"\|\|"),
    ("!=", r"!="),
    ("==", r"=="),
    ("<=", r"<="),
    (">=", r">="),
    ("=", r"="),
    ("<", r"<"),
    (">", r">"),
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
    &["AND", "OR", "&&", "||"],
    &["==", "!=", "<", ">", "<=", ">="],
    &["+", "-"],
    &["*", "/", "%"],
];

/// [`SqlDialect`](super::SqlDialect) plus ordering comparisons.
///
/// Adds `<`, `>`, `<=` and `>=` at the equality level, accepts `&&` and
/// `||` as spellings of the logical operators, and allows unary minus.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtendedDialect;

impl ExtendedDialect {
    /// Creates the extended dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for ExtendedDialect {
    fn name(&self) -> &'static str {
        "extended"
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

    fn prefix_operators(&self) -> &[&str] {
        &["-"]
    }
}
