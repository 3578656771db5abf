//! Source location tracking for tokens and errors.

use core::fmt;

/// A location in the scanned input.
///
/// Columns count bytes of the text the scanner actually saw. When the parser
/// folds case, that is the upper-cased line, and folding can change byte
/// lengths (`é` stays two bytes, `ß` becomes `SS`), so a column after such a
/// character can differ from the byte offset in the caller's original line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 0-based byte offset from the start of the line, in the scanned text.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position of the first character of an input.
    #[must_use]
    pub const fn start() -> Self {
        Self::new(1, 0)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
