//! Regex-driven scanner with one token of lookahead.

use tracing::trace;

use super::{Position, ScannerConfig, Token};
use crate::error::{ParseError, Result};

/// A scanner over one input string at a time.
///
/// Whitespace is skipped between tokens. At each position the configured
/// patterns are tried in order and the first match becomes the next token;
/// there is no longest-match rule.
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScannerConfig,
    input: String,
    /// Byte offset of the next unscanned character.
    offset: usize,
    line: usize,
    /// Byte offset where the current line begins.
    line_start: usize,
    last: Option<Token>,
    lookahead: Option<Token>,
}

impl Scanner {
    /// Creates a scanner with no input. Call [`Scanner::set_input`] before use.
    #[must_use]
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            input: String::new(),
            offset: 0,
            line: 1,
            line_start: 0,
            last: None,
            lookahead: None,
        }
    }

    /// Replaces the input and scans its first token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Lex`] if the first token cannot be classified.
    pub fn set_input(&mut self, input: impl Into<String>) -> Result<()> {
        self.input = input.into();
        self.offset = 0;
        self.line = 1;
        self.line_start = 0;
        self.last = None;
        self.lookahead = None;
        self.lookahead = self.next_token()?;
        Ok(())
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.lookahead.is_none()
    }

    /// The next token, without consuming it.
    #[must_use]
    pub const fn peek(&self) -> Option<&Token> {
        self.lookahead.as_ref()
    }

    /// The most recently consumed token.
    #[must_use]
    pub const fn last_consumed(&self) -> Option<&Token> {
        self.last.as_ref()
    }

    /// The current scan position: the end of the lookahead token, or the end
    /// of input once everything has been scanned.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.offset - self.line_start)
    }

    /// Consumes the lookahead if its kind is one of `kinds`.
    ///
    /// Returns `Ok(false)` without changing state when the lookahead does not
    /// match or the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Lex`] if scanning the following token fails.
    pub fn matches<S: AsRef<str>>(&mut self, kinds: &[S]) -> Result<bool> {
        Ok(self.accept(kinds)?.is_some())
    }

    /// Consumes and returns the lookahead, which must be one of `kinds`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Syntax`] listing every accepted kind when the
    /// lookahead does not match, or [`ParseError::Lex`] if scanning the
    /// following token fails.
    pub fn expect<S: AsRef<str>>(&mut self, kinds: &[S]) -> Result<Token> {
        match self.accept(kinds)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected(kinds)),
        }
    }

    /// Consumes and returns the lookahead if its kind is one of `kinds`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Lex`] if scanning the following token fails.
    pub fn accept<S: AsRef<str>>(&mut self, kinds: &[S]) -> Result<Option<Token>> {
        if !self
            .lookahead
            .as_ref()
            .is_some_and(|token| token.matches_any(kinds))
        {
            return Ok(None);
        }
        let next = self.next_token()?;
        let consumed = std::mem::replace(&mut self.lookahead, next);
        self.last.clone_from(&consumed);
        Ok(consumed)
    }

    fn unexpected<S: AsRef<str>>(&self, kinds: &[S]) -> ParseError {
        let expected = kinds
            .iter()
            .map(|kind| kind.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        match &self.lookahead {
            Some(found) => ParseError::syntax(
                format!("Expected {expected}, found {found}"),
                found.position(),
            ),
            None => ParseError::syntax(
                format!("Expected {expected}, found end of input"),
                self.position(),
            ),
        }
    }

    /// Scans the token starting at the current offset.
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_whitespace();
        let Some(character) = self.input[self.offset..].chars().next() else {
            return Ok(None);
        };
        let position = self.position();

        let matched = self.config.patterns().iter().find_map(|pattern| {
            pattern
                .match_at(&self.input, self.offset)
                .map(|end| (pattern, end))
        });
        let Some((pattern, end)) = matched else {
            return Err(ParseError::lex(character, position));
        };

        let text = &self.input[self.offset..end];
        let kind = if self.config.is_keyword(pattern.kind(), text) {
            text
        } else {
            pattern.kind()
        };
        let token = Token::new(kind, text, position);
        trace!(
            kind = token.kind(),
            text = token.text(),
            line = token.line(),
            column = token.column(),
            "scanned token"
        );

        self.advance_to(end);
        Ok(Some(token))
    }

    fn skip_whitespace(&mut self) {
        let skipped = self.input[self.offset..]
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.input.len() - self.offset);
        self.advance_to(self.offset + skipped);
    }

    /// Moves the offset to `end`, counting any newlines passed over.
    fn advance_to(&mut self, end: usize) {
        for (i, c) in self.input[self.offset..end].char_indices() {
            if c == '\n' {
                self.line += 1;
                self.line_start = self.offset + i + 1;
            }
        }
        self.offset = end;
    }
}
