//! Expression parsing over an ordered ladder of operator levels.
//!
//! Instead of numeric binding powers, precedence is the position of an
//! operator's group in a list ordered from weakest to strongest. Level `i`
//! parses operands at level `i + 1` (or primaries past the last level) and
//! folds them left-associatively with its own operators, so
//! `2-3-4` becomes `(- (- 2 3) 4)` and `1+2*3` becomes `(+ 1 (* 2 3))`.

use super::parser::Parser;
use crate::error::{ParseError, Result};
use crate::lexer::Token;
use crate::tree::Tree;

/// Operator kinds grouped by level, weakest binding first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrecedenceLadder {
    levels: Vec<Vec<String>>,
}

impl PrecedenceLadder {
    /// Creates a ladder from groups of operator kinds.
    #[must_use]
    pub fn new<I, L, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            levels: levels
                .into_iter()
                .map(|level| level.into_iter().map(|op| op.as_ref().to_owned()).collect())
                .collect(),
        }
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if there are no binary operators at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The operator kinds at `index`; empty past the last level.
    #[must_use]
    pub fn operators(&self, index: usize) -> &[String] {
        self.levels.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// The level `kind` belongs to, if it is an operator.
    #[must_use]
    pub fn level_of(&self, kind: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|op| op == kind))
    }
}

const PRIMARY_KINDS: &[&str] = &["ID", "STRING", "(", "INT"];

/// How many parentheses and prefix operators may enclose one another.
///
/// Each nesting level costs a full descent through the ladder, so this keeps
/// pathological input like `((((...` from exhausting the stack.
const MAX_NESTING: usize = 64;

impl Parser {
    /// expr := level(0)
    pub(super) fn parse_expression(&mut self) -> Result<Tree<Token>> {
        if self.ladder.is_empty() {
            return self.parse_primary();
        }
        self.parse_level(0)
    }

    fn parse_level(&mut self, index: usize) -> Result<Tree<Token>> {
        let mut lhs = self.parse_next_level(index)?;
        while let Some(op) = self.scanner.accept(self.ladder.operators(index))? {
            let rhs = self.parse_next_level(index)?;
            lhs = Tree::new(op).with_child(lhs).with_child(rhs);
        }
        Ok(lhs)
    }

    fn parse_next_level(&mut self, index: usize) -> Result<Tree<Token>> {
        if index + 1 >= self.ladder.len() {
            return self.parse_primary();
        }
        self.parse_level(index + 1)
    }

    /// primary := prefix primary | ID | STRING | INT | '(' expr ')'
    fn parse_primary(&mut self) -> Result<Tree<Token>> {
        if let Some(op) = self.scanner.accept(self.prefix_operators.as_slice())? {
            let operand = self.parse_nested(&op, Self::parse_primary)?;
            return Ok(Tree::new(op).with_child(operand));
        }
        let token = self.scanner.expect(PRIMARY_KINDS)?;
        if token.matches("(") {
            let inner = self.parse_nested(&token, Self::parse_expression)?;
            self.scanner.expect(&[")"])?;
            return Ok(inner);
        }
        Ok(Tree::new(token))
    }

    /// Runs `parse` one nesting level deeper than the current one.
    fn parse_nested(
        &mut self,
        opener: &Token,
        parse: fn(&mut Self) -> Result<Tree<Token>>,
    ) -> Result<Tree<Token>> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::syntax(
                "Expression nested too deeply",
                opener.position(),
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}
