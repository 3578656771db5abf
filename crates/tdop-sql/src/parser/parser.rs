//! Statement parser.

use tracing::debug;

use super::precedence::PrecedenceLadder;
use crate::dialect::{Dialect, SqlDialect};
use crate::error::{ParseError, PatternError, Result};
use crate::lexer::{Scanner, Token};
use crate::tree::Tree;

/// LL(1) recursive descent parser for `SELECT` and `UPDATE` statements.
///
/// ```text
/// statement   := select | update
/// select      := 'SELECT' expr (',' expr)* 'FROM' ID 'WHERE' expr
/// update      := 'UPDATE' ID 'SET' assign (',' assign)* 'WHERE' expr
/// assign      := ID '=' expr
/// ```
///
/// A parser owns its scanner and can be reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct Parser {
    pub(super) scanner: Scanner,
    pub(super) ladder: PrecedenceLadder,
    pub(super) prefix_operators: Vec<String>,
    /// Parentheses and prefix operators currently open.
    pub(super) depth: usize,
    fold_case: bool,
    dialect: &'static str,
}

impl Parser {
    /// Creates a parser for [`SqlDialect`].
    ///
    /// # Panics
    ///
    /// Never in practice: the built-in dialect's patterns are fixed and valid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dialect(&SqlDialect).expect("SQL dialect token patterns are valid")
    }

    /// Creates a parser for an arbitrary dialect.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if one of the dialect's token patterns is
    /// invalid.
    pub fn with_dialect<D: Dialect + ?Sized>(dialect: &D) -> Result<Self, PatternError> {
        Ok(Self {
            scanner: Scanner::new(dialect.scanner_config()?),
            ladder: PrecedenceLadder::new(dialect.precedence_levels().iter().copied()),
            prefix_operators: dialect
                .prefix_operators()
                .iter()
                .map(|op| (*op).to_owned())
                .collect(),
            depth: 0,
            fold_case: dialect.fold_case(),
            dialect: dialect.name(),
        })
    }

    /// The operator levels expressions are parsed with.
    #[must_use]
    pub const fn precedence(&self) -> &PrecedenceLadder {
        &self.ladder
    }

    /// Parses one statement.
    ///
    /// The root of the returned tree is the `SELECT` or `UPDATE` token:
    ///
    /// - `(SELECT (list expr...) TABLE condition)`
    /// - `(UPDATE (SET (= ID expr)...) condition)`; the table name is dropped
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is built.
    pub fn parse(&mut self, line: &str) -> Result<Tree<Token>> {
        debug!(dialect = self.dialect, input = line, "parsing statement");
        let result = self.parse_statement(line);
        match &result {
            Ok(tree) => debug!(nodes = tree.node_count(), "parsed statement"),
            Err(error) => debug!(%error, "statement rejected"),
        }
        result
    }

    /// Parses a bare expression such as `a + 2 * b`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not exactly one expression.
    pub fn parse_expression_str(&mut self, text: &str) -> Result<Tree<Token>> {
        self.load(text)?;
        let tree = self.parse_expression()?;
        self.expect_end()?;
        Ok(tree)
    }

    fn load(&mut self, text: &str) -> Result<()> {
        if self.fold_case {
            self.scanner.set_input(text.to_uppercase())
        } else {
            self.scanner.set_input(text)
        }
    }

    fn parse_statement(&mut self, line: &str) -> Result<Tree<Token>> {
        self.load(line)?;
        let keyword = self.scanner.expect(&["SELECT", "UPDATE"])?;
        let tree = if keyword.matches("SELECT") {
            self.parse_select(keyword)?
        } else {
            self.parse_update(keyword)?
        };
        self.expect_end()?;
        Ok(tree)
    }

    fn expect_end(&self) -> Result<()> {
        match self.scanner.peek() {
            None => Ok(()),
            Some(extra) => Err(ParseError::syntax(
                format!("Unexpected input: {extra}"),
                extra.position(),
            )),
        }
    }

    /// select := 'SELECT' expr (',' expr)* 'FROM' ID 'WHERE' expr
    fn parse_select(&mut self, select: Token) -> Result<Tree<Token>> {
        let list = Tree::new(select.rename_with("list", "list"));
        let columns = self.parse_comma_list(list, Self::parse_expression)?;
        self.scanner.expect(&["FROM"])?;
        let table = self.scanner.expect(&["ID"])?;
        self.scanner.expect(&["WHERE"])?;
        let condition = self.parse_expression()?;
        Ok(Tree::new(select)
            .with_child(columns)
            .with_value(table)
            .with_child(condition))
    }

    /// update := 'UPDATE' ID 'SET' assign (',' assign)* 'WHERE' expr
    fn parse_update(&mut self, update: Token) -> Result<Tree<Token>> {
        // table name is not kept
        self.scanner.expect(&["ID"])?;
        let set = Tree::new(self.scanner.expect(&["SET"])?);
        let assignments = self.parse_comma_list(set, Self::parse_assignment)?;
        self.scanner.expect(&["WHERE"])?;
        let condition = self.parse_expression()?;
        Ok(Tree::new(update)
            .with_child(assignments)
            .with_child(condition))
    }

    /// assign := ID '=' expr
    fn parse_assignment(&mut self) -> Result<Tree<Token>> {
        let target = self.scanner.expect(&["ID"])?;
        let assign = self.scanner.expect(&["="])?;
        let value = self.parse_expression()?;
        Ok(Tree::new(assign).with_value(target).with_child(value))
    }

    /// Appends one or more comma separated `item`s to `head`.
    fn parse_comma_list(
        &mut self,
        mut head: Tree<Token>,
        item: fn(&mut Self) -> Result<Tree<Token>>,
    ) -> Result<Tree<Token>> {
        loop {
            head.push(item(self)?);
            if !self.scanner.matches(&[","])? {
                return Ok(head);
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::ExtendedDialect;

    fn parse(sql: &str) -> Result<String> {
        Parser::new().parse(sql).map(|tree| tree.to_string())
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            parse("SELECT a FROM t WHERE b").unwrap(),
            "(SELECT (list A) T B)"
        );
    }

    #[test]
    fn test_simple_update() {
        assert_eq!(
            parse("UPDATE t SET a = 1 WHERE b").unwrap(),
            "(UPDATE (SET (= A 1)) B)"
        );
    }

    #[test]
    fn test_expression_precedence() {
        // 1 + 2 * 3 should be parsed as 1 + (2 * 3)
        let tree = Parser::new().parse_expression_str("1 + 2 * 3").unwrap();
        assert_eq!(tree.value().kind(), "+");
        assert_eq!(tree.child(1).unwrap().value().kind(), "*");
    }

    #[test]
    fn test_list_node_takes_select_position() {
        let tree = Parser::new().parse("  select x from t where y").unwrap();
        let list = tree.child(0).unwrap();
        assert_eq!(list.value().kind(), "list");
        assert_eq!(list.value().position(), tree.value().position());
        assert_eq!(list.value().column(), 2);
    }

    #[test]
    fn test_parser_is_reusable_after_error() {
        let mut parser = Parser::new();
        assert!(parser.parse("select from t where x").is_err());
        let tree = parser.parse("select x from t where y").unwrap();
        assert_eq!(tree.to_string(), "(SELECT (list X) T Y)");
    }

    #[test]
    fn test_unknown_statement() {
        let err = parse("DELETE FROM t").unwrap_err();
        assert_eq!(
            err,
            ParseError::Syntax {
                message: String::from("Expected SELECT UPDATE, found DELETE"),
                line: 1,
                column: 0,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected SELECT UPDATE, found end of input at line 1, column 0"
        );
    }

    #[test]
    fn test_with_dialect_uses_its_ladder() {
        let mut parser = Parser::with_dialect(&ExtendedDialect).unwrap();
        assert_eq!(parser.precedence().level_of("<="), Some(1));
        let tree = parser
            .parse("select a from t where a < 1 && b >= 2")
            .unwrap();
        assert_eq!(tree.to_string(), "(SELECT (list A) T (&& (< A 1) (>= B 2)))");
    }

    #[test]
    fn test_sql_dialect_rejects_double_ampersand() {
        let err = parse("select a from t where a == 1 && b == 2").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected input: && at line 1, column 29");
    }
}
