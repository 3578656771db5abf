#![allow(dead_code)]

use tdop_sql::{ParseError, Parser, Token, Tree};

/// Sends scanner and parser events to the test output; run with
/// `--nocapture` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn parse(sql: &str) -> Tree<Token> {
    init_tracing();
    Parser::new()
        .parse(sql)
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    init_tracing();
    Parser::new()
        .parse(sql)
        .expect_err(&format!("Expected parse error for: {sql}"))
}

/// Parses a statement and renders it as an S-expression.
pub fn sexpr(sql: &str) -> String {
    parse(sql).to_string()
}

/// Parses a bare expression.
pub fn expr_tree(text: &str) -> Tree<Token> {
    Parser::new()
        .parse_expression_str(text)
        .unwrap_or_else(|e| panic!("Failed to parse expression: {text}\nError: {e}"))
}

/// Parses a bare expression and renders it as an S-expression.
pub fn expr(text: &str) -> String {
    expr_tree(text).to_string()
}

/// Wraps `condition` in a minimal SELECT and returns the rendered WHERE clause.
pub fn where_clause(condition: &str) -> String {
    let tree = parse(&format!("select x from t where {condition}"));
    tree.child(2)
        .unwrap_or_else(|| panic!("SELECT without condition: {tree}"))
        .to_string()
}
