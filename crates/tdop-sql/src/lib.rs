//! # tdop-sql
//!
//! A scanner and top-down operator precedence parser for a small SQL subset.
//!
//! This crate provides:
//! - A regex-driven [`Scanner`] whose patterns are tried in registration order
//! - A recursive descent [`Parser`] for `SELECT` and `UPDATE` statements with
//!   expressions parsed over a [`PrecedenceLadder`]
//! - A generic [`Tree`] AST rendered as an S-expression or Graphviz dot
//!
//! ## Parsing
//!
//! Input is upper-cased before scanning, so keywords and identifiers are
//! case-insensitive (string literals are upper-cased too):
//!
//! ```rust
//! use tdop_sql::Parser;
//!
//! let mut parser = Parser::new();
//! let tree = parser
//!     .parse("select 1+2*i, 2/a from foo where bar == '' or baz == 'Y'")
//!     .unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "(SELECT (list (+ 1 (* 2 I)) (/ 2 A)) FOO (OR (== BAR '') (== BAZ 'Y')))"
//! );
//! ```
//!
//! ## Visualization
//!
//! ```rust
//! use tdop_sql::Parser;
//!
//! let tree = Parser::new().parse("update t set a = 1 where b").unwrap();
//! let dot = tree.to_dot(); // pipe to `dot -Tpng`
//! assert!(dot.starts_with("digraph ast {"));
//! ```

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use dialect::{Dialect, ExtendedDialect, SqlDialect};
pub use error::{ParseError, PatternError, Result};
pub use lexer::{Position, Scanner, ScannerConfig, Token, TokenPattern};
pub use parser::{Parser, PrecedenceLadder};
pub use tree::Tree;
