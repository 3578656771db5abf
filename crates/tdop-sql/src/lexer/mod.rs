//! Regex-based lexical analysis.
//!
//! A [`Scanner`] is built from a [`ScannerConfig`]: an ordered list of
//! [`TokenPattern`]s plus keyword sets. It keeps one [`Token`] of lookahead
//! which the parser inspects and consumes with `matches` and `expect`.

mod config;
mod pattern;
mod position;
mod scanner;
mod token;

pub use config::ScannerConfig;
pub use pattern::TokenPattern;
pub use position::Position;
pub use scanner::Scanner;
pub use token::Token;
