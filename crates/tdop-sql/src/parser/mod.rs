//! SQL Parser
//!
//! A hand-written recursive descent parser whose expressions are parsed over
//! a precedence ladder, in the style of top-down operator precedence.

mod parser;
mod precedence;

pub use parser::Parser;
pub use precedence::PrecedenceLadder;
