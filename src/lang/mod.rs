/*!
# Rust Language Module

This Rust module provides comment stripping and parsing of the Integ language.

*/

#[macro_use]
mod error;
mod operator;
mod parse;
mod source;

pub use error::Error;
pub use error::ErrorCode;
pub use operator::Operator;
pub use operator::TERMINATOR;
pub use parse::{parse, Parsed, Span};
pub use source::{prepare, strip_comments, strip_whitespace};

pub mod ast;

/// Byte range within the prepared program text.
pub type Column = std::ops::Range<usize>;

#[cfg(test)]
mod tests;
