//! # Integ
//!
//! A language whose only datatype is the integer and whose only storage
//! is a row of numbered cells.
//!
//! Linux and MacOS require [Rust](https://www.rust-lang.org/tools/install)
//! then the command `cargo install integ-lang`.
//!
//! Run `integ` in a terminal for the interactive prompt, or `integ FILE`
//! to run a program. A program can also be piped in on stdin.
//! ```text
//! --------Integ 1.1---------
//!  Interactive  Interpreter
//!
//! >>> █
//! ```
//!
//! The language itself is described in the introduction below.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
