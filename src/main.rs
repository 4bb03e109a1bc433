//! # Integ
//!
//! Reference interpreter for the Integ language.
//!

fn main() {
    integ::term::main();
}
