use crate::lang::Error;
use rand::Rng;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// ## Character devices, clock, and random numbers
///
/// Everything the machine needs from the outside world. Clock and random
/// have working defaults; a front end only has to move characters.
pub trait Device {
    fn print(&mut self, ch: char) -> Result<()>;

    /// Blocks for exactly one character. `None` at end of input.
    fn input(&mut self) -> Result<Option<char>>;

    /// Whole seconds since the Unix epoch, rounded down.
    fn clock(&mut self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    /// Uniform over `low..=high`. Callers guarantee `low <= high`.
    fn random(&mut self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// In-memory device: scripted input, captured output.
#[derive(Debug, Default)]
pub struct Buffer {
    input: VecDeque<char>,
    output: String,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer::default()
    }

    pub fn with_input(s: &str) -> Buffer {
        Buffer {
            input: s.chars().collect(),
            output: String::new(),
        }
    }

    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.chars());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Device for Buffer {
    fn print(&mut self, ch: char) -> Result<()> {
        self.output.push(ch);
        Ok(())
    }

    fn input(&mut self) -> Result<Option<char>> {
        Ok(self.input.pop_front())
    }
}
