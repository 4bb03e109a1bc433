use super::{operator::TERMINATOR, Column, Error, Operator};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// One operator application split off the front of a statement list.
/// Operands are raw text, parsed only when evaluated.
#[derive(Debug, PartialEq)]
pub struct Parsed<'a> {
    pub column: Column,
    pub operator: Operator,
    pub operands: Vec<Span<'a>>,
    pub remainder: Span<'a>,
}

/// Text with its byte offset in the prepared program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> Span<'a> {
    pub fn new(text: &'a str, offset: usize) -> Span<'a> {
        Span { text, offset }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn column(&self) -> Column {
        self.offset..self.offset + self.text.len()
    }

    fn slice(&self, range: std::ops::Range<usize>) -> Span<'a> {
        Span {
            text: &self.text[range.clone()],
            offset: self.offset + range.start,
        }
    }
}

pub fn parse(span: Span<'_>) -> Result<Parsed<'_>> {
    Parser::new(span).parse()
}

struct Parser<'a> {
    span: Span<'a>,
    pos: usize,
    total_open: usize,
    total_close: usize,
}

impl<'a> Parser<'a> {
    fn new(span: Span<'a>) -> Parser<'a> {
        Parser {
            span,
            pos: 0,
            total_open: 0,
            total_close: 0,
        }
    }

    fn col(&self, start: usize, end: usize) -> Column {
        self.span.offset + start..self.span.offset + end
    }

    fn parse(mut self) -> Result<Parsed<'a>> {
        let ch = match self.span.text.chars().next() {
            Some(ch) => ch,
            None => return Err(error!(SyntaxError; "EXPECTED OPERATOR")),
        };
        let first = self.col(0, ch.len_utf8());
        if ch == '(' || ch == ')' {
            return Err(error!(SyntaxError, ..&first; "ILLEGAL USE OF ()"));
        }
        if ch == TERMINATOR {
            return Err(error!(SyntaxError, ..&first; "$ IS NOT AN OPERATOR"));
        }
        let operator = match Operator::from_char(ch) {
            Some(op) => op,
            None => {
                return Err(error!(SyntaxError, ..&first; &format!("OPERATOR {} NOT FOUND", ch)))
            }
        };
        self.pos = ch.len_utf8();
        let mut operands = Vec::with_capacity(operator.arity());
        while operands.len() < operator.arity() {
            if self.pos >= self.span.text.len() {
                break;
            }
            operands.push(self.operand()?);
        }
        if operands.len() < operator.arity() {
            let end = self.span.text.len();
            return Err(error!(SyntaxError, ..&self.col(end, end); "MORE OPERANDS EXPECTED"));
        }
        if self.total_open != self.total_close {
            return Err(error!(SyntaxError, ..&self.col(0, self.pos); "PARENTHESES NOT BALANCED"));
        }
        Ok(Parsed {
            column: self.col(0, self.pos),
            operator,
            operands,
            remainder: self.span.slice(self.pos..self.span.text.len()),
        })
    }

    /// Scans one parenthesized operand slot. The text strictly inside the
    /// slot's own parentheses is the operand; the balancing `)` is not.
    fn operand(&mut self) -> Result<Span<'a>> {
        let (mut open, mut close) = (0usize, 0usize);
        let mut start: Option<usize> = None;
        let mut end = self.pos;
        let text = self.span.text;
        let rest = &text[self.pos..];
        for ch in rest.chars() {
            let at = self.pos;
            if open > close && (ch != ')' || open - 1 != close) {
                if start.is_none() {
                    start = Some(at);
                }
                end = at + ch.len_utf8();
            }
            if open == close && open > 0 {
                break;
            }
            if open == 0 && close == 0 && ch != '(' && ch != ')' {
                let col = self.col(at, at + ch.len_utf8());
                return Err(error!(SyntaxError, ..&col; "MORE OPERANDS EXPECTED"));
            }
            if ch == '(' {
                open += 1;
                self.total_open += 1;
            }
            if ch == ')' {
                close += 1;
                self.total_close += 1;
            }
            self.pos += ch.len_utf8();
        }
        Ok(match start {
            Some(start) => self.span.slice(start..end),
            None => self.span.slice(self.pos..self.pos),
        })
    }
}
