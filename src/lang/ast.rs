use super::parse::{parse, Span};
use super::{Column, Error, Operator};
use crate::error;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Expression<'a> {
    Integer(i64),
    Apply(Column, Operator, Vec<Block<'a>>),
}

/// ## Lazily parsed statement list
///
/// Program text has no statement separator: whatever one statement leaves
/// unconsumed is the next statement. A block parses its statements one at
/// a time, only when execution asks for them, and keeps what it parsed so
/// a loop body is scanned once no matter how often it runs.

#[derive(Debug)]
pub struct Block<'a> {
    span: Span<'a>,
    statements: RefCell<Vec<Rc<Expression<'a>>>>,
    rest: Cell<Span<'a>>,
}

impl<'a> Block<'a> {
    pub fn new(span: Span<'a>) -> Block<'a> {
        Block {
            span,
            statements: RefCell::new(vec![]),
            rest: Cell::new(span),
        }
    }

    pub fn span(&self) -> Span<'a> {
        self.span
    }

    /// Returns `None` once the block has no more statements.
    pub fn statement(&self, index: usize) -> Result<Option<Rc<Expression<'a>>>> {
        if let Some(expr) = self.statements.borrow().get(index) {
            return Ok(Some(Rc::clone(expr)));
        }
        debug_assert_eq!(index, self.statements.borrow().len());
        let rest = self.rest.get();
        if rest.is_empty() {
            return Ok(None);
        }
        let (expr, remainder) = Expression::parse(rest)?;
        self.rest.set(remainder);
        let expr = Rc::new(expr);
        self.statements.borrow_mut().push(Rc::clone(&expr));
        Ok(Some(expr))
    }
}

impl<'a> Expression<'a> {
    /// Splits one statement off the front of `span`. An integer literal
    /// is only recognized when it is all of the remaining text.
    pub fn parse(span: Span<'a>) -> Result<(Expression<'a>, Span<'a>)> {
        if let Some(n) = literal(span)? {
            let end = span.offset + span.text.len();
            return Ok((Expression::Integer(n), Span::new("", end)));
        }
        let parsed = parse(span)?;
        let operands = parsed.operands.into_iter().map(Block::new).collect();
        Ok((
            Expression::Apply(parsed.column, parsed.operator, operands),
            parsed.remainder,
        ))
    }
}

fn literal(span: Span<'_>) -> Result<Option<i64>> {
    let text = span.text;
    let digits = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok(None);
    }
    match text.parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(error!(Overflow, ..&span.column())),
    }
}
