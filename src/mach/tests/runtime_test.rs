use super::*;
use crate::lang::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Fixed {
    printed: String,
    ranges: Vec<(i64, i64)>,
}

impl Device for Fixed {
    fn print(&mut self, ch: char) -> Result<(), Error> {
        self.printed.push(ch);
        Ok(())
    }

    fn input(&mut self) -> Result<Option<char>, Error> {
        Ok(Some('x'))
    }

    fn clock(&mut self) -> i64 {
        1_500_000_000
    }

    fn random(&mut self, low: i64, high: i64) -> i64 {
        self.ranges.push((low, high));
        high
    }
}

#[test]
fn test_scenario() {
    let mut r = Runtime::new(Buffer::new());
    assert_eq!(r.enter("}(0)(5)}(3)(2)@(0)"), Ok(3));
    assert_eq!(r.memory().cells(), &[5, 0, 0, 2]);
}

#[test]
fn test_empty_program() {
    let mut r = Runtime::new(Buffer::new());
    assert_eq!(r.enter(""), Ok(0));
    assert_eq!(r.enter("  #. nothing"), Ok(0));
}

#[test]
fn test_literal_program() {
    let mut r = Runtime::new(Buffer::new());
    assert_eq!(r.enter("-12"), Ok(-12));
}

#[test]
fn test_clock_and_random_go_to_device() {
    let mut r = Runtime::new(Fixed::default());
    assert_eq!(r.enter("\"()"), Ok(1_500_000_000));
    assert_eq!(r.enter("`(10)(0)"), Ok(10));
    assert_eq!(r.enter("`(0)(10)"), Ok(10));
    assert_eq!(r.device().ranges, vec![(0, 10), (0, 10)]);
}

#[test]
fn test_input_and_print() {
    let mut r = Runtime::new(Fixed::default());
    assert_eq!(r.enter("]([())"), Ok('x' as i64));
    assert_eq!(r.device().printed, "x");
}

#[test]
fn test_unprintable_is_swallowed() {
    let mut r = Runtime::new(Fixed::default());
    assert_eq!(r.enter("](-1)](55296)](1114112)](66)"), Ok(66));
    assert_eq!(r.device().printed, "B");
}

#[test]
fn test_error_column_is_operator_application() {
    let mut r = Runtime::new(Buffer::new());
    let error = r.enter("}(0)(1) +(1)(/(1)(0))").unwrap_err();
    assert_eq!(error.code(), ErrorCode::DivisionByZero);
    assert_eq!(error.column(), 12..19);
    assert_eq!(r.memory().cells(), &[1]);
}

struct Interrupter {
    handle: Option<Arc<AtomicBool>>,
    printed: String,
}

impl Device for Interrupter {
    fn print(&mut self, ch: char) -> Result<(), Error> {
        self.printed.push(ch);
        Ok(())
    }

    fn input(&mut self) -> Result<Option<char>, Error> {
        if let Some(handle) = &self.handle {
            handle.store(true, Ordering::SeqCst);
        }
        Ok(None)
    }
}

#[test]
fn test_interrupt_stops_program() {
    let mut r = Runtime::new(Interrupter {
        handle: None,
        printed: String::new(),
    });
    r.device_mut().handle = Some(r.interrupt_handle());
    let error = r.enter("](65)[()](66)").unwrap_err();
    assert_eq!(error.code(), ErrorCode::Break);
    assert_eq!(r.device().printed, "A");
}

#[test]
fn test_interrupt_stops_loop() {
    let mut r = Runtime::new(Interrupter {
        handle: None,
        printed: String::new(),
    });
    r.device_mut().handle = Some(r.interrupt_handle());
    let error = r.enter("~(0)([())").unwrap_err();
    assert_eq!(error.code(), ErrorCode::Break);
}

#[test]
fn test_stale_interrupt_is_cleared() {
    let mut r = Runtime::new(Buffer::new());
    r.interrupt_handle().store(true, Ordering::SeqCst);
    assert_eq!(r.enter("@()"), Ok(-1));
}

#[test]
fn test_config_limits_memory() {
    let mut r = Runtime::with_config(Buffer::new(), Config { max_cells: 2 });
    assert_eq!(r.enter("}(1)(1)"), Ok(1));
    assert_eq!(r.enter("}(2)(1)").unwrap_err().code(), ErrorCode::OutOfMemory);
}
