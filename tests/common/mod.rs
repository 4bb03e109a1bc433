#![allow(dead_code)]
use integ::mach::{Buffer, Runtime};

pub fn runtime() -> Runtime<Buffer> {
    Runtime::new(Buffer::new())
}

/// Runs `source` and returns what it printed, followed by the error if
/// the program failed.
pub fn exec(runtime: &mut Runtime<Buffer>, source: &str) -> String {
    let result = runtime.enter(source);
    let mut s = runtime.device_mut().take_output();
    if let Err(error) = result {
        s.push_str(&format!("?{}\n", error));
    }
    s
}

pub fn value(runtime: &mut Runtime<Buffer>, source: &str) -> i64 {
    match runtime.enter(source) {
        Ok(value) => value,
        Err(error) => panic!("{} failed: {}", source, error),
    }
}
