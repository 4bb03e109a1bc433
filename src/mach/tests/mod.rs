use super::*;
use crate::lang::ErrorCode;

mod operation_test;
mod runtime_test;
