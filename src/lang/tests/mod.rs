use super::*;

mod operator_test;
