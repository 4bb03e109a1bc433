use super::*;

#[test]
fn test_division_truncates() {
    assert_eq!(Operation::divide(-7, 2), Ok(-3));
    assert_eq!(Operation::divide(7, -2), Ok(-3));
    assert_eq!(Operation::divide(7, 2), Ok(3));
}

#[test]
fn test_modulus_floors() {
    assert_eq!(Operation::modulus(-7, 2), Ok(1));
    assert_eq!(Operation::modulus(7, -2), Ok(-1));
    assert_eq!(Operation::modulus(-7, -2), Ok(-1));
    assert_eq!(Operation::modulus(6, -3), Ok(0));
    assert_eq!(Operation::modulus(i64::MIN, -1), Ok(0));
}

#[test]
fn test_zero_divisor() {
    assert_eq!(Operation::divide(1, 0).unwrap_err().code(), ErrorCode::DivisionByZero);
    assert_eq!(Operation::modulus(1, 0).unwrap_err().code(), ErrorCode::DivisionByZero);
}

#[test]
fn test_overflow() {
    assert_eq!(Operation::sum(i64::MAX, 1).unwrap_err().code(), ErrorCode::Overflow);
    assert_eq!(Operation::subtract(i64::MIN, 1).unwrap_err().code(), ErrorCode::Overflow);
    assert_eq!(Operation::multiply(i64::MAX, 2).unwrap_err().code(), ErrorCode::Overflow);
    assert_eq!(Operation::divide(i64::MIN, -1).unwrap_err().code(), ErrorCode::Overflow);
}

#[test]
fn test_bounds() {
    assert_eq!(Operation::bounds(10, 0), (0, 10));
    assert_eq!(Operation::bounds(0, 10), (0, 10));
    assert_eq!(Operation::bounds(-3, -3), (-3, -3));
}
