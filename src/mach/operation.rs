use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    /// Quotient truncated toward zero.
    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    /// Remainder of floored division, so it takes the sign of the divisor
    /// even though `divide` truncates.
    pub fn modulus(lhs: i64, rhs: i64) -> Result<i64> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        let rem = lhs.checked_rem(rhs).unwrap_or(0);
        if rem != 0 && (rem < 0) != (rhs < 0) {
            Ok(rem + rhs)
        } else {
            Ok(rem)
        }
    }

    /// Bounds in either order.
    pub fn bounds(a: i64, b: i64) -> (i64, i64) {
        if a > b {
            (b, a)
        } else {
            (a, b)
        }
    }
}
