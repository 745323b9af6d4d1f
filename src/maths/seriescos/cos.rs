//! cos(x) via a truncated Maclaurin series.
//!
//! Sums the first five nonzero terms of the cosine expansion about zero
//! (even exponents 0 through 8) with an alternating sign. The truncation
//! error is the first omitted term, x^10/10!, so the result is only close
//! to the true cosine for small |x|.

use super::{factorial, pow};

// Exponents run 0, 2, ..., MAX_EXPONENT - 2: five terms.
const MAX_EXPONENT: i32 = 10;

#[inline(always)]
pub fn cos(x: f64) -> f64 {
    let mut sum = 0.0;
    let mut sign = 1.0;
    let mut i = 0;
    while i < MAX_EXPONENT {
        sum += sign * pow(x, i) / factorial(i);
        sign = -sign;
        i += 2;
    }
    sum
}
