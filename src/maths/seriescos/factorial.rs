//! Factorial by repeated multiplication, as an f64 since it only ever
//! appears as a term denominator. Exact for the small arguments involved.

/// n! for small non-negative n; any n <= 0 yields 1.0.
#[inline(always)]
pub fn factorial(n: i32) -> f64 {
    let mut acc = 1.0;
    let mut k = 2;
    while k <= n {
        acc *= k as f64;
        k += 1;
    }
    acc
}
