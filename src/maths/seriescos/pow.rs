//! Integer power by repeated multiplication.

/// x^n for small non-negative n; any n <= 0 yields 1.0.
#[inline(always)]
pub fn pow(x: f64, n: i32) -> f64 {
    let mut acc = 1.0;
    let mut i = 0;
    while i < n {
        acc *= x;
        i += 1;
    }
    acc
}
