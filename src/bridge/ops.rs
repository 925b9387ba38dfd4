//! Stateless compute helpers exposed across the bridge.

/// Add two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Format a greeting for the given name.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Factorial of `n`.
///
/// `n <= 0` returns 1. Products wrap on overflow (two's-complement), so the
/// result is well-defined for any input.
pub fn factorial(n: i64) -> i64 {
    if n <= 0 {
        return 1;
    }
    (1..=n).fold(1i64, |acc, k| acc.wrapping_mul(k))
}
