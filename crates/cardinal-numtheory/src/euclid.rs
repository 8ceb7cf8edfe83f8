//! Euclidean gcd and lcm over generic numeric types.

use std::ops::{Div, Mul, Rem};

use num_traits::Zero;

/// Computes the greatest common divisor by the Euclidean algorithm.
///
/// `gcd(0, b) == b` and `gcd(a, 0) == a`; in particular `gcd(0, 0) == 0`.
/// The recurrence `gcd(a, b) = gcd(b mod a, a)` terminates because
/// `b mod a < a` strictly decreases, and is run here as a loop.
///
/// For signed types the result carries the sign that `%` produces; callers
/// wanting a non-negative divisor should pass non-negative operands.
pub fn gcd<T>(a: T, b: T) -> T
where
    T: Zero + Clone + Rem<Output = T>,
{
    let (mut a, mut b) = (a, b);
    while !a.is_zero() {
        let remainder = b % a.clone();
        b = a;
        a = remainder;
    }
    b
}

/// Computes the least common multiple as `a / gcd(a, b) * b`.
///
/// Dividing before multiplying keeps the intermediate value no larger than
/// the result. `lcm(0, 0)` is defined as `0`; with only one operand zero
/// the division is by a non-zero gcd and the result is zero.
pub fn lcm<T>(a: T, b: T) -> T
where
    T: Zero + Clone + Rem<Output = T> + Div<Output = T> + Mul<Output = T>,
{
    if a.is_zero() && b.is_zero() {
        return T::zero();
    }
    let divisor = gcd(a.clone(), b.clone());
    a / divisor * b
}
