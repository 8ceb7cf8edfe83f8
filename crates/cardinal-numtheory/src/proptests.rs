//! Property-based tests for the generic routines.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{factorial, gcd, lcm};

    // Strategy for operands small enough that a * b never overflows
    fn small_uint() -> impl Strategy<Value = u64> {
        0u64..100_000
    }

    fn non_zero_uint() -> impl Strategy<Value = u64> {
        1u64..100_000
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_uint(), b in non_zero_uint()) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn gcd_commutative(a in small_uint(), b in small_uint()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn gcd_is_greatest(a in non_zero_uint(), b in non_zero_uint()) {
            let g = gcd(a, b);
            for candidate in (g + 1)..=a.min(b) {
                prop_assert!(a % candidate != 0 || b % candidate != 0);
            }
        }

        #[test]
        fn lcm_divisible_by_both(a in non_zero_uint(), b in non_zero_uint()) {
            let m = lcm(a, b);
            prop_assert_eq!(m % a, 0);
            prop_assert_eq!(m % b, 0);
        }

        #[test]
        fn gcd_lcm_product_law(a in non_zero_uint(), b in non_zero_uint()) {
            prop_assert_eq!(gcd(a, b) * lcm(a, b), a * b);
        }

        #[test]
        fn factorial_recurrence(n in 1u64..=20) {
            prop_assert_eq!(factorial(n), n * factorial(n - 1));
        }
    }
}
