//! Property-based tests for the chunked representation.
//!
//! `dashu::UBig` serves as the independent reference implementation the
//! operator results are compared against.

#[cfg(test)]
mod tests {
    use dashu::base::BitTest;
    use dashu::integer::UBig;
    use num_traits::Zero;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::BigUint;

    // Strategy for bit strings spanning several chunk boundaries
    fn bits() -> impl Strategy<Value = Vec<bool>> {
        vec(any::<bool>(), 0..200)
    }

    fn shift_amount() -> impl Strategy<Value = usize> {
        0usize..130
    }

    /// Builds the same value in both representations.
    fn from_bits(bits: &[bool]) -> (BigUint, UBig) {
        let ours: BigUint = bits.iter().copied().collect();
        let mut reference = UBig::ZERO;
        for (pos, &bit) in bits.iter().enumerate() {
            if bit {
                reference |= UBig::ONE << pos;
            }
        }
        (ours, reference)
    }

    fn to_reference(value: &BigUint) -> UBig {
        let mut out = UBig::ZERO;
        for pos in 0..value.bit_len() {
            if value.bit(pos) {
                out |= UBig::ONE << pos;
            }
        }
        out
    }

    /// The canonical-form invariant: no trailing zero chunk.
    fn assert_canonical(value: &BigUint) {
        assert!(
            value.chunks.last().map_or(true, |&top| top != 0),
            "trailing zero chunk in {value:?}"
        );
    }

    proptest! {
        #[test]
        fn construction_matches_reference(bits in bits()) {
            let (ours, reference) = from_bits(&bits);
            assert_canonical(&ours);
            prop_assert_eq!(to_reference(&ours), reference);
        }

        #[test]
        fn bit_len_matches_reference(bits in bits()) {
            let (ours, reference) = from_bits(&bits);
            prop_assert_eq!(ours.bit_len(), reference.bit_len());
        }

        #[test]
        fn set_bit_roundtrip_preserves_other_bits(
            bits in bits(),
            pos in 0usize..256,
            value in any::<bool>()
        ) {
            let (mut ours, _) = from_bits(&bits);
            let before = ours.clone();

            ours.set_bit(pos, value);
            assert_canonical(&ours);
            prop_assert_eq!(ours.bit(pos), value);
            for other in (0..260).filter(|&other| other != pos) {
                prop_assert_eq!(ours.bit(other), before.bit(other));
            }
        }

        #[test]
        fn add_matches_reference(a in bits(), b in bits()) {
            let (a, a_ref) = from_bits(&a);
            let (b, b_ref) = from_bits(&b);
            let sum = a + b;
            assert_canonical(&sum);
            prop_assert_eq!(to_reference(&sum), a_ref + b_ref);
        }

        #[test]
        fn add_commutative(a in bits(), b in bits()) {
            let (a, _) = from_bits(&a);
            let (b, _) = from_bits(&b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_associative(a in bits(), b in bits(), c in bits()) {
            let (a, _) = from_bits(&a);
            let (b, _) = from_bits(&b);
            let (c, _) = from_bits(&c);
            prop_assert_eq!((&a + &b) + &c, a + (&b + &c));
        }

        #[test]
        fn bitwise_match_reference(a in bits(), b in bits()) {
            let (a, a_ref) = from_bits(&a);
            let (b, b_ref) = from_bits(&b);

            let or = &a | &b;
            let and = &a & &b;
            let xor = &a ^ &b;
            assert_canonical(&or);
            assert_canonical(&and);
            assert_canonical(&xor);

            prop_assert_eq!(to_reference(&or), a_ref.clone() | b_ref.clone());
            prop_assert_eq!(to_reference(&and), a_ref.clone() & b_ref.clone());
            prop_assert_eq!(to_reference(&xor), a_ref ^ b_ref);
        }

        #[test]
        fn bitwise_identities(a in bits()) {
            let (a, _) = from_bits(&a);
            let zero = BigUint::new();

            prop_assert_eq!(&a | &a, a.clone());
            prop_assert_eq!(&a & &a, a.clone());
            prop_assert!((&a ^ &a).is_zero());
            prop_assert_eq!(&a | &zero, a.clone());
            prop_assert!((&a & &zero).is_zero());
        }

        #[test]
        fn shl_matches_reference(a in bits(), dec in shift_amount()) {
            let (a, a_ref) = from_bits(&a);
            let shifted = &a << dec;
            assert_canonical(&shifted);
            prop_assert_eq!(to_reference(&shifted), a_ref << dec);
        }

        #[test]
        fn shl_extends_bit_len(a in bits(), dec in shift_amount()) {
            let (a, _) = from_bits(&a);
            prop_assume!(!a.is_zero());
            prop_assert_eq!((&a << dec).bit_len(), a.bit_len() + dec);
        }

        #[test]
        fn shr_inverts_shl(a in bits(), dec in shift_amount()) {
            let (a, _) = from_bits(&a);
            prop_assert_eq!((&a << dec).shr_bits(dec), a);
        }
    }
}
