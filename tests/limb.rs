//! Equivalence tests between `divappr::Limb` and double-width primitive arithmetic.

use divappr::{Limb, WideWord, Word};
use proptest::prelude::*;

prop_compose! {
    fn limb()(x in any::<Word>()) -> Limb {
        Limb::from(x)
    }
}

fn wide(limb: Limb) -> WideWord {
    WideWord::from(limb)
}

proptest! {
    #[test]
    fn carrying_add(a in limb(), b in limb(), carry in 0..=1u8) {
        let expected = wide(a) + wide(b) + WideWord::from(carry);
        let (lo, hi) = a.carrying_add(b, Limb::from(carry));
        prop_assert_eq!(lo.to_wide_with(hi), expected);
    }

    #[test]
    fn borrowing_sub(a in limb(), b in limb()) {
        let (res, borrow) = a.borrowing_sub(b, Limb::ZERO);
        prop_assert_eq!(res, a.wrapping_sub(b));
        prop_assert_eq!(borrow == Limb::MAX, a < b);
        prop_assert!(borrow == Limb::MAX || borrow == Limb::ZERO);
    }

    #[test]
    fn widening_mul(a in limb(), b in limb()) {
        let (lo, hi) = a.widening_mul(b);
        prop_assert_eq!(lo.to_wide_with(hi), wide(a) * wide(b));
    }

    #[test]
    fn carrying_mul_add(a in limb(), b in limb(), c in limb(), d in limb()) {
        let (lo, hi) = a.carrying_mul_add(b, c, d);
        prop_assert_eq!(lo.to_wide_with(hi), wide(a) * wide(b) + wide(c) + wide(d));
    }

    #[test]
    fn ord(a in limb(), b in limb()) {
        prop_assert_eq!(a.cmp(&b), a.0.cmp(&b.0));
        prop_assert_eq!(a.cmp_vartime(&b), a.0.cmp(&b.0));
    }

    #[test]
    fn shl_shr(a in limb(), shift in 0..Limb::BITS) {
        prop_assert_eq!(a.shl(shift), Limb(a.0 << shift));
        prop_assert_eq!(a.shr(shift), Limb(a.0 >> shift));
    }

    #[test]
    fn leading_zeros_normalize(a in limb()) {
        prop_assume!(a != Limb::ZERO);
        prop_assert!(a.shl(a.leading_zeros()).is_normalized());
        prop_assert_eq!(a.bits() + a.leading_zeros(), Limb::BITS);
    }
}
