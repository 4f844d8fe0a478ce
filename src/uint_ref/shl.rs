//! [`UintRef`] bitwise left shift operations.

use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Left-shifts by `shift` bits where `shift < Limb::BITS`, returning the bits shifted out of
    /// the most significant limb.
    ///
    /// NOTE: this operation is variable time with respect to `shift` *ONLY*.
    ///
    /// # Panics
    /// If the shift size is equal to or larger than the width of a limb.
    #[inline(always)]
    #[track_caller]
    pub const fn shl_assign_limb(&mut self, shift: u32) -> Limb {
        assert!(shift < Limb::BITS, "`shift` exceeds limb width");

        if shift == 0 {
            return Limb::ZERO;
        }

        let lshift = shift;
        let rshift = Limb::BITS - shift;
        let mut carry = Limb::ZERO;

        let mut i = 0;
        while i < self.nlimbs() {
            (self.0[i], carry) = (
                Limb(self.0[i].shl(lshift).0 | carry.0),
                self.0[i].shr(rshift),
            );
            i += 1;
        }

        carry
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, UintRef};

    #[test]
    fn shl_zero() {
        let mut x = [Limb::MAX, Limb::ONE];
        let carry = UintRef::new_mut(&mut x).shl_assign_limb(0);
        assert_eq!(x, [Limb::MAX, Limb::ONE]);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn shl_carries_between_limbs() {
        let mut x = [Limb::MAX, Limb::ONE.shl(Limb::BITS - 1)];
        let carry = UintRef::new_mut(&mut x).shl_assign_limb(1);
        assert_eq!(x, [Limb::MAX.shl(1), Limb::ONE]);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    #[should_panic(expected = "exceeds limb width")]
    fn shl_too_far() {
        let mut x = [Limb::ONE];
        let _ = UintRef::new_mut(&mut x).shl_assign_limb(Limb::BITS);
    }
}
