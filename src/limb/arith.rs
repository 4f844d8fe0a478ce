//! Limb addition, subtraction and multiplication with explicit carries.
//!
//! Carries out of additions are `Limb::ZERO` or `Limb::ONE`; borrows out of subtractions are
//! `Limb::ZERO` or `Limb::MAX`, so a borrow can be applied as a mask.

use crate::{
    Limb,
    primitives::{borrowing_sub, carrying_add, carrying_mul_add, widening_mul},
};

impl Limb {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Addition modulo `2^Limb::BITS`.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Limb(self.0.wrapping_add(rhs.0))
    }

    /// Subtraction modulo `2^Limb::BITS`.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Double-width product, returned as `(lo, hi)`.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Computes `(self * rhs) + addend + carry` as `(lo, hi)`. The sum cannot overflow two limbs.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn carry_out_of_top() {
        assert_eq!(Limb::MAX.carrying_add(Limb::ZERO, Limb::ONE), (Limb::ZERO, Limb::ONE));
        assert_eq!(Limb::MAX.carrying_add(Limb::MAX, Limb::ONE), (Limb::MAX, Limb::ONE));
    }

    #[test]
    fn borrow_is_a_mask() {
        assert_eq!(Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO), (Limb::MAX, Limb::MAX));
        assert_eq!(Limb::ONE.borrowing_sub(Limb::ZERO, Limb::MAX), (Limb::ZERO, Limb::ZERO));

        // a masked divisor limb is what the add-back step applies
        let (_, borrow) = Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO);
        assert_eq!(Limb(borrow.0 & 0x5A), Limb::from_u8(0x5A));
    }

    #[test]
    fn wrapping() {
        assert_eq!(Limb::MAX.wrapping_add(Limb::ONE), Limb::ZERO);
        assert_eq!(Limb::ZERO.wrapping_sub(Limb::ONE), Limb::MAX);
    }

    #[test]
    fn products_of_max() {
        let (lo, hi) = Limb::MAX.widening_mul(Limb::MAX);
        assert_eq!(lo, Limb::ONE);
        assert_eq!(hi, Limb::MAX.wrapping_sub(Limb::ONE));

        let (lo, hi) = Limb::MAX.carrying_mul_add(Limb::MAX, Limb::MAX, Limb::MAX);
        assert_eq!(lo, Limb::MAX);
        assert_eq!(hi, Limb::MAX);
    }
}
