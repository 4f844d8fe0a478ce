use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Subtract `rhs * q` from `self` in place, returning the limb that would have to be
    /// subtracted from the limb just above `self` to complete the operation.
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn submul_assign_slice(&mut self, rhs: &[Limb], q: Limb) -> Limb {
        assert!(
            self.0.len() == rhs.len(),
            "length mismatch in submul_assign_slice"
        );
        let mut carry = Limb::ZERO;
        let mut i = 0;
        while i < self.0.len() {
            let (lo, hi) = rhs[i].carrying_mul_add(q, Limb::ZERO, carry);
            let (res, borrow) = self.0[i].borrowing_sub(lo, Limb::ZERO);
            self.0[i] = res;
            // `hi <= Limb::MAX - 1` whenever a borrow is possible
            carry = hi.wrapping_sub(borrow);
            i += 1;
        }
        carry
    }
}
