use super::UintRef;
use crate::Limb;

impl UintRef {
    /// Perform an in-place borrowing subtraction of another limb slice, returning the borrowed
    /// limb value (`Limb::ZERO` or `Limb::MAX`).
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[inline]
    #[track_caller]
    pub const fn borrowing_sub_assign_slice(&mut self, rhs: &[Limb], mut borrow: Limb) -> Limb {
        assert!(
            self.0.len() == rhs.len(),
            "length mismatch in borrowing_sub_assign_slice"
        );
        let mut i = 0;
        while i < self.0.len() {
            (self.0[i], borrow) = self.0[i].borrowing_sub(rhs[i], borrow);
            i += 1;
        }
        borrow
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, UintRef};

    #[test]
    fn borrowing_sub_assign_slice_no_borrow() {
        let mut x = [Limb::ZERO, Limb::ONE];
        let borrow = UintRef::new_mut(&mut x)
            .borrowing_sub_assign_slice(&[Limb::ONE, Limb::ZERO], Limb::ZERO);
        assert_eq!(x, [Limb::MAX, Limb::ZERO]);
        assert_eq!(borrow, Limb::ZERO);
    }

    #[test]
    fn borrowing_sub_assign_slice_wraps() {
        let mut x = [Limb::ZERO, Limb::ZERO];
        let borrow = UintRef::new_mut(&mut x)
            .borrowing_sub_assign_slice(&[Limb::ONE, Limb::ZERO], Limb::ZERO);
        assert_eq!(x, [Limb::MAX, Limb::MAX]);
        assert_eq!(borrow, Limb::MAX);
    }
}
