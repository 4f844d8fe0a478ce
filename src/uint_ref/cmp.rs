//! [`UintRef`] comparison.

use super::UintRef;
use crate::Limb;
use core::cmp::Ordering;

impl UintRef {
    /// Returns the ordering of `self` and `rhs`, in variable time.
    ///
    /// The scan starts at the most significant limb and stops at the first difference.
    ///
    /// # Panics
    /// If `self` and `rhs` have different lengths.
    #[track_caller]
    pub fn cmp_vartime(&self, rhs: &[Limb]) -> Ordering {
        assert_eq!(self.nlimbs(), rhs.len(), "length mismatch in cmp_vartime");
        let mut i = self.nlimbs();
        while i > 0 {
            i -= 1;
            match self.0[i].cmp_vartime(&rhs[i]) {
                Ordering::Equal => continue,
                ordering => return ordering,
            }
        }
        Ordering::Equal
    }
}
