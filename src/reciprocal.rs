//! Precomputed reciprocals for division by invariant integers, as described in
//! "Improved Division by Invariant Integers" by Niels Möller and Torbjorn Granlund
//! (DOI: 10.1109/TC.2010.143, <https://gmplib.org/~tege/division-paper.pdf>).
//!
//! Both reciprocals require a normalized divisor, i.e. one whose most significant limb has its
//! top bit set.

use crate::{
    Limb, WideWord, Word,
    primitives::{addhilo, subhilo, widening_mul},
    word::{mask_from_le, mask_from_lt, select},
};
use subtle::{Choice, ConditionallySelectable, CtOption};

/// Calculates the 2/1 reciprocal `floor((β² - 1) / d) - β` of a normalized limb `d`,
/// where `β = 2^Limb::BITS`.
///
/// This uses the hardware wide division and is variable-time.
#[inline]
#[must_use]
pub const fn reciprocal_2by1(d: Limb) -> Limb {
    debug_assert!(d.is_normalized());
    // `floor((β² - 1) / d)` lies in `[β, 2β)`: its low word is the reciprocal
    Limb((WideWord::MAX / d.0 as WideWord) as Word)
}

/// Calculate the quotient and the remainder of the division of a wide word
/// (supplied as high and low limbs) by `d`, with a precalculated reciprocal `v`.
///
/// Requires `u1 < d` and `v == reciprocal_2by1(d)`.
#[inline(always)]
#[must_use]
pub const fn div2by1(u1: Limb, u0: Limb, d: Limb, v: Limb) -> (Limb, Limb) {
    let (u1, u0, d) = (u1.0, u0.0, d.0);
    debug_assert!(d >= (1 << (Word::BITS - 1)));
    debug_assert!(u1 < d);

    let (q0, q1) = widening_mul(v.0, u1);
    let (q0, q1) = addhilo(q0, q1, u0, u1);
    let q1 = q1.wrapping_add(1);
    let r = u0.wrapping_sub(q1.wrapping_mul(d));

    let r_gt_q0 = mask_from_lt(q0, r);
    let q1 = select(q1, q1.wrapping_sub(1), r_gt_q0);
    let r = select(r, r.wrapping_add(d), r_gt_q0);

    // If this was a normal `if`, we wouldn't need wrapping ops, because there would be no overflow.
    // But since we calculate both results either way, we have to wrap.
    debug_assert!(r < d || q1 < Word::MAX);
    let r_ge_d = mask_from_le(d, r);
    let q1 = select(q1, q1.wrapping_add(1), r_ge_d);
    let r = select(r, r.wrapping_sub(d), r_ge_d);

    (Limb(q1), Limb(r))
}

/// Divide the three-limb value `(u2, u1, u0)` by the two leading divisor limbs encoded in
/// `reciprocal`, returning the quotient digit and the two-limb remainder `(q, r1, r0)`.
///
/// Requires `(u2, u1) < (d1, d0)`, which keeps the quotient within a single limb. The digit is
/// estimated from `u2 * v`, then corrected at most twice.
#[inline(always)]
#[must_use]
pub const fn div3by2(u2: Limb, u1: Limb, u0: Limb, reciprocal: &Reciprocal) -> (Limb, Limb, Limb) {
    let (u2, u1, u0) = (u2.0, u1.0, u0.0);
    let (d1, d0, v) = (reciprocal.d1.0, reciprocal.d0.0, reciprocal.inverse.0);
    debug_assert!(u2 < d1 || (u2 == d1 && u1 < d0));

    let (q0, q) = widening_mul(u2, v);
    let (q0, q) = addhilo(q0, q, u1, u2);

    // (r1, r0) = (u1, u0) - q * (d1, d0) - (d1, d0), modulo β²
    let r1 = u1.wrapping_sub(d1.wrapping_mul(q));
    let (r0, r1) = subhilo(u0, r1, d0, d1);
    let (t0, t1) = widening_mul(d0, q);
    let (r0, r1) = subhilo(r0, r1, t0, t1);
    let q = q.wrapping_add(1);

    let r1_ge_q0 = !mask_from_lt(r1, q0);
    let q = q.wrapping_add(r1_ge_q0);
    let (r0, r1) = addhilo(r0, r1, r1_ge_q0 & d0, r1_ge_q0 & d1);

    // Rare: the remainder is still at least the divisor
    let r_ge_d = mask_from_le(d1, r1) & (mask_from_lt(d1, r1) | mask_from_le(d0, r0));
    let q = q.wrapping_sub(r_ge_d);
    let (r0, r1) = subhilo(r0, r1, r_ge_d & d0, r_ge_d & d1);

    (Limb(q), Limb(r1), Limb(r0))
}

/// A pre-calculated 3/2 reciprocal of the two leading limbs of a normalized divisor.
///
/// The inverse is `v = floor((β³ - 1) / (d1·β + d0)) - β`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reciprocal {
    d1: Limb,
    d0: Limb,
    inverse: Limb,
}

impl Reciprocal {
    /// Pre-calculates the reciprocal of the two-limb divisor `(d1, d0)`.
    ///
    /// Returns `CtOption::none()` if `d1` does not have its top bit set.
    pub fn new(d1: Limb, d0: Limb) -> CtOption<Self> {
        let is_some = Choice::from(d1.is_normalized() as u8);
        // A placeholder keeps the computation panic-free for unnormalized input
        let d1_or_max = Limb::conditional_select(&Limb::MAX, &d1, is_some);
        CtOption::new(Self::new_normalized(d1_or_max, d0), is_some)
    }

    /// Pre-calculates the reciprocal of the two leading limbs of `divisor`.
    ///
    /// # Panics
    /// If `divisor` has fewer than two limbs.
    #[track_caller]
    pub fn from_divisor(divisor: &[Limb]) -> CtOption<Self> {
        assert!(divisor.len() >= 2, "divisor must have at least two limbs");
        let dn = divisor.len();
        Self::new(divisor[dn - 1], divisor[dn - 2])
    }

    /// Derives the 3/2 reciprocal from the 2/1 reciprocal of `d1`, first folding in `d1·v + d0`
    /// and then the high part of `d0·v`.
    pub(crate) const fn new_normalized(d1: Limb, d0: Limb) -> Self {
        debug_assert!(d1.is_normalized());
        let (d1w, d0w) = (d1.0, d0.0);
        let mut v = reciprocal_2by1(d1).0;

        let p = d1w.wrapping_mul(v).wrapping_add(d0w);
        let overflow = mask_from_lt(p, d0w);
        let again = overflow & !mask_from_lt(p, d1w);
        v = v.wrapping_add(overflow).wrapping_add(again);
        let p = p.wrapping_sub(overflow & d1w).wrapping_sub(again & d1w);

        let (t0, t1) = widening_mul(d0w, v);
        let p = p.wrapping_add(t1);
        let overflow = mask_from_lt(p, t1);
        let again =
            overflow & mask_from_le(d1w, p) & (mask_from_lt(d1w, p) | mask_from_le(d0w, t0));
        v = v.wrapping_add(overflow).wrapping_add(again);

        Self {
            d1,
            d0,
            inverse: Limb(v),
        }
    }

    /// The most significant divisor limb.
    #[inline]
    #[must_use]
    pub const fn d1(&self) -> Limb {
        self.d1
    }

    /// The second most significant divisor limb.
    #[inline]
    #[must_use]
    pub const fn d0(&self) -> Limb {
        self.d0
    }

    /// The 3/2 inverse `v`.
    #[inline]
    #[must_use]
    pub const fn inverse(&self) -> Limb {
        self.inverse
    }
}

impl ConditionallySelectable for Reciprocal {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            d1: Limb::conditional_select(&a.d1, &b.d1, choice),
            d0: Limb::conditional_select(&a.d0, &b.d0, choice),
            inverse: Limb::conditional_select(&a.inverse, &b.inverse, choice),
        }
    }
}

// `CtOption::map()` needs this for its `None` branch.
impl Default for Reciprocal {
    fn default() -> Self {
        Self::new_normalized(Limb::MAX, Limb::MAX)
    }
}
