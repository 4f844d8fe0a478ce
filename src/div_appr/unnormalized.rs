//! Approximate division of arbitrary (unnormalized) operands.

use super::div_appr_q;
use crate::{Limb, Reciprocal, UintRef};
use alloc::vec::Vec;

/// Computes an approximate quotient of `dividend` by `divisor`: either `floor(N / D)` or
/// `floor(N / D) + 1`.
///
/// Leading zero limbs of the divisor are ignored and both operands are shifted so that the
/// divisor is normalized. The result has `max(nn, dn) - dn + 2` limbs, where `nn` and `dn` are
/// the dividend length and the significant divisor length.
///
/// # Panics
/// - if `divisor` is zero;
/// - if `divisor` has fewer than three significant limbs.
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[track_caller]
pub fn div_appr(dividend: &[Limb], divisor: &[Limb]) -> Vec<Limb> {
    let dn = divisor.iter().rposition(|limb| limb.0 != 0).map_or(0, |i| i + 1);
    assert!(dn != 0, "zero divisor");
    assert!(dn > 2, "divisor must have more than two significant limbs");

    let shift = divisor[dn - 1].leading_zeros();
    let mut d = divisor[..dn].to_vec();
    let carry = UintRef::new_mut(&mut d).shl_assign_limb(shift);
    debug_assert_eq!(carry, Limb::ZERO);

    // One extra limb receives the bits shifted out of the dividend
    let mut n = Vec::with_capacity(dividend.len().max(dn) + 1);
    n.extend_from_slice(dividend);
    n.resize(dividend.len().max(dn), Limb::ZERO);
    let hi = UintRef::new_mut(&mut n).shl_assign_limb(shift);
    n.push(hi);

    let reciprocal = Reciprocal::new_normalized(d[dn - 1], d[dn - 2]);
    let mut quotient = Vec::with_capacity(n.len() - dn + 1);
    quotient.resize(n.len() - dn, Limb::ZERO);
    let qh = div_appr_q(&mut quotient, &mut n, &d, &reciprocal);
    quotient.push(qh);
    quotient
}
