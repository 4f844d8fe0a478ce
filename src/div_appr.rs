//! Approximate schoolbook division by a normalized multi-limb divisor.
//!
//! The quotient is computed one limb at a time from the most significant end, each digit
//! estimated from a 3/2 reciprocal of the divisor's two leading limbs. Once fewer than
//! `dn` quotient limbs remain, the divisor is truncated by one low limb per digit: the
//! remainder stops being exact, and the resulting quotient is either correct or one too large.

mod observer;

#[cfg(feature = "alloc")]
mod unnormalized;

pub use self::observer::{DigitCounter, DigitPath, DigitStep, DivApprObserver, Phase};

#[cfg(feature = "alloc")]
pub use self::unnormalized::div_appr;

use crate::{Limb, Reciprocal, UintRef, reciprocal::div3by2};
use core::cmp::Ordering;

/// Computes an approximate quotient of `workspace` by `divisor`.
///
/// With `nn = workspace.len()` and `dn = divisor.len()`, the `qn = nn - dn` low quotient limbs
/// are written to `quotient` and the quotient's overflow limb (`Limb::ZERO` or `Limb::ONE`) is
/// returned. The full quotient `qh·β^qn + quotient` is either `floor(N / D)` or
/// `floor(N / D) + 1`.
///
/// `workspace` holds the dividend and is destroyed: on return, if `qn > 0`,
/// `workspace[dn - 2..dn]` holds the two most significant limbs of the approximate remainder.
///
/// # Panics
/// - if `divisor` has fewer than three limbs or is not normalized;
/// - if `workspace` is shorter than `divisor`;
/// - if `quotient.len() != nn - dn`;
/// - if `reciprocal` was not computed from the two leading limbs of `divisor`.
#[track_caller]
pub fn div_appr_q(
    quotient: &mut [Limb],
    workspace: &mut [Limb],
    divisor: &[Limb],
    reciprocal: &Reciprocal,
) -> Limb {
    div_appr_q_observed(quotient, workspace, divisor, reciprocal, &mut ())
}

/// [`div_appr_q`], reporting every finalized quotient digit to `observer`.
#[track_caller]
pub fn div_appr_q_observed<O: DivApprObserver + ?Sized>(
    quotient: &mut [Limb],
    workspace: &mut [Limb],
    divisor: &[Limb],
    reciprocal: &Reciprocal,
    observer: &mut O,
) -> Limb {
    let nn = workspace.len();
    let dn = divisor.len();
    assert!(dn > 2, "divisor must have more than two limbs");
    assert!(nn >= dn, "dividend shorter than divisor");
    assert!(divisor[dn - 1].is_normalized(), "divisor not normalized");
    assert_eq!(quotient.len(), nn - dn, "quotient length mismatch");
    assert!(
        reciprocal.d1() == divisor[dn - 1] && reciprocal.d0() == divisor[dn - 2],
        "reciprocal does not match divisor"
    );

    let qn = nn - dn;
    let (divisor, qh) = align(workspace, divisor);
    if qn == 0 {
        return qh;
    }

    let dn = divisor.len();
    let lo = dn - 2;
    let mut kernel = Kernel::new(workspace, divisor, reciprocal);
    let mut qp = qn;

    for _ in 0..(qn + 1 - dn) {
        let (digit, path, add_backs) = kernel.exact_digit();
        qp -= 1;
        quotient[qp] = digit;
        kernel.report(observer, qp, digit, path, Phase::Exact, add_backs, lo, 0);
    }

    for k in (0..=lo).rev() {
        let dp = lo - k;
        let (digit, path, add_backs) = kernel.tail_digit(k, dp);
        let phase = if k == 0 { Phase::Final } else { Phase::Truncated };
        qp -= 1;
        quotient[qp] = digit;
        kernel.report(observer, qp, digit, path, phase, add_backs, k, dp);
    }

    debug_assert_eq!(qp, 0);
    debug_assert_eq!(kernel.n[kernel.np + 1], kernel.n1);
    qh
}

/// Drop the divisor limbs that cannot influence a `qn`-limb quotient, then reduce the top of
/// the workspace below the divisor. Returns the divisor in use and the quotient's overflow limb.
fn align<'a>(workspace: &mut [Limb], divisor: &'a [Limb]) -> (&'a [Limb], Limb) {
    let nn = workspace.len();
    let qn = nn - divisor.len();
    let divisor = if qn + 1 < divisor.len() {
        &divisor[divisor.len() - (qn + 1)..]
    } else {
        divisor
    };

    let top = UintRef::new_mut(&mut workspace[nn - divisor.len()..]);
    let qh = top.cmp_vartime(divisor) != Ordering::Less;
    if qh {
        top.borrowing_sub_assign_slice(divisor, Limb::ZERO);
    }
    (divisor, Limb::from_u8(qh as u8))
}

/// Working state of one division.
///
/// The active remainder window for a digit is `n[np - k..np + 2]`, reduced against
/// `d[dp..dp + k + 2]`; `n1` caches its most significant limb.
struct Kernel<'a> {
    n: &'a mut [Limb],
    d: &'a [Limb],
    reciprocal: &'a Reciprocal,
    np: usize,
    n1: Limb,
    flag: Limb,
}

impl<'a> Kernel<'a> {
    fn new(n: &'a mut [Limb], d: &'a [Limb], reciprocal: &'a Reciprocal) -> Self {
        let nn = n.len();
        Self {
            n1: n[nn - 1],
            np: nn - 2,
            n,
            d,
            reciprocal,
            flag: Limb::MAX,
        }
    }

    /// Next digit against the full divisor.
    fn exact_digit(&mut self) -> (Limb, DigitPath, u32) {
        self.np -= 1;
        let lo = self.d.len() - 2;
        let saturated =
            self.n1 == self.reciprocal.d1() && self.n[self.np + 1] == self.reciprocal.d0();
        if saturated {
            self.saturate(lo, 0);
            (Limb::MAX, DigitPath::Saturated, 0)
        } else {
            let (digit, add_backs) = self.estimate(lo, 0);
            (digit, DigitPath::Estimated, add_backs)
        }
    }

    /// Next digit against `d[dp..dp + k + 2]`. Once the latch is cleared `d1 & flag` is zero
    /// and every remaining digit saturates.
    fn tail_digit(&mut self, k: usize, dp: usize) -> (Limb, DigitPath, u32) {
        self.np -= 1;
        if self.n1.0 >= (self.reciprocal.d1().0 & self.flag.0) {
            let (digit, add_backs) = self.saturate_truncated(k, dp);
            (digit, DigitPath::Saturated, add_backs)
        } else {
            let (digit, add_backs) = self.estimate(k, dp);
            (digit, DigitPath::Estimated, add_backs)
        }
    }

    /// Estimate the digit with `div3by2`, then subtract `digit · d[dp..dp + k]` from the limbs
    /// below the leading three. Returns the digit and the number of add-backs.
    fn estimate(&mut self, k: usize, dp: usize) -> (Limb, u32) {
        let np = self.np;
        let (digit, n1, n0) = div3by2(self.n1, self.n[np + 1], self.n[np], self.reciprocal);

        let cy = UintRef::new_mut(&mut self.n[np - k..np])
            .submul_assign_slice(&self.d[dp..dp + k], digit);
        let (n0, cy1) = n0.borrowing_sub(cy, Limb::ZERO);
        let (n1, cy) = n1.borrowing_sub(Limb::ZERO, cy1);
        self.n[np] = n0;

        let (digit, n1, add_backs) = if cy.0 != 0 {
            let carry = UintRef::new_mut(&mut self.n[np - k..=np])
                .carrying_add_assign_slice(&self.d[dp..=dp + k], Limb::ZERO);
            let n1 = n1.wrapping_add(self.reciprocal.d1()).wrapping_add(carry);
            (digit.wrapping_sub(Limb::ONE), n1, 1)
        } else {
            (digit, n1, 0)
        };

        self.n[np + 1] = n1;
        self.n1 = n1;
        (digit, add_backs)
    }

    /// Subtract `Limb::MAX · d[dp..dp + k + 2]` from the whole window, discarding the borrow.
    fn saturate(&mut self, k: usize, dp: usize) -> Limb {
        let np = self.np;
        let cy = UintRef::new_mut(&mut self.n[np - k..np + 2])
            .submul_assign_slice(&self.d[dp..dp + k + 2], Limb::MAX);
        self.n1 = self.n[np + 1];
        cy
    }

    /// Saturated digit while the divisor is truncated.
    ///
    /// If the borrow disagrees with the cached leading limb, either add the divisor back once
    /// or clear the latch for the rest of the division.
    fn saturate_truncated(&mut self, k: usize, dp: usize) -> (Limb, u32) {
        let n1 = self.n1;
        let np = self.np;
        let cy = self.saturate(k, dp);

        let mut digit = Limb::MAX;
        let mut add_backs = 0;
        if n1 != cy {
            if n1.0 < (cy.0 & self.flag.0) {
                digit = digit.wrapping_sub(Limb::ONE);
                UintRef::new_mut(&mut self.n[np - k..np + 2])
                    .carrying_add_assign_slice(&self.d[dp..dp + k + 2], Limb::ZERO);
                add_backs = 1;
            } else {
                self.flag = Limb::ZERO;
            }
        }

        self.n1 = self.n[np + 1];
        (digit, add_backs)
    }

    #[allow(clippy::too_many_arguments)]
    #[inline]
    fn report<O: DivApprObserver + ?Sized>(
        &self,
        observer: &mut O,
        position: usize,
        digit: Limb,
        path: DigitPath,
        phase: Phase,
        add_backs: u32,
        k: usize,
        dp: usize,
    ) {
        let np = self.np;
        observer.on_digit(&DigitStep {
            position,
            digit,
            path,
            phase,
            add_backs,
            exact: self.flag.0 != 0,
            remainder: &self.n[np - k..np + 2],
            divisor: &self.d[dp..dp + k + 2],
        });
    }
}
