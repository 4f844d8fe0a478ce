//! Per-digit instrumentation for the approximate division kernel.

use crate::{Limb, UintRef};
use core::cmp::Ordering;

/// How a quotient digit was produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DigitPath {
    /// Estimated with the 3/2 reciprocal, then corrected.
    Estimated,
    /// Forced to `Limb::MAX` because the leading remainder limbs reached the divisor.
    Saturated,
}

/// Which stage of the kernel produced a quotient digit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Full-width divisor: the remainder stays exact.
    Exact,
    /// The divisor window shrinks by one limb per digit.
    Truncated,
    /// The least significant digit, computed from the two leading divisor limbs only.
    Final,
}

/// Snapshot handed to a [`DivApprObserver`] after a quotient digit is finalized.
#[derive(Copy, Clone, Debug)]
pub struct DigitStep<'a> {
    /// Index of the digit in the quotient buffer.
    pub position: usize,

    /// The stored digit.
    pub digit: Limb,

    /// Whether the digit was estimated or saturated.
    pub path: DigitPath,

    /// Kernel stage.
    pub phase: Phase,

    /// Number of times the divisor was added back (`0` or `1`).
    pub add_backs: u32,

    /// State of the truncation latch after this digit. Once `false` it stays `false`.
    pub exact: bool,

    /// Active partial remainder, least significant limb first.
    pub remainder: &'a [Limb],

    /// Divisor limbs the remainder was reduced against.
    pub divisor: &'a [Limb],
}

impl DigitStep<'_> {
    /// Is the active remainder window strictly below the divisor window?
    pub fn remainder_below_divisor(&self) -> bool {
        UintRef::new(self.remainder).cmp_vartime(self.divisor) == Ordering::Less
    }
}

/// Receives a [`DigitStep`] for every quotient digit, most significant first.
///
/// Observers cannot influence the computation.
pub trait DivApprObserver {
    /// Called once per finalized quotient digit.
    fn on_digit(&mut self, step: &DigitStep<'_>);
}

impl DivApprObserver for () {
    #[inline(always)]
    fn on_digit(&mut self, _step: &DigitStep<'_>) {}
}

impl<O: DivApprObserver + ?Sized> DivApprObserver for &mut O {
    #[inline]
    fn on_digit(&mut self, step: &DigitStep<'_>) {
        (**self).on_digit(step);
    }
}

/// Tallies the paths taken by the kernel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DigitCounter {
    /// Digits produced by the reciprocal estimate.
    pub estimated: usize,

    /// Digits forced to `Limb::MAX`.
    pub saturated: usize,

    /// Total add-back corrections.
    pub add_backs: usize,

    /// Digits produced while the remainder was exact.
    pub exact_phase: usize,

    /// Position of the first digit after which the truncation latch was cleared.
    pub latch_cleared_at: Option<usize>,
}

impl DigitCounter {
    /// Total number of digits seen.
    pub fn digits(&self) -> usize {
        self.estimated + self.saturated
    }
}

impl DivApprObserver for DigitCounter {
    fn on_digit(&mut self, step: &DigitStep<'_>) {
        match step.path {
            DigitPath::Estimated => self.estimated += 1,
            DigitPath::Saturated => self.saturated += 1,
        }
        self.add_backs += step.add_backs as usize;
        if step.phase == Phase::Exact {
            self.exact_phase += 1;
        }
        if !step.exact && self.latch_cleared_at.is_none() {
            self.latch_cleared_at = Some(step.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DigitCounter, DigitPath, DigitStep, DivApprObserver, Phase};
    use crate::Limb;

    fn step<'a>(remainder: &'a [Limb], divisor: &'a [Limb], path: DigitPath) -> DigitStep<'a> {
        DigitStep {
            position: 3,
            digit: Limb::MAX,
            path,
            phase: Phase::Truncated,
            add_backs: 1,
            exact: false,
            remainder,
            divisor,
        }
    }

    #[test]
    fn counter_tallies() {
        let rem = [Limb::ONE, Limb::ZERO];
        let div = [Limb::ZERO, Limb::MAX];
        let mut counter = DigitCounter::default();
        counter.on_digit(&step(&rem, &div, DigitPath::Saturated));
        counter.on_digit(&step(&rem, &div, DigitPath::Estimated));

        assert_eq!(counter.digits(), 2);
        assert_eq!(counter.saturated, 1);
        assert_eq!(counter.add_backs, 2);
        assert_eq!(counter.exact_phase, 0);
        assert_eq!(counter.latch_cleared_at, Some(3));
    }

    #[test]
    fn remainder_below_divisor() {
        let rem = [Limb::MAX, Limb::ONE];
        let div = [Limb::ZERO, Limb::MAX];
        assert!(step(&rem, &div, DigitPath::Estimated).remainder_below_divisor());
        assert!(!step(&div, &rem, DigitPath::Estimated).remainder_below_divisor());
        assert!(!step(&div, &div, DigitPath::Estimated).remainder_below_divisor());
    }

    #[test]
    fn forwards_through_mut_ref() {
        let rem = [Limb::ONE, Limb::ZERO];
        let div = [Limb::ZERO, Limb::MAX];
        let mut counter = DigitCounter::default();

        fn feed<O: DivApprObserver>(mut observer: O, step: &DigitStep<'_>) {
            observer.on_digit(step);
        }

        feed(&mut counter, &step(&rem, &div, DigitPath::Estimated));
        feed(&mut counter, &step(&rem, &div, DigitPath::Estimated));
        assert_eq!(counter.estimated, 2);
    }
}
