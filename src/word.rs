//! `Word` represents the core integer type we use as the core of `Limb`, and is typically the same
//! size as a pointer on a particular CPU.
//!
//! Comparisons in this module produce `Word`-sized masks (`0` or `Word::MAX`) computed without
//! branching, which is how the division kernel applies its conditional corrections.

use subtle::Choice;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u32;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u64;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Unsigned integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u64;

    /// Wide integer type: double the width of [`Word`].
    pub type WideWord = u128;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;

/// Returns `Word::MAX` if `x < y`, and `0` otherwise.
#[inline]
pub(crate) const fn mask_from_lt(x: Word, y: Word) -> Word {
    let bit = (((!x) & y) | (((!x) | y) & (x.wrapping_sub(y)))) >> (Word::BITS - 1);
    bit.wrapping_neg()
}

/// Returns `Word::MAX` if `x <= y`, and `0` otherwise.
#[inline]
pub(crate) const fn mask_from_le(x: Word, y: Word) -> Word {
    !mask_from_lt(y, x)
}

/// Return `b` if `mask` is `Word::MAX`, otherwise return `a`.
#[inline]
pub(crate) const fn select(a: Word, b: Word, mask: Word) -> Word {
    a ^ (mask & (a ^ b))
}

/// Convert a `Word`-sized mask into a [`Choice`].
#[inline]
pub(crate) fn choice_from_mask(mask: Word) -> Choice {
    Choice::from((mask & 1) as u8)
}

/// Create a `Word`-sized bitmask from a [`Choice`].
///
/// # Returns
/// - `0` for a falsy choice
/// - `Word::MAX` for a truthy choice
#[inline]
pub(crate) fn choice_to_mask(choice: Choice) -> Word {
    Word::from(choice.unwrap_u8()).wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::Word;
    use subtle::Choice;

    #[test]
    fn mask_from_lt() {
        assert_eq!(super::mask_from_lt(4, 5), Word::MAX);
        assert_eq!(super::mask_from_lt(5, 5), 0);
        assert_eq!(super::mask_from_lt(6, 5), 0);
        assert_eq!(super::mask_from_lt(0, Word::MAX), Word::MAX);
        assert_eq!(super::mask_from_lt(Word::MAX, 0), 0);
    }

    #[test]
    fn mask_from_le() {
        assert_eq!(super::mask_from_le(4, 5), Word::MAX);
        assert_eq!(super::mask_from_le(5, 5), Word::MAX);
        assert_eq!(super::mask_from_le(6, 5), 0);
    }

    #[test]
    fn select() {
        let a: Word = 1;
        let b: Word = 2;
        assert_eq!(super::select(a, b, 0), a);
        assert_eq!(super::select(a, b, Word::MAX), b);
    }

    #[test]
    fn choice_roundtrip() {
        assert_eq!(super::choice_to_mask(Choice::from(1)), Word::MAX);
        assert_eq!(super::choice_to_mask(Choice::from(0)), 0);
        assert!(bool::from(super::choice_from_mask(Word::MAX)));
        assert!(!bool::from(super::choice_from_mask(0)));
    }
}
