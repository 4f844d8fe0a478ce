//! Big integers are represented as an array of smaller CPU word-size integers
//! called "limbs".

mod arith;
mod bits;
mod cmp;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{WideWord, Word};
use core::fmt;

/// A single digit of a multi-precision integer in base `β = 2^Limb::BITS`.
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation, depending on the target.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Default, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express, `β - 1`.
    pub const MAX: Self = Limb(Word::MAX);

    /// Highest bit in a [`Limb`].
    pub(crate) const HI_BIT: u32 = Limb::BITS - 1;

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = Word::BITS as usize / 8;

    /// Create a [`Limb`] from a `u8` integer (const-friendly)
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        Limb(n as Word)
    }

    /// Is the most significant bit of this limb set?
    ///
    /// Divisors handed to the division kernel must have a normalized leading limb.
    #[inline(always)]
    #[must_use]
    pub const fn is_normalized(self) -> bool {
        self.0 >> Self::HI_BIT == 1
    }

    /// Join `self` (low) and `hi` into a [`WideWord`].
    #[inline(always)]
    #[must_use]
    pub const fn to_wide_with(self, hi: Limb) -> WideWord {
        ((hi.0 as WideWord) << Word::BITS) | (self.0 as WideWord)
    }
}

impl From<u8> for Limb {
    #[inline]
    fn from(n: u8) -> Limb {
        Limb::from_u8(n)
    }
}

impl From<Word> for Limb {
    #[inline]
    fn from(n: Word) -> Limb {
        Limb(n)
    }
}

impl From<Limb> for WideWord {
    #[inline]
    fn from(limb: Limb) -> WideWord {
        limb.0.into()
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::Display for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use crate::{WideWord, Word};

    #[test]
    fn is_normalized() {
        assert!(Limb::MAX.is_normalized());
        assert!(Limb::ONE.shl(Limb::HI_BIT).is_normalized());
        assert!(!Limb::MAX.shr(1).is_normalized());
        assert!(!Limb::ZERO.is_normalized());
    }

    #[test]
    fn to_wide_with() {
        let wide = Limb::ONE.to_wide_with(Limb::MAX);
        assert_eq!(wide as Word, 1);
        assert_eq!((wide >> Limb::BITS) as Word, Word::MAX);
        assert_eq!(WideWord::from(Limb::MAX), Word::MAX as WideWord);
    }

    #[test]
    fn conversions() {
        assert_eq!(Limb::from(7u8), Limb::from_u8(7));
        assert_eq!(Limb::from(Word::MAX), Limb::MAX);
        assert_eq!(Limb::BYTES * 8, Limb::BITS as usize);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn debug() {
        extern crate alloc;

        #[cfg(target_pointer_width = "32")]
        assert_eq!(alloc::format!("{:?}", Limb(42)), "Limb(0x0000002A)");

        #[cfg(target_pointer_width = "64")]
        assert_eq!(alloc::format!("{:?}", Limb(42)), "Limb(0x000000000000002A)");
    }
}
