//! Unsigned integer reference type.

use crate::Limb;
use core::fmt;

mod add;
mod cmp;
mod submul;
mod shl;
mod sub;

/// Unsigned integer reference type.
///
/// This type wraps a little-endian limb slice: the numerator windows, divisor and quotient
/// buffers the division kernel operates on are all borrowed as [`UintRef`]s.
#[repr(transparent)]
#[derive(PartialEq, Eq)]
pub struct UintRef(pub [Limb]);

impl UintRef {
    /// Create a [`UintRef`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new(limbs: &[Limb]) -> &Self {
        // SAFETY: `UintRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &*(limbs as *const [Limb] as *const UintRef)
        }
    }

    /// Create a mutable [`UintRef`] reference type from a [`Limb`] slice.
    #[inline]
    pub const fn new_mut(limbs: &mut [Limb]) -> &mut Self {
        // SAFETY: `UintRef` is a `repr(transparent)` newtype for `[Limb]`.
        #[allow(trivial_casts, unsafe_code)]
        unsafe {
            &mut *(limbs as *mut [Limb] as *mut UintRef)
        }
    }

    /// Get an iterator over the inner limbs, least significant first.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Limb> {
        self.0.iter()
    }

    /// Access the number of limbs.
    #[inline]
    pub const fn nlimbs(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for UintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UintRef(0x{self:X})")
    }
}

impl fmt::UpperHex for UintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.iter().rev() {
            write!(f, "{:0width$X}", &limb.0, width = Limb::BYTES * 2)?;
        }
        Ok(())
    }
}
