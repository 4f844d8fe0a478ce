//! Traits provided by this crate

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Random number generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a random value.
    ///
    /// Division inputs are public data: any [`RngCore`] is accepted, seeded generators included.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
